//! Particle-terrain stepping kernel
//!
//! Sub-cell-precision DDA: one straight-line step per particle per tick,
//! visiting every lattice cell the displacement crosses, in order. Each
//! crossed cell is collision-checked against the terrain (eroding it on
//! impact), counted into the density field, and on a hit the velocity and
//! sub-cell remainder reflect off the surface.
//!
//! Every particle is stepped independently; the two shared grids are the only
//! cross-particle state and are only touched through their atomic ops, so the
//! kernel can run under a parallel-for with no further coordination.

use crate::domain::particle::Particle;
use crate::spatial::density::DensityGrid;
use crate::spatial::fixed_point::GridScale;
use crate::spatial::terrain::TerrainGrid;

/// Per-tick scalar parameters, fixed across all particles of one dispatch.
#[derive(Debug, Clone, Copy)]
pub struct StepParams {
    pub dt: f32,
    pub damage_rate: f32,
    pub scale: GridScale,
}

/// Counters one step contributes to the tick's perf snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepOutcome {
    /// Cell-boundary crossings walked (the DDA trip count).
    pub crossings: u64,
    /// Collisions that reflected the particle.
    pub bounces: u32,
    /// 1 if the particle was alive this tick.
    pub live: u32,
}

impl StepOutcome {
    pub fn merge(self, other: Self) -> Self {
        Self {
            crossings: self.crossings + other.crossings,
            bounces: self.bounces + other.bounces,
            live: self.live + other.live,
        }
    }
}

#[inline]
fn speed(vel: [i32; 2]) -> f32 {
    let vx = vel[0] as f32;
    let vy = vel[1] as f32;
    (vx * vx + vy * vy).sqrt()
}

/// Advance one particle by one tick.
///
/// Pure over the particle value; side effects are erosion on `terrain` and
/// visit counts on `density`. Dead particles (`ttl <= 0`) are returned
/// untouched with a zero outcome.
pub fn step_particle(
    p: Particle,
    terrain: &TerrainGrid,
    density: &DensityGrid,
    params: &StepParams,
) -> (Particle, StepOutcome) {
    if p.is_dead() {
        return (p, StepOutcome::default());
    }
    let scale = params.scale;
    let bits = scale.mantissa_bits();

    // Fixed-point displacement for this tick. The float multiply is cast with
    // truncation toward zero, and the unsigned add wraps at the ends of the
    // coordinate range (accepted edge case, see Particle docs).
    let delta = [
        (p.velocity[0] as f32 * params.dt) as i32,
        (p.velocity[1] as f32 * params.dt) as i32,
    ];
    let end_pos = [
        p.position[0].wrapping_add_signed(delta[0]),
        p.position[1].wrapping_add_signed(delta[1]),
    ];

    // Zero delta counts as a positive step for tie-breaking.
    let mut step = [
        if delta[0] >= 0 { 1i32 } else { -1 },
        if delta[1] >= 0 { 1i32 } else { -1 },
    ];

    let mut cell = [scale.cell_of(p.position[0]), scale.cell_of(p.position[1])];
    let end_cell = [scale.cell_of(end_pos[0]), scale.cell_of(end_pos[1])];
    // Boundary crossings this tick, not visited cells.
    let num_cells =
        (end_cell[0] - cell[0]).unsigned_abs() as u64 + (end_cell[1] - cell[1]).unsigned_abs() as u64;

    // Error accumulator seeded from the true sub-cell start remainder, so a
    // particle that starts off-center traverses the exact cells its line
    // crosses. All terms are in sub-cell units; advancing a boundary moves
    // the remainder by a whole cell, hence the cell-size-scaled branch
    // deltas. i64 keeps every product exact.
    let dax = (delta[0] as i64).abs();
    let day = (delta[1] as i64).abs();
    let srx = (scale.half_cell() - scale.remainder_of(p.position[0])) as i64 * step[0] as i64;
    let sry = (scale.half_cell() - scale.remainder_of(p.position[1])) as i64 * step[1] as i64;
    let mut error = dax * sry - day * srx;
    let dax_scaled = dax << bits;
    let day_scaled = day << bits;

    let mut end_rem = [
        scale.remainder_of(end_pos[0]),
        scale.remainder_of(end_pos[1]),
    ];
    let mut vel = p.velocity;
    let mut bounces = 0u32;

    for _ in 0..num_cells {
        let error_horizontal = error - day_scaled;
        let error_vertical = error + dax_scaled;
        // Symmetric midpoint test; this exact inequality fixes the
        // boundary-tie behavior.
        if error_vertical > -error_horizontal {
            // Horizontal step
            error = error_horizontal;
            cell[0] += step[0];
            if terrain.try_erode(cell[0], cell[1], speed(vel), params.damage_rate) {
                // Bounce horizontally
                cell[0] -= step[0];
                step[0] = -step[0];
                vel[0] = vel[0].wrapping_neg();
                end_rem[1] = scale.cell_size() - end_rem[1] - 1;
                bounces += 1;
            }
        } else {
            // Vertical step
            error = error_vertical;
            cell[1] += step[1];
            if terrain.try_erode(cell[0], cell[1], speed(vel), params.damage_rate) {
                // Bounce vertically
                cell[1] -= step[1];
                step[1] = -step[1];
                vel[1] = vel[1].wrapping_neg();
                end_rem[0] = scale.cell_size() - end_rem[0] - 1;
                bounces += 1;
            }
        }
        // Density trail: every visited cell, bounce or not.
        if terrain.is_on_grid(cell[0], cell[1]) {
            density.increment(cell[0], cell[1]);
        }
    }

    let out = Particle {
        position: [
            scale.compose(cell[0], end_rem[0]),
            scale.compose(cell[1], end_rem[1]),
        ],
        velocity: vel,
        ttl: p.ttl - params.dt,
        pad: p.pad,
    };
    (
        out,
        StepOutcome {
            crossings: num_cells,
            bounces,
            live: 1,
        },
    )
}
