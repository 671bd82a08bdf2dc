//! Property-based tests for the stepping kernel
//!
//! These check kernel invariants across random starts and velocities:
//! - Unobstructed walks visit exactly the crossed cells and land on the
//!   analytic endpoint
//! - Collisions only ever flip velocity signs, never change magnitudes
//! - Terrain mass is monotonically non-increasing under stepping
//! - Particles never leave the grid

use erosim_engine::{
    step_particle, DensityGrid, GridScale, Particle, SimSettings, Simulation, StepParams,
    TerrainGrid,
};
use proptest::prelude::*;

const GRID_W: u32 = 64;
const GRID_H: u32 = 64;
const MANTISSA_BITS: u32 = 8;
const CELL: i32 = 1 << MANTISSA_BITS;

fn scale() -> GridScale {
    GridScale::new(MANTISSA_BITS)
}

fn params(damage_rate: f32) -> StepParams {
    StepParams {
        dt: 1.0,
        damage_rate,
        scale: scale(),
    }
}

/// Particle at a random sub-cell position, at least `margin` cells from every
/// grid edge.
fn inner_particle(margin: i32, max_vel: i32) -> impl Strategy<Value = Particle> {
    (
        margin..GRID_W as i32 - margin,
        margin..GRID_H as i32 - margin,
        0..CELL,
        0..CELL,
        -max_vel..=max_vel,
        -max_vel..=max_vel,
    )
        .prop_map(|(cx, cy, rx, ry, vx, vy)| {
            let s = scale();
            Particle::new([s.compose(cx, rx), s.compose(cy, ry)], [vx, vy], 100.0)
        })
}

/// True if `remaining` can be ordered into a chain starting 8-adjacent to
/// `from` and ending at `end`, visiting every cell once. Backtracking over
/// the handful of cells one tick can cross.
fn chain_covers(from: (i32, i32), remaining: &[(i32, i32)], end: (i32, i32)) -> bool {
    if remaining.is_empty() {
        return from == end;
    }
    remaining.iter().enumerate().any(|(i, &next)| {
        (next.0 - from.0).abs() <= 1 && (next.1 - from.1).abs() <= 1 && {
            let mut rest = remaining.to_vec();
            rest.swap_remove(i);
            chain_covers(next, &rest, end)
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// An unobstructed walk ends exactly at the analytic endpoint, counts one
    /// density visit per boundary crossing, and its visited cells form one
    /// unbroken 8-connected path from the start cell to the end cell with no
    /// cell skipped or revisited.
    #[test]
    fn unobstructed_walk_is_exact(p in inner_particle(8, 2000)) {
        let terrain = TerrainGrid::new(GRID_W, GRID_H);
        let density = DensityGrid::new(GRID_W, GRID_H);
        let s = scale();

        // Velocity fits exactly in f32, so the displacement is the velocity.
        let end_pos = [
            p.position[0].wrapping_add_signed(p.velocity[0]),
            p.position[1].wrapping_add_signed(p.velocity[1]),
        ];
        let expected_crossings =
            (s.cell_of(end_pos[0]) - s.cell_of(p.position[0])).unsigned_abs() as u64
                + (s.cell_of(end_pos[1]) - s.cell_of(p.position[1])).unsigned_abs() as u64;

        let (out, outcome) = step_particle(p, &terrain, &density, &params(1.0));

        prop_assert_eq!(outcome.bounces, 0);
        prop_assert_eq!(outcome.crossings, expected_crossings);
        prop_assert_eq!(out.position, end_pos);
        prop_assert_eq!(out.velocity, p.velocity);
        prop_assert_eq!(
            density.snapshot().iter().map(|&c| c as u64).sum::<u64>(),
            expected_crossings
        );

        // A monotone walk never revisits a cell, so every count is 0 or 1 and
        // the visited set must chain 8-adjacently from start to end.
        let snapshot = density.snapshot();
        let mut visited = Vec::new();
        for (i, &count) in snapshot.iter().enumerate() {
            prop_assert!(count <= 1);
            if count == 1 {
                visited.push((i as i32 % GRID_W as i32, i as i32 / GRID_W as i32));
            }
        }
        let start = (s.cell_of(p.position[0]), s.cell_of(p.position[1]));
        let end = (s.cell_of(end_pos[0]), s.cell_of(end_pos[1]));
        prop_assert!(chain_covers(start, &visited, end));
    }

    /// Collisions negate velocity components but never change their magnitude.
    #[test]
    fn speed_is_preserved_through_bounces(
        p in inner_particle(1, 2000),
        masses in prop::collection::vec(0i32..1000, (GRID_W * GRID_H) as usize),
    ) {
        let terrain = TerrainGrid::new(GRID_W, GRID_H);
        for (i, &m) in masses.iter().enumerate() {
            terrain.set_mass(i as u32 % GRID_W, i as u32 / GRID_W, m);
        }
        let density = DensityGrid::new(GRID_W, GRID_H);

        let (out, _) = step_particle(p, &terrain, &density, &params(1.0));
        prop_assert_eq!(out.velocity[0].abs(), p.velocity[0].abs());
        prop_assert_eq!(out.velocity[1].abs(), p.velocity[1].abs());
    }

    /// Stepping only ever removes terrain mass.
    #[test]
    fn terrain_mass_never_increases(
        particles in prop::collection::vec(inner_particle(1, 2000), 1..32),
        masses in prop::collection::vec(0i32..50, (GRID_W * GRID_H) as usize),
    ) {
        let mut sim = Simulation::new(SimSettings::new(GRID_W, GRID_H, 32)).unwrap();
        for (i, &m) in masses.iter().enumerate() {
            sim.set_terrain_mass(i as u32 % GRID_W, i as u32 / GRID_W, m);
        }
        sim.write_particles(0, &particles);

        let mut before = sim.terrain_snapshot();
        for _ in 0..5 {
            sim.step(1.0);
            let after = sim.terrain_snapshot();
            for (b, a) in before.iter().zip(after.iter()) {
                prop_assert!(a <= b);
            }
            before = after;
        }
    }

    /// No particle ever leaves the grid, whatever the terrain looks like.
    #[test]
    fn particles_stay_on_the_grid(
        particles in prop::collection::vec(inner_particle(1, 2000), 1..32),
        masses in prop::collection::vec(0i32..50, (GRID_W * GRID_H) as usize),
    ) {
        let mut sim = Simulation::new(SimSettings::new(GRID_W, GRID_H, 32)).unwrap();
        for (i, &m) in masses.iter().enumerate() {
            sim.set_terrain_mass(i as u32 % GRID_W, i as u32 / GRID_W, m);
        }
        sim.write_particles(0, &particles);
        let s = sim.scale();

        for _ in 0..5 {
            sim.step(1.0);
            for i in 0..particles.len() {
                let p = sim.particle(i);
                let cx = s.cell_of(p.position[0]);
                let cy = s.cell_of(p.position[1]);
                prop_assert!((0..GRID_W as i32).contains(&cx));
                prop_assert!((0..GRID_H as i32).contains(&cy));
            }
        }
    }
}
