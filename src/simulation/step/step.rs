use crate::systems::stepper::{step_particle, StepOutcome, StepParams};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{PerfTimer, SimulationCore};

pub(super) fn step(core: &mut SimulationCore, dt: f32) {
    let perf_on = core.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let params = StepParams {
        dt,
        damage_rate: core.damage_rate,
        scale: core.scale,
    };
    let terrain = &core.terrain;
    let density = &core.density;

    // One independent unit of work per particle index; the grids' atomics are
    // the only cross-unit state, so the records can be stepped in any order
    // and in parallel.
    #[cfg(feature = "parallel")]
    let totals = core
        .store
        .as_mut_slice()
        .par_iter_mut()
        .map(|record| {
            let (next, outcome) = step_particle(*record, terrain, density, &params);
            *record = next;
            outcome
        })
        .reduce(StepOutcome::default, StepOutcome::merge);

    #[cfg(not(feature = "parallel"))]
    let totals = {
        let mut totals = StepOutcome::default();
        for record in core.store.as_mut_slice().iter_mut() {
            let (next, outcome) = step_particle(*record, terrain, density, &params);
            *record = next;
            totals = totals.merge(outcome);
        }
        totals
    };

    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.particle_count = core.store.capacity() as u32;
        core.perf_stats.live_particles = totals.live;
        core.perf_stats.crossings = totals.crossings;
        core.perf_stats.bounces = totals.bounces;
        core.perf_stats.frame = core.frame;
        core.perf_stats.grid_size = core.terrain.size() as u32;
        // terrain(4) + density(4) per cell, record(24) per particle
        core.perf_stats.memory_bytes =
            core.terrain.size() as u64 * 8 + core.store.capacity() as u64 * 24;
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    core.frame += 1;
}
