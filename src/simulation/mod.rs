//! Simulation - orchestration only
//!
//! `SimulationCore` owns the grids and the particle store and dispatches the
//! stepping kernel over every record each tick. All particle physics live in
//! systems/stepper.rs; this module sequences ticks, serves the authoring and
//! emission boundaries, and keeps perf counters.

use crate::domain::particle::Particle;
use crate::domain::settings::SimSettings;
use crate::spatial::density::DensityGrid;
use crate::spatial::fixed_point::GridScale;
use crate::spatial::store::ParticleStore;
use crate::spatial::terrain::TerrainGrid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct SimulationCore {
    settings: SimSettings,
    scale: GridScale,
    terrain: TerrainGrid,
    density: DensityGrid,
    store: ParticleStore,

    // Settings
    damage_rate: f32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a new simulation. Configuration violations are fatal here, not
    /// per-tick.
    pub fn new(settings: SimSettings) -> Result<Self, String> {
        init::create_simulation_core(settings)
    }

    pub fn width(&self) -> u32 {
        self.settings.buffer_width
    }

    pub fn height(&self) -> u32 {
        self.settings.buffer_height
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn scale(&self) -> GridScale {
        self.scale
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_damage_rate(&mut self, damage_rate: f32) {
        settings::set_damage_rate(self, damage_rate);
    }

    pub fn damage_rate(&self) -> f32 {
        settings::damage_rate(self)
    }

    /// Step the simulation forward by `dt`: every particle record advanced
    /// independently, in parallel, against the shared grids.
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    // === Emission boundary ===

    /// Overwrite a wrapping index range with fresh records (the emission
    /// collaborator's write contract).
    pub fn write_particles(&mut self, start_index: usize, records: &[Particle]) {
        commands::write_particles(self, start_index, records);
    }

    pub fn particle(&self, index: usize) -> Particle {
        self.store.get(index)
    }

    pub fn live_particles(&self) -> usize {
        self.store.live_count()
    }

    // === Terrain authoring boundary ===

    pub fn fill_terrain(&mut self, mass: i32) {
        commands::fill_terrain(self, mass);
    }

    pub fn set_terrain_mass(&mut self, x: u32, y: u32, mass: i32) {
        commands::set_terrain_mass(self, x, y, mass);
    }

    pub fn terrain_mass(&self, x: i32, y: i32) -> i32 {
        self.terrain.mass(x, y)
    }

    pub fn terrain_snapshot(&self) -> Vec<i32> {
        self.terrain.snapshot()
    }

    // === Renderer boundary ===

    pub fn density_at(&self, x: u32, y: u32) -> u32 {
        self.density.count(x, y)
    }

    pub fn density_snapshot(&self) -> Vec<u32> {
        self.density.snapshot()
    }

    /// Reset the density field; cadence is the caller's policy.
    pub fn clear_density(&mut self) {
        commands::clear_density(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
