use crate::domain::particle::Particle;
use crate::domain::settings::SimSettings;
use crate::spatial::fixed_point::GridScale;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// Public face of the engine. Thin delegation over `SimulationCore`; hosts
/// hold one of these and drive it once per frame.
pub struct Simulation {
    core: SimulationCore,
}

impl Simulation {
    /// Create a new simulation from validated settings.
    pub fn new(settings: SimSettings) -> Result<Self, String> {
        Ok(Self {
            core: SimulationCore::new(settings)?,
        })
    }

    /// Create a new simulation from a JSON settings document.
    pub fn from_settings_json(json: &str) -> Result<Self, String> {
        Self::new(SimSettings::from_json(json)?)
    }

    pub fn width(&self) -> u32 {
        self.core.width()
    }

    pub fn height(&self) -> u32 {
        self.core.height()
    }

    pub fn capacity(&self) -> usize {
        self.core.capacity()
    }

    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    pub fn scale(&self) -> GridScale {
        self.core.scale()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_damage_rate(&mut self, damage_rate: f32) {
        self.core.set_damage_rate(damage_rate);
    }

    pub fn damage_rate(&self) -> f32 {
        self.core.damage_rate()
    }

    /// Step the simulation forward by `dt`
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    /// Overwrite a wrapping index range with fresh particle records
    pub fn write_particles(&mut self, start_index: usize, records: &[Particle]) {
        self.core.write_particles(start_index, records);
    }

    pub fn particle(&self, index: usize) -> Particle {
        self.core.particle(index)
    }

    pub fn live_particles(&self) -> usize {
        self.core.live_particles()
    }

    /// Fill the whole terrain grid with one mass value
    pub fn fill_terrain(&mut self, mass: i32) {
        self.core.fill_terrain(mass);
    }

    pub fn set_terrain_mass(&mut self, x: u32, y: u32, mass: i32) {
        self.core.set_terrain_mass(x, y, mass);
    }

    pub fn terrain_mass(&self, x: i32, y: i32) -> i32 {
        self.core.terrain_mass(x, y)
    }

    pub fn terrain_snapshot(&self) -> Vec<i32> {
        self.core.terrain_snapshot()
    }

    pub fn density_at(&self, x: u32, y: u32) -> u32 {
        self.core.density_at(x, y)
    }

    pub fn density_snapshot(&self) -> Vec<u32> {
        self.core.density_snapshot()
    }

    /// Reset the density field; cadence is the caller's policy
    pub fn clear_density(&mut self) {
        self.core.clear_density();
    }
}
