use log::info;

use crate::domain::settings::SimSettings;
use crate::spatial::density::DensityGrid;
use crate::spatial::store::ParticleStore;
use crate::spatial::terrain::TerrainGrid;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(settings: SimSettings) -> Result<SimulationCore, String> {
    settings.validate()?;
    let scale = settings.grid_scale();
    info!(
        "simulation: {}x{} grid, {} particles, {} mantissa bits, anchor {}",
        settings.buffer_width,
        settings.buffer_height,
        settings.capacity,
        scale.mantissa_bits(),
        scale.anchor()
    );
    Ok(SimulationCore {
        scale,
        terrain: TerrainGrid::new(settings.buffer_width, settings.buffer_height),
        density: DensityGrid::new(settings.buffer_width, settings.buffer_height),
        store: ParticleStore::new(settings.capacity),
        damage_rate: settings.damage_rate,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        settings,
    })
}
