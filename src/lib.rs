//! Erosim Engine - Particle/terrain simulation with destructible terrain
//!
//! Large populations of ballistic point particles move over a discrete 2-D
//! grid, collide with and erode a terrain field, and accumulate a density
//! field for visualization.
//!
//! Architecture:
//! - core/          - Core utilities (hot-path indexing macros)
//! - domain/        - Data records and settings
//! - spatial/       - Fixed-point coordinates, grids, particle store
//! - systems/       - The particle-terrain stepping kernel
//! - simulation/    - Orchestration only

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps external paths short)
pub use domain::particle::Particle;
pub use domain::settings::SimSettings;
pub use simulation::{PerfStats, Simulation};
pub use spatial::density::DensityGrid;
pub use spatial::fixed_point::GridScale;
pub use spatial::store::ParticleStore;
pub use spatial::terrain::TerrainGrid;
pub use systems::stepper::{step_particle, StepOutcome, StepParams};

/// Engine version string
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
