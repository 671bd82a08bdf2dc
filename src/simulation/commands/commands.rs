use log::debug;

use crate::domain::particle::Particle;

use super::SimulationCore;

pub(super) fn write_particles(core: &mut SimulationCore, start_index: usize, records: &[Particle]) {
    debug!(
        "emitting {} records at index {} (capacity {})",
        records.len(),
        start_index,
        core.store.capacity()
    );
    core.store.write_range(start_index, records);
}

pub(super) fn fill_terrain(core: &mut SimulationCore, mass: i32) {
    core.terrain.fill(mass);
}

pub(super) fn set_terrain_mass(core: &mut SimulationCore, x: u32, y: u32, mass: i32) {
    core.terrain.set_mass(x, y, mass);
}

pub(super) fn clear_density(core: &mut SimulationCore) {
    core.density.clear();
}
