//! Particle store - the fixed-size ring of particle records
//!
//! Index-stable: emission and rendering address particles by index across
//! ticks. There is no insertion or removal; the emission collaborator
//! overwrites a wrapping index range before each tick and dead slots are
//! skipped by the stepper until re-emitted.

use crate::domain::particle::Particle;

pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// All slots start dead.
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: vec![Particle::dead(); capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Read one slot. Panics on an out-of-range index; only `write_range`
    /// wraps, per the emission contract.
    #[inline]
    pub fn get(&self, index: usize) -> Particle {
        self.particles[index]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Emission boundary: overwrite `records.len()` slots starting at
    /// `start_index`, wrapping over the fixed capacity.
    pub fn write_range(&mut self, start_index: usize, records: &[Particle]) {
        let capacity = self.particles.len();
        for (offset, record) in records.iter().enumerate() {
            self.particles[(start_index + offset) % capacity] = *record;
        }
    }

    /// Live (ttl > 0) slot count. Linear scan, diagnostics only.
    pub fn live_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_dead()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_dead() {
        let store = ParticleStore::new(8);
        assert_eq!(store.capacity(), 8);
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn write_range_wraps_over_capacity() {
        let mut store = ParticleStore::new(4);
        let records: Vec<Particle> = (0..3)
            .map(|i| Particle::new([i, i], [0, 0], 1.0))
            .collect();
        store.write_range(3, &records);
        // Indices 3, 0, 1 written; 2 untouched.
        assert_eq!(store.get(3).position, [0, 0]);
        assert_eq!(store.get(0).position, [1, 1]);
        assert_eq!(store.get(1).position, [2, 2]);
        assert!(store.get(2).is_dead());
        assert_eq!(store.live_count(), 3);
    }

    #[test]
    #[should_panic]
    fn get_rejects_out_of_range_indices() {
        let store = ParticleStore::new(4);
        let _ = store.get(4);
    }

    #[test]
    fn indices_are_stable() {
        let mut store = ParticleStore::new(4);
        store.write_range(1, &[Particle::new([9, 9], [1, -1], 2.0)]);
        let before = store.get(1);
        store.write_range(2, &[Particle::new([5, 5], [0, 0], 1.0)]);
        assert_eq!(store.get(1), before);
    }
}
