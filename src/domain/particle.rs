//! Particle record - one fixed-size entry per simulated entity
//!
//! The record is plain-old-data so the store can be handed byte-wise to an
//! external emitter or renderer; the layout (position, velocity, ttl, pad)
//! must stay index- and field-stable across ticks.

use bytemuck::{Pod, Zeroable};

/// One ballistic particle.
///
/// `position` is an unsigned 2-D fixed-point coordinate: high bits select a
/// lattice cell, the low mantissa bits the sub-cell offset (see
/// [`crate::spatial::fixed_point::GridScale`]). Position arithmetic wraps at
/// the ends of the unsigned range rather than clamping; with the default
/// anchor that takes a trajectory millions of cells long to reach, and the
/// wraparound is accepted, documented behavior.
///
/// `velocity` is signed, same sub-cell units per time unit. A particle with
/// `ttl <= 0` is inert: the stepper skips it untouched until the emission
/// collaborator overwrites the slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Particle {
    pub position: [u32; 2],
    pub velocity: [i32; 2],
    pub ttl: f32,
    pub pad: i32,
}

impl Particle {
    pub fn new(position: [u32; 2], velocity: [i32; 2], ttl: f32) -> Self {
        Self {
            position,
            velocity,
            ttl,
            pad: 0,
        }
    }

    /// An inert slot: never stepped, waiting for re-emission.
    pub fn dead() -> Self {
        Self::zeroed()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.ttl <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_layout_is_stable() {
        // Emitter and renderer address the store byte-wise.
        assert_eq!(std::mem::size_of::<Particle>(), 24);
        let p = Particle::new([1, 2], [-3, 4], 5.0);
        let bytes: &[u8] = bytemuck::bytes_of(&p);
        let back: Particle = *bytemuck::from_bytes(bytes);
        assert_eq!(back, p);
    }

    #[test]
    fn dead_particles_report_dead() {
        assert!(Particle::dead().is_dead());
        assert!(Particle::new([0, 0], [0, 0], 0.0).is_dead());
        assert!(Particle::new([0, 0], [0, 0], -1.0).is_dead());
        assert!(!Particle::new([0, 0], [0, 0], 0.5).is_dead());
    }
}
