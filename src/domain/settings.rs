//! Simulation settings - the configuration supplied by the caller
//!
//! Settings are validated once at setup; the per-particle path assumes they
//! are valid and never re-checks (configuration violations are fatal, not
//! per-tick conditions).

use serde::{Deserialize, Serialize};

use crate::spatial::fixed_point::GridScale;

fn default_mantissa_bits() -> u32 {
    8
}

fn default_damage_rate() -> f32 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSettings {
    /// Grid extents, in cells.
    pub buffer_width: u32,
    pub buffer_height: u32,
    /// Sub-cell precision bits (historically 8).
    #[serde(default = "default_mantissa_bits")]
    pub mantissa_bits: u32,
    /// Coarse-cell offset recentering the coordinate space. Defaults to half
    /// the coarse range.
    #[serde(default)]
    pub anchor: Option<i32>,
    /// Erosion scale factor: damage per hit is `damage_rate * impact_speed`,
    /// truncated.
    #[serde(default = "default_damage_rate")]
    pub damage_rate: f32,
    /// Fixed particle-store capacity.
    pub capacity: usize,
}

impl SimSettings {
    pub fn new(buffer_width: u32, buffer_height: u32, capacity: usize) -> Self {
        Self {
            buffer_width,
            buffer_height,
            mantissa_bits: default_mantissa_bits(),
            anchor: None,
            damage_rate: default_damage_rate(),
            capacity,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject caller precondition violations before any grid is built.
    pub fn validate(&self) -> Result<(), String> {
        if self.buffer_width == 0 || self.buffer_height == 0 {
            return Err(format!(
                "grid must be non-empty, got {}x{}",
                self.buffer_width, self.buffer_height
            ));
        }
        // Cell indices are computed in u32.
        if self.buffer_width as u64 * self.buffer_height as u64 > u32::MAX as u64 {
            return Err(format!(
                "grid of {}x{} cells exceeds the u32 index range",
                self.buffer_width, self.buffer_height
            ));
        }
        if !(1..=16).contains(&self.mantissa_bits) {
            return Err(format!(
                "mantissa_bits must be in 1..=16, got {}",
                self.mantissa_bits
            ));
        }
        if !self.damage_rate.is_finite() || self.damage_rate < 0.0 {
            return Err(format!("damage_rate must be >= 0, got {}", self.damage_rate));
        }
        if self.capacity == 0 {
            return Err("particle capacity must be > 0".to_string());
        }
        Ok(())
    }

    pub fn grid_scale(&self) -> GridScale {
        match self.anchor {
            Some(anchor) => GridScale::with_anchor(self.mantissa_bits, anchor),
            None => GridScale::new(self.mantissa_bits),
        }
    }
}
