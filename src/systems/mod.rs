//! Systems - the particle-terrain stepping kernel

pub mod stepper;
