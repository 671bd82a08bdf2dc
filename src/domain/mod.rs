//! Domain data: particle records and simulation settings

pub mod particle;
pub mod settings;
