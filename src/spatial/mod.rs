//! Spatial types: fixed-point coordinates, the two shared grids, and the
//! particle store

pub mod density;
pub mod fixed_point;
pub mod store;
pub mod terrain;
