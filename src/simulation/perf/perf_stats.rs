/// Per-step performance snapshot. Zeros when perf metrics are disabled.
#[derive(Debug, Clone, Default)]
pub struct PerfStats {
    pub step_ms: f64,
    /// Store capacity (records dispatched).
    pub particle_count: u32,
    /// Records with ttl > 0 this step.
    pub live_particles: u32,
    /// Total cell-boundary crossings walked by the kernel.
    pub crossings: u64,
    /// Total collisions that reflected a particle.
    pub bounces: u32,
    pub frame: u64,
    pub grid_size: u32,
    /// Rough estimate of grid + store memory (bytes).
    pub memory_bytes: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}
