use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_damage_rate(core: &mut SimulationCore, damage_rate: f32) {
    debug_assert!(damage_rate.is_finite() && damage_rate >= 0.0);
    core.damage_rate = damage_rate;
}

pub(super) fn damage_rate(core: &SimulationCore) -> f32 {
    core.damage_rate
}
