use std::collections::BTreeMap;

use serde::Serialize;

/// Summary of one generation run, logged when the engine finishes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RollReport {
    /// Values the configuration asked for.
    pub requested: u64,
    /// Raw draws taken from the sampler.
    pub attempts: u64,
    /// Values that survived the filter chain.
    pub accepted: u64,
    /// Rejection tallies keyed by filter name.
    pub rejected_by_filter: BTreeMap<&'static str, u64>,
    /// Wall time of the run in milliseconds.
    pub duration_ms: u64,
}

impl RollReport {
    pub fn record_rejection(&mut self, filter: &'static str) {
        *self.rejected_by_filter.entry(filter).or_insert(0) += 1;
    }

    /// Total draws rejected across all filters.
    pub fn rejected(&self) -> u64 {
        self.rejected_by_filter.values().sum()
    }
}
