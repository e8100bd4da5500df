//! Replenishment configuration.

use serde::{Deserialize, Serialize};

use shelfsmart_core::{DomainError, DomainResult};

use crate::reorder::DEFAULT_TARGET_COVERAGE_DAYS;
use crate::status::Thresholds;

/// Knobs for one replenishment run.
///
/// Default thresholds apply to any record that does not carry its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplenishmentConfig {
    pub target_coverage_days: f64,
    pub default_critical_threshold: u64,
    pub default_low_threshold: u64,
}

impl Default for ReplenishmentConfig {
    fn default() -> Self {
        Self {
            target_coverage_days: DEFAULT_TARGET_COVERAGE_DAYS,
            default_critical_threshold: Thresholds::DEFAULT_CRITICAL,
            default_low_threshold: Thresholds::DEFAULT_LOW,
        }
    }
}

impl ReplenishmentConfig {
    pub fn with_target_coverage_days(mut self, days: f64) -> Self {
        self.target_coverage_days = days;
        self
    }

    pub fn with_default_thresholds(mut self, critical: u64, low: u64) -> Self {
        self.default_critical_threshold = critical;
        self.default_low_threshold = low;
        self
    }

    /// Default threshold pair, checked for ordering.
    pub fn thresholds(&self) -> DomainResult<Thresholds> {
        Thresholds::new(self.default_critical_threshold, self.default_low_threshold)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(self.target_coverage_days.is_finite() && self.target_coverage_days > 0.0) {
            return Err(DomainError::invalid_input(
                "target_coverage_days",
                self.target_coverage_days,
            ));
        }
        self.thresholds().map(|_| ())
    }
}
