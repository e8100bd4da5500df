//! Replenishment report: one run's recommendations plus the views the
//! dashboard needs (urgent/medium lists, per-category grouping, totals).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfsmart_core::{DomainResult, RunId};

use crate::alerts::{StatusCounts, stock_alerts};
use crate::config::ReplenishmentConfig;
use crate::pipeline::compute_recommendations;
use crate::reorder::{Priority, Recommendation};
use crate::stock::StockRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentReport {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub config: ReplenishmentConfig,
    /// Status of every product in the snapshot, actionable or not.
    pub status_counts: StatusCounts,
    pub recommendations: Vec<Recommendation>,
}

/// Counts per tier and the total suggested units across the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentSummary {
    pub urgent: usize,
    pub medium: usize,
    pub low: usize,
    pub total_suggested_units: u64,
}

impl ReplenishmentReport {
    /// Run the pipeline and stamp the result with a fresh run id and time.
    pub fn generate(records: &[StockRecord], config: &ReplenishmentConfig) -> DomainResult<Self> {
        Self::generate_with(records, config, RunId::new(), Utc::now())
    }

    /// Same as [`generate`](Self::generate) with explicit run metadata.
    pub fn generate_with(
        records: &[StockRecord],
        config: &ReplenishmentConfig,
        run_id: RunId,
        generated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let recommendations = compute_recommendations(records, config)?;
        let alerts = stock_alerts(records, config.thresholds()?)?;
        tracing::debug!(%run_id, count = recommendations.len(), "replenishment report generated");
        Ok(Self {
            run_id,
            generated_at,
            config: config.clone(),
            status_counts: StatusCounts::from_products(&alerts),
            recommendations,
        })
    }

    pub fn with_priority(&self, priority: Priority) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.priority == priority)
    }

    pub fn urgent(&self) -> Vec<&Recommendation> {
        self.with_priority(Priority::Urgent).collect()
    }

    pub fn medium(&self) -> Vec<&Recommendation> {
        self.with_priority(Priority::Medium).collect()
    }

    /// Recommendations grouped by category, each group keeping report order.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&Recommendation>> {
        let mut groups: BTreeMap<&str, Vec<&Recommendation>> = BTreeMap::new();
        for r in &self.recommendations {
            groups.entry(r.category.as_str()).or_default().push(r);
        }
        groups
    }

    /// Totals per tier. `total_suggested_units` saturates at `u64::MAX`.
    pub fn summary(&self) -> ReplenishmentSummary {
        self.recommendations
            .iter()
            .fold(ReplenishmentSummary::default(), |mut acc, r| {
                match r.priority {
                    Priority::Urgent => acc.urgent += 1,
                    Priority::Medium => acc.medium += 1,
                    Priority::Low => acc.low += 1,
                }
                acc.total_suggested_units = acc
                    .total_suggested_units
                    .saturating_add(r.suggested_order_quantity);
                acc
            })
    }
}
