//! Stock alerts: every product's status, most severe first.
//!
//! Unlike reorder advice this listing keeps `safe` products; it answers
//! "what is the state of the shelf" rather than "what should I order".

use serde::{Deserialize, Serialize};

use shelfsmart_core::{DomainResult, Entity};

use crate::status::{ClassifiedProduct, StockStatus, Thresholds};
use crate::stock::StockRecord;

/// Number of products at each status level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub critical: usize,
    pub low: usize,
    pub safe: usize,
}

impl StatusCounts {
    pub fn from_products(products: &[ClassifiedProduct]) -> Self {
        products.iter().fold(Self::default(), |mut acc, p| {
            match p.status {
                StockStatus::Critical => acc.critical += 1,
                StockStatus::Low => acc.low += 1,
                StockStatus::Safe => acc.safe += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.critical + self.low + self.safe
    }
}

/// Classify every record and order them critical, then low, then safe.
/// Products sharing a status keep their input order.
pub fn stock_alerts(records: &[StockRecord], defaults: Thresholds) -> DomainResult<Vec<ClassifiedProduct>> {
    let mut alerts = records
        .iter()
        .map(|r| {
            ClassifiedProduct::classify(r.clone(), defaults).inspect_err(|e| {
                tracing::warn!(product_id = %r.id(), error = %e, "stock alert classification failed");
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    alerts.sort_by_key(|p| p.status);
    Ok(alerts)
}
