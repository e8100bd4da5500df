//! Inventory replenishment core.
//!
//! Turns stock records into statuses, depletion estimates and ranked reorder
//! recommendations. Everything here is pure and deterministic: no IO, no
//! storage, no shared state. Fetching records and acting on the output is the
//! caller's job.

pub mod alerts;
pub mod config;
pub mod consumption;
pub mod depletion;
pub mod pipeline;
pub mod reorder;
pub mod report;
pub mod status;
pub mod stock;

pub use alerts::{StatusCounts, stock_alerts};
pub use config::ReplenishmentConfig;
pub use consumption::{SaleRecord, average_daily_rate, daily_rates};
pub use depletion::{DepletionEstimate, estimate};
pub use pipeline::{assess, compute_from_inputs, compute_recommendations, validate_inputs};
pub use reorder::{
    AssessedProduct, DEFAULT_TARGET_COVERAGE_DAYS, Priority, Recommendation, assign_priority,
    recommend, suggested_order_quantity,
};
pub use report::{ReplenishmentReport, ReplenishmentSummary};
pub use status::{ClassifiedProduct, StockStatus, Thresholds, classify, classify_with_defaults};
pub use stock::{RawNumber, StockRecord, StockRecordInput, UNCATEGORIZED};
