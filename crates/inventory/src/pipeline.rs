//! End-to-end replenishment pipeline: records in, ranked recommendations out.
//!
//! Each record goes through classification and depletion estimation on its
//! own; ordering only happens once, in the advisor's final sort.

use shelfsmart_core::DomainResult;

use crate::config::ReplenishmentConfig;
use crate::reorder::{AssessedProduct, Recommendation, recommend};
use crate::status::{ClassifiedProduct, Thresholds};
use crate::stock::{StockRecord, StockRecordInput};

/// Classify one record and estimate its depletion.
pub fn assess(record: &StockRecord, defaults: Thresholds) -> DomainResult<AssessedProduct> {
    let classified = ClassifiedProduct::classify(record.clone(), defaults).inspect_err(|e| {
        tracing::warn!(product_id = %record.product_id(), error = %e, "classification failed");
    })?;
    let assessed = AssessedProduct::new(classified);

    tracing::debug!(
        product_id = %record.product_id(),
        status = %assessed.product.status,
        days_remaining = assessed.depletion.days_remaining,
        "assessed product"
    );
    Ok(assessed)
}

/// Run every record through the pipeline.
///
/// Fails on the first record or configuration error; nothing is skipped or
/// corrected silently.
pub fn compute_recommendations(
    records: &[StockRecord],
    config: &ReplenishmentConfig,
) -> DomainResult<Vec<Recommendation>> {
    config.validate()?;
    let defaults = config.thresholds()?;

    let assessed = records
        .iter()
        .map(|r| assess(r, defaults))
        .collect::<DomainResult<Vec<_>>>()?;

    let recommendations = recommend(&assessed, config.target_coverage_days)?;

    tracing::info!(
        records = records.len(),
        recommendations = recommendations.len(),
        target_coverage_days = config.target_coverage_days,
        "computed replenishment recommendations"
    );
    Ok(recommendations)
}

/// Validate raw boundary rows, then run the pipeline.
pub fn compute_from_inputs(
    inputs: Vec<StockRecordInput>,
    config: &ReplenishmentConfig,
) -> DomainResult<Vec<Recommendation>> {
    let records = validate_inputs(inputs)?;
    compute_recommendations(&records, config)
}

pub fn validate_inputs(inputs: Vec<StockRecordInput>) -> DomainResult<Vec<StockRecord>> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(row, input)| {
            StockRecord::try_from(input).inspect_err(|e| {
                tracing::warn!(row, error = %e, "rejected stock record");
            })
        })
        .collect()
}
