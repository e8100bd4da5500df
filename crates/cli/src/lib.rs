//! `shelfsmart` command-line adapter.
//!
//! Reads a JSON array of stock rows, runs the replenishment pipeline and
//! returns the report. Configuration comes from environment variables.

pub mod config;

use std::io::Read;

use anyhow::Context;

use shelfsmart_inventory::{ReplenishmentConfig, ReplenishmentReport, StockRecordInput, validate_inputs};

/// Parse a stock snapshot and build a report from it.
pub fn run<R: Read>(input: R, config: &ReplenishmentConfig) -> anyhow::Result<ReplenishmentReport> {
    let rows: Vec<StockRecordInput> =
        serde_json::from_reader(input).context("failed to parse stock snapshot as a JSON array")?;
    tracing::info!(rows = rows.len(), "loaded stock snapshot");

    let records = validate_inputs(rows).context("stock snapshot failed validation")?;
    let report = ReplenishmentReport::generate(&records, config)
        .context("failed to compute replenishment recommendations")?;
    Ok(report)
}
