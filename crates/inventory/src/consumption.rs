//! Daily consumption rates derived from sales history.
//!
//! The rate is the average units sold per *selling day*: total units divided
//! by the number of distinct dates with at least one sale row. Days without a
//! row do not dilute the average.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfsmart_core::{DomainError, DomainResult, ProductId};

/// One sales row (per product, per store, per day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(alias = "item_nbr")]
    pub product_id: ProductId,
    pub date: NaiveDate,
    /// Net units; negative values are returns.
    #[serde(default)]
    pub unit_sales: f64,
}

/// Average daily rate over `sales`, or `None` when there is no history.
///
/// All rows are assumed to belong to the same product; use [`daily_rates`]
/// for mixed input.
pub fn average_daily_rate(sales: &[SaleRecord]) -> DomainResult<Option<f64>> {
    if sales.is_empty() {
        return Ok(None);
    }

    let mut total = 0.0;
    let mut dates = BTreeSet::new();
    for sale in sales {
        if !sale.unit_sales.is_finite() {
            return Err(DomainError::invalid_input("unit_sales", sale.unit_sales));
        }
        total += sale.unit_sales;
        dates.insert(sale.date);
    }

    let rate = total / dates.len() as f64;
    if rate < 0.0 {
        tracing::warn!(
            product_id = %sales[0].product_id,
            rate,
            "returns exceed sales; clamping daily rate to zero"
        );
        return Ok(Some(0.0));
    }
    Ok(Some(rate))
}

/// Per-product average daily rates. Products with no rows are absent.
pub fn daily_rates(sales: &[SaleRecord]) -> DomainResult<BTreeMap<ProductId, f64>> {
    let mut grouped: BTreeMap<&ProductId, Vec<SaleRecord>> = BTreeMap::new();
    for sale in sales {
        grouped.entry(&sale.product_id).or_default().push(sale.clone());
    }

    let mut rates = BTreeMap::new();
    for (product_id, rows) in grouped {
        if let Some(rate) = average_daily_rate(&rows)? {
            rates.insert(product_id.clone(), rate);
        }
    }
    Ok(rates)
}
