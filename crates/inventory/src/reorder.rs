//! Reorder advice: priority tiers, suggested quantities and ranking.

use serde::{Deserialize, Serialize};

use shelfsmart_core::{DomainError, DomainResult, ProductId, ValueObject};

use crate::depletion::{DepletionEstimate, days_serde};
use crate::status::{ClassifiedProduct, StockStatus};

/// Coverage window used when the caller does not configure one.
pub const DEFAULT_TARGET_COVERAGE_DAYS: f64 = 7.0;

// 2^64: the first float a `u64` cannot hold.
const MAX_ORDER_UNITS: f64 = u64::MAX as f64;

/// Reorder urgency. Declaration order is the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified product paired with its depletion estimate: the advisor's input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessedProduct {
    pub product: ClassifiedProduct,
    pub depletion: DepletionEstimate,
}

impl AssessedProduct {
    pub fn new(product: ClassifiedProduct) -> Self {
        let record = &product.record;
        let depletion = DepletionEstimate::compute(
            record.quantity_on_hand(),
            record.daily_consumption_rate(),
        );
        Self { product, depletion }
    }
}

/// Actionable reorder suggestion for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,
    pub status: StockStatus,
    #[serde(with = "days_serde")]
    pub days_remaining: f64,
    pub hours_remaining: Option<u64>,
    pub quantity_on_hand: u64,
    pub daily_consumption_rate: f64,
    pub suggested_order_quantity: u64,
    pub priority: Priority,
}

impl ValueObject for Recommendation {}

/// Priority tier for a product.
///
/// A `critical` status is urgent no matter what the day count says; status
/// can encode per-product thresholds the day-based rule knows nothing about.
pub fn assign_priority(status: StockStatus, days_remaining: f64, target_coverage_days: f64) -> Priority {
    if status == StockStatus::Critical || days_remaining < 1.0 {
        Priority::Urgent
    } else if status == StockStatus::Low || days_remaining < target_coverage_days / 2.0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Units needed to cover `target_coverage_days` of demand from current stock.
///
/// Zero when there is no demand signal. A shortfall too large for a `u64` unit
/// count is rejected rather than clamped.
pub fn suggested_order_quantity(
    quantity_on_hand: u64,
    daily_consumption_rate: f64,
    target_coverage_days: f64,
) -> DomainResult<u64> {
    if daily_consumption_rate == 0.0 {
        return Ok(0);
    }
    let shortfall = target_coverage_days * daily_consumption_rate - quantity_on_hand as f64;
    let units = shortfall.max(0.0).ceil();
    if !(units.is_finite() && units < MAX_ORDER_UNITS) {
        return Err(DomainError::invalid_input(
            "daily_consumption_rate",
            daily_consumption_rate,
        ));
    }
    Ok(units as u64)
}

/// Rank actionable products by priority, then soonest stockout.
///
/// Products that are `safe` with `low` priority need no action and are left
/// out. The input slice is not modified; ties keep their input order.
pub fn recommend(products: &[AssessedProduct], target_coverage_days: f64) -> DomainResult<Vec<Recommendation>> {
    if !(target_coverage_days.is_finite() && target_coverage_days > 0.0) {
        return Err(DomainError::invalid_input(
            "target_coverage_days",
            target_coverage_days,
        ));
    }

    let mut out: Vec<Recommendation> = Vec::with_capacity(products.len());
    for p in products {
        if let Some(r) = advise(p, target_coverage_days)? {
            out.push(r);
        }
    }

    out.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.days_remaining.total_cmp(&b.days_remaining))
    });

    Ok(out)
}

fn advise(assessed: &AssessedProduct, target_coverage_days: f64) -> DomainResult<Option<Recommendation>> {
    let record = &assessed.product.record;
    let status = assessed.product.status;
    let days = assessed.depletion.days_remaining;

    let priority = assign_priority(status, days, target_coverage_days);
    if status == StockStatus::Safe && priority == Priority::Low {
        return Ok(None);
    }

    let suggested = suggested_order_quantity(
        record.quantity_on_hand(),
        record.daily_consumption_rate(),
        target_coverage_days,
    )?;

    Ok(Some(Recommendation {
        product_id: record.product_id().clone(),
        product_name: record.product_name().to_string(),
        category: record.category().to_string(),
        status,
        days_remaining: days,
        hours_remaining: assessed.depletion.hours_remaining,
        quantity_on_hand: record.quantity_on_hand(),
        daily_consumption_rate: record.daily_consumption_rate(),
        suggested_order_quantity: suggested,
        priority,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::status::Thresholds;
    use crate::stock::StockRecord;

    fn assessed(id: u64, qty: u64, rate: f64) -> AssessedProduct {
        let record = StockRecord::new(id, format!("item-{id}"), "Grocery", qty, rate).unwrap();
        AssessedProduct::new(ClassifiedProduct::classify(record, Thresholds::default()).unwrap())
    }

    #[test]
    fn critical_milk_is_urgent_with_97_units() {
        let milk = assessed(1, 8, 15.0);
        assert_eq!(milk.product.status, StockStatus::Critical);

        let recs = recommend(&[milk], 7.0).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Urgent);
        assert_eq!(recs[0].suggested_order_quantity, 97);
        assert_eq!(recs[0].hours_remaining, Some(13));
    }

    #[test]
    fn safe_product_with_plenty_of_cover_is_dropped() {
        let recs = recommend(&[assessed(2, 60, 2.0)], 7.0).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn safe_but_fast_moving_product_is_medium() {
        // 60 units at 25/day = 2.4 days, under half the 7-day window.
        let recs = recommend(&[assessed(3, 60, 25.0)], 7.0).unwrap();
        assert_eq!(recs[0].status, StockStatus::Safe);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert_eq!(recs[0].suggested_order_quantity, 115);
    }

    #[test]
    fn critical_status_dominates_a_long_horizon() {
        assert_eq!(assign_priority(StockStatus::Critical, 40.0, 7.0), Priority::Urgent);
        assert_eq!(assign_priority(StockStatus::Safe, 0.9, 7.0), Priority::Urgent);
        assert_eq!(assign_priority(StockStatus::Low, 40.0, 7.0), Priority::Medium);
        assert_eq!(assign_priority(StockStatus::Safe, 3.4, 7.0), Priority::Medium);
        assert_eq!(assign_priority(StockStatus::Safe, 3.5, 7.0), Priority::Low);
    }

    #[test]
    fn zero_rate_never_suggests_an_order() {
        assert_eq!(suggested_order_quantity(0, 0.0, 7.0).unwrap(), 0);
        let recs = recommend(&[assessed(4, 5, 0.0)], 7.0).unwrap();
        assert_eq!(recs[0].priority, Priority::Urgent);
        assert_eq!(recs[0].suggested_order_quantity, 0);
        assert!(recs[0].days_remaining.is_infinite());
    }

    #[test]
    fn overstocked_product_suggests_nothing() {
        assert_eq!(suggested_order_quantity(500, 3.0, 7.0).unwrap(), 0);
        assert_eq!(suggested_order_quantity(20, 3.0, 7.0).unwrap(), 1);
    }

    #[test]
    fn unrepresentable_order_quantity_is_rejected() {
        let err = suggested_order_quantity(0, 1e300, 7.0).unwrap_err();
        assert_eq!(err, DomainError::invalid_input("daily_consumption_rate", 1e300));

        let products = vec![assessed(1, 0, 1e300), assessed(2, 0, 1e300)];
        let err = recommend(&products, 7.0).unwrap_err();
        assert_eq!(err.field(), Some("daily_consumption_rate"));
    }

    #[test]
    fn largest_representable_shortfall_still_fits() {
        // 7 * 2^60 units, well under u64::MAX.
        let rate = (1u64 << 60) as f64;
        assert_eq!(
            suggested_order_quantity(0, rate, 7.0).unwrap(),
            7 * (1u64 << 60)
        );
    }

    #[test]
    fn subnormal_rate_orders_nothing() {
        let rate = f64::MIN_POSITIVE / 4.0;
        assert_eq!(suggested_order_quantity(3, rate, 7.0).unwrap(), 0);
        assert_eq!(suggested_order_quantity(0, rate, 7.0).unwrap(), 1);
    }

    #[test]
    fn non_positive_window_is_rejected() {
        for bad in [0.0, -7.0, f64::NAN, f64::INFINITY] {
            let err = recommend(&[], bad).unwrap_err();
            assert_eq!(err.field(), Some("target_coverage_days"));
        }
    }

    #[test]
    fn ranks_by_priority_then_days_with_infinity_last() {
        let products = vec![
            assessed(1, 40, 1.0),  // low, 40 days -> medium
            assessed(2, 5, 0.0),   // critical, no movement -> urgent, +inf
            assessed(3, 8, 15.0),  // critical, 0.53 days -> urgent
            assessed(4, 45, 30.0), // low, 1.5 days -> medium
            assessed(5, 15, 12.0), // critical, 1.25 days -> urgent
        ];
        let ids: Vec<_> = recommend(&products, 7.0)
            .unwrap()
            .into_iter()
            .map(|r| r.product_id)
            .collect();

        assert_eq!(
            ids,
            vec![3u64, 5, 2, 4, 1]
                .into_iter()
                .map(ProductId::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let products = vec![assessed(1, 40, 1.0), assessed(2, 8, 15.0)];
        let before = products.clone();
        let _ = recommend(&products, 7.0).unwrap();
        assert_eq!(products, before);
    }

    fn arb_product() -> impl Strategy<Value = AssessedProduct> {
        (0u64..10_000, 0u64..200, prop_oneof![Just(0.0), 0.1f64..50.0])
            .prop_map(|(id, qty, rate)| assessed(id, qty, rate))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: output is ordered by tier, days are non-decreasing within
        /// a tier, and nothing safe-and-low leaks through.
        #[test]
        fn output_is_ranked_and_actionable(
            products in prop::collection::vec(arb_product(), 0..40),
            target in 1.0f64..30.0,
        ) {
            let recs = recommend(&products, target).unwrap();

            for pair in recs.windows(2) {
                prop_assert!(pair[0].priority <= pair[1].priority);
                if pair[0].priority == pair[1].priority {
                    prop_assert!(pair[0].days_remaining <= pair[1].days_remaining);
                }
            }
            for r in &recs {
                prop_assert!(!(r.status == StockStatus::Safe && r.priority == Priority::Low));
            }
        }

        /// Property: identical input gives identical, order-stable output.
        #[test]
        fn recommend_is_idempotent(
            products in prop::collection::vec(arb_product(), 0..40),
        ) {
            let first = recommend(&products, 7.0).unwrap();
            let second = recommend(&products, 7.0).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: with no consumption, no order is ever suggested.
        #[test]
        fn zero_rate_suggests_zero(qty in 0u64..100_000, target in 0.5f64..90.0) {
            prop_assert_eq!(suggested_order_quantity(qty, 0.0, target).unwrap(), 0);
        }
    }
}
