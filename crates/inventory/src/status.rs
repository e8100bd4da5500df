//! Stock status classification.
//!
//! A quantity is mapped onto one of three levels using a `(critical, low)`
//! threshold pair. Boundaries are inclusive on the actionable side: a quantity
//! sitting exactly on a threshold already counts as that level.

use serde::{Deserialize, Serialize};

use shelfsmart_core::{DomainError, DomainResult, ValueObject};

use crate::stock::{StockRecord, non_negative};

/// Discrete stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    Safe,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Safe => "safe",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consistent `(critical, low)` threshold pair. Always `critical < low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    critical: u64,
    low: u64,
}

impl Thresholds {
    pub const DEFAULT_CRITICAL: u64 = 20;
    pub const DEFAULT_LOW: u64 = 50;

    pub fn new(critical: u64, low: u64) -> DomainResult<Self> {
        if critical >= low {
            return Err(DomainError::configuration(critical, low));
        }
        Ok(Self { critical, low })
    }

    /// Fill in whichever side is missing from `defaults`, then re-check the
    /// resulting pair.
    pub fn resolve(critical: Option<u64>, low: Option<u64>, defaults: Thresholds) -> DomainResult<Self> {
        Self::new(
            critical.unwrap_or(defaults.critical),
            low.unwrap_or(defaults.low),
        )
    }

    pub fn critical(&self) -> u64 {
        self.critical
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn classify(&self, quantity_on_hand: u64) -> StockStatus {
        if quantity_on_hand <= self.critical {
            StockStatus::Critical
        } else if quantity_on_hand <= self.low {
            StockStatus::Low
        } else {
            StockStatus::Safe
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical: Self::DEFAULT_CRITICAL,
            low: Self::DEFAULT_LOW,
        }
    }
}

impl ValueObject for Thresholds {}

/// Classify a raw quantity against optional thresholds, falling back to
/// [`Thresholds::default`] for any that are absent.
pub fn classify(
    quantity_on_hand: i64,
    critical_threshold: Option<i64>,
    low_threshold: Option<i64>,
) -> DomainResult<StockStatus> {
    classify_with_defaults(
        quantity_on_hand,
        critical_threshold,
        low_threshold,
        Thresholds::default(),
    )
}

/// Same as [`classify`] but with caller-supplied defaults.
pub fn classify_with_defaults(
    quantity_on_hand: i64,
    critical_threshold: Option<i64>,
    low_threshold: Option<i64>,
    defaults: Thresholds,
) -> DomainResult<StockStatus> {
    let critical = critical_threshold
        .map(|v| non_negative("critical_threshold", v))
        .transpose()?;
    let low = low_threshold
        .map(|v| non_negative("low_threshold", v))
        .transpose()?;
    let thresholds = Thresholds::resolve(critical, low, defaults)?;

    // Threshold ordering is checked first so a bad pair is reported for any q.
    let quantity = non_negative("quantity_on_hand", quantity_on_hand)?;
    Ok(thresholds.classify(quantity))
}

/// A stock record together with its classified status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedProduct {
    pub record: StockRecord,
    pub status: StockStatus,
}

impl ClassifiedProduct {
    pub fn classify(record: StockRecord, defaults: Thresholds) -> DomainResult<Self> {
        let thresholds =
            Thresholds::resolve(record.critical_threshold(), record.low_threshold(), defaults)?;
        let status = thresholds.classify(record.quantity_on_hand());
        Ok(Self { record, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_classify_eight_units_as_critical() {
        assert_eq!(classify(8, None, None).unwrap(), StockStatus::Critical);
        assert_eq!(classify(8, Some(10), Some(25)).unwrap(), StockStatus::Critical);
    }

    #[test]
    fn boundaries_are_inclusive_on_the_lower_side() {
        assert_eq!(classify(20, None, None).unwrap(), StockStatus::Critical);
        assert_eq!(classify(21, None, None).unwrap(), StockStatus::Low);
        assert_eq!(classify(50, None, None).unwrap(), StockStatus::Low);
        assert_eq!(classify(51, None, None).unwrap(), StockStatus::Safe);
        assert_eq!(classify(0, None, None).unwrap(), StockStatus::Critical);
    }

    #[test]
    fn inverted_thresholds_fail_for_any_quantity() {
        for q in [0, 5, 7, 10, 1_000] {
            assert_eq!(
                classify(q, Some(10), Some(5)),
                Err(DomainError::configuration(10, 5))
            );
        }
        assert_eq!(
            classify(3, Some(5), Some(5)),
            Err(DomainError::configuration(5, 5))
        );
    }

    #[test]
    fn single_override_is_checked_against_the_other_default() {
        // critical 60 against the default low of 50.
        assert_eq!(
            classify(10, Some(60), None),
            Err(DomainError::configuration(60, 50))
        );
        assert_eq!(classify(15, Some(10), None).unwrap(), StockStatus::Low);
    }

    #[test]
    fn negative_values_are_invalid_input() {
        assert_eq!(
            classify(-1, None, None),
            Err(DomainError::invalid_input("quantity_on_hand", -1))
        );
        assert_eq!(
            classify(5, Some(-2), None).unwrap_err().field(),
            Some("critical_threshold")
        );
    }

    #[test]
    fn custom_defaults_replace_twenty_fifty() {
        let defaults = Thresholds::new(10, 25).unwrap();
        assert_eq!(
            classify_with_defaults(22, None, None, defaults).unwrap(),
            StockStatus::Low
        );
        assert_eq!(
            classify_with_defaults(30, None, None, defaults).unwrap(),
            StockStatus::Safe
        );
    }

    #[test]
    fn classified_product_uses_record_thresholds_first() {
        let record = StockRecord::new(1u64, "Eggs", "Dairy", 12, 8.0)
            .unwrap()
            .with_thresholds(Some(10), Some(25))
            .unwrap();
        let classified = ClassifiedProduct::classify(record, Thresholds::default()).unwrap();
        assert_eq!(classified.status, StockStatus::Low);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the three levels partition the quantities with no gap or
        /// overlap at either threshold.
        #[test]
        fn levels_partition_quantities(
            critical in 0u64..1_000,
            gap in 1u64..1_000,
            q in 0u64..3_000,
        ) {
            let low = critical + gap;
            let t = Thresholds::new(critical, low).unwrap();
            let status = t.classify(q);

            let expected = if q <= critical {
                StockStatus::Critical
            } else if q <= low {
                StockStatus::Low
            } else {
                StockStatus::Safe
            };
            prop_assert_eq!(status, expected);
            prop_assert_eq!(t.classify(critical), StockStatus::Critical);
            prop_assert_eq!(t.classify(low), StockStatus::Low);
            prop_assert_eq!(t.classify(low + 1), StockStatus::Safe);
        }
    }
}
