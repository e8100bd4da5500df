//! Time-until-stockout estimation.

use serde::{Deserialize, Serialize};

use shelfsmart_core::{DomainResult, ValueObject};

use crate::stock::{non_negative, validate_rate};

const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_WEEK: f64 = 7.0;

/// How long the current stock lasts at the current consumption rate.
///
/// `days_remaining` is the canonical figure; `hours_remaining` and
/// `weeks_remaining` are display conveniences derived from it and are only
/// present in their respective ranges (under a day, a week or more).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepletionEstimate {
    /// `+inf` when there is no consumption. Serialized as `null` in that case.
    #[serde(with = "days_serde")]
    pub days_remaining: f64,
    pub hours_remaining: Option<u64>,
    pub weeks_remaining: Option<u64>,
}

impl DepletionEstimate {
    /// Estimate for already-validated values.
    ///
    /// A rate so small that the day count overflows (subnormal rates) is
    /// treated like no movement at all. A finite horizon longer than `u64::MAX`
    /// weeks reports `weeks_remaining = Some(u64::MAX)`.
    pub fn compute(quantity_on_hand: u64, daily_consumption_rate: f64) -> Self {
        let days = if daily_consumption_rate == 0.0 {
            f64::INFINITY
        } else {
            quantity_on_hand as f64 / daily_consumption_rate
        };
        if !days.is_finite() {
            return Self {
                days_remaining: f64::INFINITY,
                hours_remaining: None,
                weeks_remaining: None,
            };
        }

        // f64::round is half-away-from-zero, i.e. half-up for non-negative values.
        let hours_remaining = (days < 1.0).then(|| (days * HOURS_PER_DAY).round() as u64);
        let weeks_remaining = (days >= DAYS_PER_WEEK).then(|| (days / DAYS_PER_WEEK).round() as u64);

        Self {
            days_remaining: days,
            hours_remaining,
            weeks_remaining,
        }
    }

    pub fn is_depleting(&self) -> bool {
        self.days_remaining.is_finite()
    }

    /// Short human-readable label, e.g. `"13h left"` or `"3.1 days left"`.
    pub fn time_left(&self) -> String {
        if !self.is_depleting() {
            return "no movement".to_string();
        }
        if let Some(hours) = self.hours_remaining {
            return format!("{hours}h left");
        }
        match self.weeks_remaining {
            Some(1) => "1 week left".to_string(),
            Some(weeks) => format!("{weeks} weeks left"),
            None => format!("{:.1} days left", self.days_remaining),
        }
    }
}

impl ValueObject for DepletionEstimate {}

/// Validate raw inputs and estimate the stockout horizon.
pub fn estimate(quantity_on_hand: i64, daily_consumption_rate: f64) -> DomainResult<DepletionEstimate> {
    let quantity = non_negative("quantity_on_hand", quantity_on_hand)?;
    let rate = validate_rate(daily_consumption_rate)?;
    Ok(DepletionEstimate::compute(quantity, rate))
}

/// Serializes an infinite day count as `null` (JSON has no infinity) and reads
/// `null` back as `+inf`.
pub(crate) mod days_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(days: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if days.is_finite() {
            serializer.serialize_f64(*days)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
