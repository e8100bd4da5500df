use serde::{Deserialize, Serialize};

use shelfsmart_core::{DomainError, DomainResult, Entity, ProductId};

/// Category label used when the upstream store has none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Loosely typed number from a JSON payload: integer, float or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    /// Interpret as a whole, non-negative unit count.
    pub fn to_count(&self, field: &'static str) -> DomainResult<u64> {
        match self {
            RawNumber::Integer(i) => non_negative(field, *i),
            RawNumber::Float(f) => {
                if f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64 {
                    Ok(*f as u64)
                } else {
                    Err(DomainError::invalid_input(field, f))
                }
            }
            RawNumber::Text(s) => Self::parse_text(s)
                .ok_or_else(|| DomainError::invalid_input(field, format!("{s:?}")))?
                .to_count(field),
        }
    }

    /// Interpret as a daily consumption rate (finite, non-negative).
    pub fn to_rate(&self) -> DomainResult<f64> {
        match self {
            RawNumber::Integer(i) => validate_rate(*i as f64),
            RawNumber::Float(f) => validate_rate(*f),
            RawNumber::Text(s) => Self::parse_text(s)
                .ok_or_else(|| DomainError::invalid_input("daily_consumption_rate", format!("{s:?}")))?
                .to_rate(),
        }
    }

    fn parse_text(s: &str) -> Option<RawNumber> {
        let s = s.trim();
        s.parse::<i64>()
            .map(RawNumber::Integer)
            .or_else(|_| s.parse::<f64>().map(RawNumber::Float))
            .ok()
    }
}

/// Raw stock row as it arrives from the inventory backend.
///
/// Every field is loosely typed so that malformed rows (fractional or negative
/// counts, numeric text, missing fields) reach validation and come back as
/// `InvalidInput` instead of failing inside the JSON parser.
/// Aliases cover the backend's column names (`item_nbr`, `item_inventory`, ...)
/// and the dashboard's camelCase payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockRecordInput {
    #[serde(default, alias = "productId", alias = "item_nbr", alias = "id")]
    pub product_id: Option<ProductId>,

    #[serde(default, alias = "productName", alias = "item_name", alias = "name")]
    pub product_name: Option<String>,

    #[serde(default, alias = "item_category")]
    pub category: Option<String>,

    #[serde(
        default,
        alias = "quantityOnHand",
        alias = "item_inventory",
        alias = "quantity"
    )]
    pub quantity_on_hand: Option<RawNumber>,

    #[serde(
        default,
        alias = "dailyConsumptionRate",
        alias = "daily_sales_rate"
    )]
    pub daily_consumption_rate: Option<RawNumber>,

    #[serde(default, alias = "criticalThreshold")]
    pub critical_threshold: Option<RawNumber>,

    #[serde(default, alias = "lowThreshold")]
    pub low_threshold: Option<RawNumber>,
}

/// Validated stock record: the only shape the pipeline accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRecord {
    product_id: ProductId,
    product_name: String,
    category: String,
    quantity_on_hand: u64,
    daily_consumption_rate: f64,
    critical_threshold: Option<u64>,
    low_threshold: Option<u64>,
}

impl StockRecord {
    /// Build a record without per-product thresholds.
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        category: impl Into<String>,
        quantity_on_hand: u64,
        daily_consumption_rate: f64,
    ) -> DomainResult<Self> {
        let product_name = product_name.into();
        if product_name.trim().is_empty() {
            return Err(DomainError::invalid_input("product_name", "\"\""));
        }

        Ok(Self {
            product_id: product_id.into(),
            product_name,
            category: category.into(),
            quantity_on_hand,
            daily_consumption_rate: validate_rate(daily_consumption_rate)?,
            critical_threshold: None,
            low_threshold: None,
        })
    }

    /// Attach per-product thresholds. Either may be omitted; when both are
    /// given they must satisfy `critical < low`.
    pub fn with_thresholds(mut self, critical: Option<u64>, low: Option<u64>) -> DomainResult<Self> {
        if let (Some(c), Some(l)) = (critical, low) {
            if c >= l {
                return Err(DomainError::configuration(c, l));
            }
        }
        self.critical_threshold = critical;
        self.low_threshold = low;
        Ok(self)
    }

    /// Copy of this record with a refreshed consumption rate.
    pub fn with_daily_rate(&self, daily_consumption_rate: f64) -> DomainResult<Self> {
        Ok(Self {
            daily_consumption_rate: validate_rate(daily_consumption_rate)?,
            ..self.clone()
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity_on_hand(&self) -> u64 {
        self.quantity_on_hand
    }

    pub fn daily_consumption_rate(&self) -> f64 {
        self.daily_consumption_rate
    }

    pub fn critical_threshold(&self) -> Option<u64> {
        self.critical_threshold
    }

    pub fn low_threshold(&self) -> Option<u64> {
        self.low_threshold
    }
}

impl Entity for StockRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

impl TryFrom<StockRecordInput> for StockRecord {
    type Error = DomainError;

    fn try_from(input: StockRecordInput) -> Result<Self, Self::Error> {
        let product_id = input
            .product_id
            .ok_or_else(|| DomainError::invalid_input("product_id", "missing"))?;
        let product_name = input
            .product_name
            .ok_or_else(|| DomainError::invalid_input("product_name", "missing"))?;
        let category = input
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        let quantity = input
            .quantity_on_hand
            .ok_or_else(|| DomainError::invalid_input("quantity_on_hand", "missing"))?
            .to_count("quantity_on_hand")?;

        // No rate on the row means no known movement.
        let rate = input
            .daily_consumption_rate
            .map(|r| r.to_rate())
            .transpose()?
            .unwrap_or(0.0);

        let critical = input
            .critical_threshold
            .map(|v| v.to_count("critical_threshold"))
            .transpose()?;
        let low = input
            .low_threshold
            .map(|v| v.to_count("low_threshold"))
            .transpose()?;

        StockRecord::new(product_id, product_name, category, quantity, rate)?
            .with_thresholds(critical, low)
    }
}

pub(crate) fn non_negative(field: &'static str, value: i64) -> DomainResult<u64> {
    u64::try_from(value).map_err(|_| DomainError::invalid_input(field, value))
}

pub(crate) fn validate_rate(rate: f64) -> DomainResult<f64> {
    if !(rate.is_finite() && rate >= 0.0) {
        return Err(DomainError::invalid_input("daily_consumption_rate", rate));
    }
    Ok(rate)
}
