//! Feature Encoder
//!
//! Fits lookup tables over the whole catalog once, then applies them to
//! individual records. Fitting produces immutable state; applying is a pure
//! function of that state and the record.

use crate::schema::FeatureField;
use ahash::AHashMap;
use dishx_core::{FeatureVector, RestaurantRecord};
use serde::Serialize;
use tracing::{debug, warn};

/// Scaled cost assigned to every record when all costs are equal
pub const DEGENERATE_SCALED_COST: f64 = 0.0;

/// Errors raised when applying fitted tables
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    #[error("value '{value}' of field '{field}' was not seen when the encoder was fit")]
    UnseenValue { field: FeatureField, value: String },
}

/// Label encoding for one categorical field.
///
/// Codes are handed out in first-seen order and cover exactly `0..len()`.
#[derive(Debug, Clone, Default)]
pub struct EncodingTable {
    codes: AHashMap<String, u32>,
    values: Vec<String>,
}

impl EncodingTable {
    /// Fit a table by scanning `values` in order
    pub fn fit<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for value in values {
            if !table.codes.contains_key(value) {
                let code = table.values.len() as u32;
                table.codes.insert(value.to_string(), code);
                table.values.push(value.to_string());
            }
        }
        table
    }

    /// Code for a value, `None` if it was not present at fit time
    #[inline]
    pub fn code(&self, value: &str) -> Option<u32> {
        self.codes.get(value).copied()
    }

    /// Value for a code
    #[inline]
    pub fn value(&self, code: u32) -> Option<&str> {
        self.values.get(code as usize).map(String::as_str)
    }

    /// Distinct values, indexed by code
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Codes are derived from `values`, so comparing the ordered values is enough.
impl PartialEq for EncodingTable {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

/// Min-max statistics of the average-cost column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostScaler {
    min: f64,
    max: f64,
}

impl CostScaler {
    /// Fit over all costs. An empty catalog yields the degenerate range [0, 0].
    pub fn fit<I>(costs: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bounds: Option<(f64, f64)> = None;
        for cost in costs {
            bounds = Some(match bounds {
                None => (cost, cost),
                Some((min, max)) => (min.min(cost), max.max(cost)),
            });
        }
        let (min, max) = bounds.unwrap_or((0.0, 0.0));
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True when every fitted cost was the same value
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Linear min-max scaling; [`DEGENERATE_SCALED_COST`] for a zero range
    pub fn scale(&self, cost: f64) -> f64 {
        if self.is_degenerate() {
            return DEGENERATE_SCALED_COST;
        }
        (cost - self.min) / (self.max - self.min)
    }
}

/// Fitted encoders for every feature of a restaurant
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureEncoder {
    city: EncodingTable,
    cuisine: EncodingTable,
    delivery: EncodingTable,
    cost: CostScaler,
}

impl FeatureEncoder {
    /// Fit all tables over the catalog in its given order
    pub fn fit(records: &[RestaurantRecord]) -> Self {
        let city = EncodingTable::fit(records.iter().map(|r| r.city.as_str()));
        let cuisine = EncodingTable::fit(records.iter().map(|r| r.cuisine.as_str()));
        let delivery = EncodingTable::fit(records.iter().map(|r| r.delivery.as_str()));
        let cost = CostScaler::fit(records.iter().map(|r| r.average_cost));

        debug!(
            cities = city.len(),
            cuisines = cuisine.len(),
            delivery_labels = delivery.len(),
            min_cost = cost.min(),
            max_cost = cost.max(),
            "encoder fitted"
        );
        if cost.is_degenerate() && records.len() > 1 {
            warn!(cost = cost.min(), "all records share one average cost; scaled cost is constant");
        }

        Self { city, cuisine, delivery, cost }
    }

    /// Apply the fitted tables to one record
    pub fn encode(&self, record: &RestaurantRecord) -> Result<FeatureVector, EncodeError> {
        let city = lookup(&self.city, FeatureField::City, &record.city)?;
        let cuisine = lookup(&self.cuisine, FeatureField::Cuisine, &record.cuisine)?;
        let delivery = lookup(&self.delivery, FeatureField::Delivery, &record.delivery)?;
        let scaled_cost = self.cost.scale(record.average_cost);

        Ok(FeatureVector::from_parts(city, cuisine, delivery, scaled_cost))
    }

    /// Encoding table of a categorical field
    pub fn table(&self, field: FeatureField) -> Option<&EncodingTable> {
        match field {
            FeatureField::City => Some(&self.city),
            FeatureField::Cuisine => Some(&self.cuisine),
            FeatureField::Delivery => Some(&self.delivery),
            FeatureField::Cost => None,
        }
    }

    pub fn cities(&self) -> &EncodingTable {
        &self.city
    }

    pub fn cuisines(&self) -> &EncodingTable {
        &self.cuisine
    }

    pub fn delivery(&self) -> &EncodingTable {
        &self.delivery
    }

    pub fn cost_scaler(&self) -> &CostScaler {
        &self.cost
    }
}

fn lookup(table: &EncodingTable, field: FeatureField, value: &str) -> Result<u32, EncodeError> {
    table.code(value).ok_or_else(|| EncodeError::UnseenValue {
        field,
        value: value.to_string(),
    })
}
