use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::error::DataError;

/// Sentinel for categorical fields the catalog left empty
pub const UNKNOWN: &str = "Unknown";

pub const DELIVERY_YES: &str = "Yes";
pub const DELIVERY_NO: &str = "No";

/// Map a delivery flag to the catalog's label for it
#[inline]
pub fn delivery_label(available: bool) -> &'static str {
    if available { DELIVERY_YES } else { DELIVERY_NO }
}

/// A catalog row exactly as the loader handed it over.
///
/// Every field is optional and loosely typed here; deciding between the
/// "Unknown" fill and a [`DataError`] happens in [`RestaurantRecord::from_raw`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    #[serde(rename = "Restaurant", default)]
    pub restaurant: Option<Value>,
    #[serde(rename = "City", default)]
    pub city: Option<Value>,
    #[serde(rename = "Cuisines", default)]
    pub cuisines: Option<Value>,
    #[serde(rename = "Online_Delivery", default)]
    pub online_delivery: Option<Value>,
    #[serde(rename = "Average_cost", default)]
    pub average_cost: Option<Value>,
    #[serde(rename = "Rating", default)]
    pub rating: Option<Value>,
}

impl RawRecord {
    /// Create a fully populated raw record
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        cuisine: impl Into<String>,
        delivery: bool,
        average_cost: f64,
        rating: f64,
    ) -> Self {
        Self {
            restaurant: Some(Value::String(name.into())),
            city: Some(Value::String(city.into())),
            cuisines: Some(Value::String(cuisine.into())),
            online_delivery: Some(Value::Bool(delivery)),
            average_cost: Some(Value::from(average_cost)),
            rating: Some(Value::from(rating)),
        }
    }
}

/// A validated, immutable catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantRecord {
    #[serde(rename = "Restaurant")]
    pub name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Cuisines")]
    pub cuisine: String,
    /// Delivery label as it appears in the catalog ("Yes", "No" or "Unknown")
    #[serde(rename = "Online_Delivery")]
    pub delivery: String,
    #[serde(rename = "Average_cost")]
    pub average_cost: f64,
    #[serde(rename = "Rating")]
    pub rating: f64,
}

impl RestaurantRecord {
    /// Validate a raw row, filling missing categorical fields with [`UNKNOWN`].
    ///
    /// Missing or malformed numeric fields are rejected; they are never zeroed.
    pub fn from_raw(row: usize, raw: &RawRecord) -> Result<Self, DataError> {
        let average_cost = numeric_field(row, "Average_cost", raw.average_cost.as_ref())?;
        if average_cost < 0.0 {
            return Err(DataError::NegativeCost { row, value: average_cost });
        }
        let rating = numeric_field(row, "Rating", raw.rating.as_ref())?;

        Ok(Self {
            name: text_field(raw.restaurant.as_ref()),
            city: text_field(raw.city.as_ref()),
            cuisine: text_field(raw.cuisines.as_ref()),
            delivery: delivery_field(raw.online_delivery.as_ref()),
            average_cost,
            rating,
        })
    }

    /// `Some(flag)` when the delivery label is exactly "Yes" or "No"
    pub fn offers_delivery(&self) -> Option<bool> {
        match self.delivery.as_str() {
            DELIVERY_YES => Some(true),
            DELIVERY_NO => Some(false),
            _ => None,
        }
    }
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn delivery_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::Bool(flag)) => delivery_label(*flag).to_string(),
        other => text_field(other),
    }
}

fn numeric_field(row: usize, field: &'static str, value: Option<&Value>) -> Result<f64, DataError> {
    let number = match value {
        None | Some(Value::Null) => return Err(DataError::MissingField { row, field }),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| DataError::NotNumeric {
            row,
            field,
            value: n.to_string(),
        })?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| DataError::NotNumeric {
            row,
            field,
            value: s.clone(),
        })?,
        Some(other) => {
            return Err(DataError::NotNumeric {
                row,
                field,
                value: other.to_string(),
            })
        }
    };

    if !number.is_finite() {
        return Err(DataError::NonFinite { row, field });
    }
    Ok(number)
}
