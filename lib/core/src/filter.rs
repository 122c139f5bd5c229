// Preference filtering over raw catalog fields
use serde::{Deserialize, Serialize};
use crate::record::{delivery_label, RestaurantRecord};

pub trait Filter {
    fn matches(&self, record: &RestaurantRecord) -> bool;
}

/// The four user preferences, all of which must hold.
///
/// Comparison is exact against the raw record fields; a category the
/// catalog never contained simply matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceFilter {
    pub city: String,
    pub cuisine: String,
    pub delivery: bool,
    /// Inclusive upper bound on average cost
    pub max_price: f64,
}

impl PreferenceFilter {
    pub fn new(city: impl Into<String>, cuisine: impl Into<String>, delivery: bool, max_price: f64) -> Self {
        Self {
            city: city.into(),
            cuisine: cuisine.into(),
            delivery,
            max_price,
        }
    }
}

impl Filter for PreferenceFilter {
    fn matches(&self, record: &RestaurantRecord) -> bool {
        record.city == self.city
            && record.cuisine == self.cuisine
            && record.delivery == delivery_label(self.delivery)
            && record.average_cost <= self.max_price
    }
}
