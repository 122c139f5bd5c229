//! Feature layout
//!
//! Fixes the order of the components in every [`FeatureVector`](dishx_core::FeatureVector).
//! The similarity engine and the explanations both index by this order.

use dishx_core::FEATURE_DIM;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One component of a feature vector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FeatureField {
    City,
    Cuisine,
    Delivery,
    Cost,
}

impl FeatureField {
    /// All fields in vector order
    pub const ALL: [FeatureField; FEATURE_DIM] = [
        FeatureField::City,
        FeatureField::Cuisine,
        FeatureField::Delivery,
        FeatureField::Cost,
    ];

    /// Index of this field inside a feature vector
    pub fn position(self) -> usize {
        match self {
            FeatureField::City => 0,
            FeatureField::Cuisine => 1,
            FeatureField::Delivery => 2,
            FeatureField::Cost => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FeatureField::City => "city",
            FeatureField::Cuisine => "cuisine",
            FeatureField::Delivery => "delivery",
            FeatureField::Cost => "cost",
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
