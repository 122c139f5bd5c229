//! # DishX Core
//!
//! Core types for the DishX restaurant recommender.
//!
//! - [`RawRecord`] - A catalog row as delivered by a loader
//! - [`RestaurantRecord`] - A validated, immutable catalog entry
//! - [`FeatureVector`] - Fixed-order encoded features of one restaurant
//! - [`PreferenceFilter`] - Conjunctive city / cuisine / delivery / price filter
//!
//! ## Example
//!
//! ```rust
//! use dishx_core::{Filter, PreferenceFilter, RawRecord, RestaurantRecord};
//!
//! let raw = RawRecord::new("Trattoria", "NYC", "Italian", true, 200.0, 4.3);
//! let record = RestaurantRecord::from_raw(0, &raw).unwrap();
//!
//! let filter = PreferenceFilter::new("NYC", "Italian", true, 250.0);
//! assert!(filter.matches(&record));
//! ```

pub mod error;
pub mod filter;
pub mod record;
pub mod vector;

pub use error::{DataError, Error, Result};
pub use filter::{Filter, PreferenceFilter};
pub use record::{delivery_label, RawRecord, RestaurantRecord, DELIVERY_NO, DELIVERY_YES, UNKNOWN};
pub use vector::{FeatureVector, FEATURE_DIM};
