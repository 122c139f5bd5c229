//! # DishX Similarity
//!
//! Content-based similarity for restaurant catalogs.
//!
//! The pipeline is split into a fit phase, which learns immutable lookup
//! tables from the whole catalog, and an apply phase, which is a pure
//! function of those tables:
//!
//! - [`FeatureEncoder`] - First-seen label encoding for city, cuisine and
//!   delivery, min-max scaling for average cost
//! - [`FeatureMatrix`] - One [`FeatureVector`](dishx_core::FeatureVector) per
//!   record, in catalog order
//! - [`SimilarityMatrix`] - Dense pairwise cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use dishx_core::{RawRecord, RestaurantRecord};
//! use dishx_similarity::{FeatureEncoder, FeatureMatrix, SimilarityMatrix};
//!
//! let records: Vec<RestaurantRecord> = [
//!     RawRecord::new("A", "NYC", "Italian", true, 200.0, 4.1),
//!     RawRecord::new("B", "NYC", "Italian", true, 220.0, 4.4),
//!     RawRecord::new("C", "LA", "Thai", false, 800.0, 3.8),
//! ]
//! .iter()
//! .enumerate()
//! .map(|(row, raw)| RestaurantRecord::from_raw(row, raw).unwrap())
//! .collect();
//!
//! let encoder = FeatureEncoder::fit(&records);
//! let features = FeatureMatrix::build(&encoder, &records).unwrap();
//! let similarity = SimilarityMatrix::compute(&features);
//!
//! let top = similarity.top_neighbors(0, 5);
//! assert_eq!(top.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Records    │────>│  Encoder    │────>│  Feature    │
//! │ (catalog)   │     │ (fit/apply) │     │  Matrix     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌──────┴──────┐
//!                                         │ Similarity  │
//!                                         │   Matrix    │
//!                                         └─────────────┘
//! ```

pub mod schema;
pub mod encoder;
pub mod matrix;
pub mod engine;
pub mod explain;

pub use schema::FeatureField;
pub use encoder::{CostScaler, EncodeError, EncodingTable, FeatureEncoder, DEGENERATE_SCALED_COST};
pub use matrix::FeatureMatrix;
pub use engine::{Neighbor, SimilarityMatrix, MAX_SIMILARITY};
pub use explain::{contributions, round_score, top_contributing_field};
