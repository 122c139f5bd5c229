//! # DishX
//!
//! Content-based restaurant recommendations over a small catalog.
//!
//! DishX answers two kinds of questions:
//!
//! - **Which restaurants fit my preferences?** Exact city, cuisine and
//!   delivery match with an inclusive price ceiling.
//! - **What is similar to this restaurant?** Cosine similarity over
//!   label-encoded categorical fields and min-max scaled cost.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install dishx
//! dishx --catalog restaurants.json serve --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use dishx::prelude::*;
//!
//! let handle = build_pipeline(&[
//!     RawRecord::new("A", "NYC", "Italian", true, 200.0, 4.1),
//!     RawRecord::new("B", "NYC", "Italian", true, 220.0, 4.4),
//!     RawRecord::new("C", "LA", "Thai", false, 800.0, 3.8),
//! ])
//! .unwrap();
//!
//! let matches = filter(&handle, "NYC", "Italian", true, 250.0);
//! assert_eq!(matches.len(), 2);
//!
//! let neighbours = similar(&handle, "A").unwrap();
//! assert_eq!(neighbours[0].name, "B");
//! ```
//!
//! ## Crate Structure
//!
//! - [`dishx-core`](https://docs.rs/dishx-core) - Records, feature vectors, filters, errors
//! - [`dishx-similarity`](https://docs.rs/dishx-similarity) - Encoders, feature matrix, similarity matrix
//! - [`dishx-service`](https://docs.rs/dishx-service) - Pipeline build, queries, catalog manager
//! - [`dishx-api`](https://docs.rs/dishx-api) - REST API

// Re-export core types
pub use dishx_core::{
    DataError, Error, Result,
    RawRecord, RestaurantRecord, FeatureVector,
    Filter, PreferenceFilter,
};

// Re-export the similarity pipeline
pub use dishx_similarity::{
    CostScaler, EncodingTable, FeatureEncoder, FeatureField,
    FeatureMatrix, SimilarityMatrix,
};

// Re-export the query service
pub use dishx_service::{
    build_pipeline, catalog_view, cost_histogram, filter, options, similar,
    CatalogManager, CatalogOptions, HistogramBin, PipelineHandle, SimilarRestaurant,
    SIMILAR_LIMIT,
};

// Re-export API
pub use dishx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DataError, Error, Result,
        RawRecord, RestaurantRecord, PreferenceFilter,
        build_pipeline, catalog_view, filter, similar,
        CatalogManager, PipelineHandle, SimilarRestaurant,
    };
}
