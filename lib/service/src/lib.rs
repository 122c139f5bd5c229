//! # DishX Service
//!
//! Builds the recommendation pipeline and answers queries against it.
//!
//! - [`build_pipeline`] - Validate, encode, vectorize and compute similarity in one pass
//! - [`query`] - Preference filtering, similar-restaurant lookup, catalog view
//! - [`stats`] - Selection options and the cost histogram
//! - [`CatalogManager`] - Publishes whole pipelines and refuses queries until one exists

pub mod loader;
pub mod manager;
pub mod pipeline;
pub mod query;
pub mod stats;

pub use loader::{load_catalog, parse_catalog};
pub use manager::CatalogManager;
pub use pipeline::{build_pipeline, PipelineHandle};
pub use query::{catalog_view, filter, filter_by, similar, SimilarRestaurant, SIMILAR_LIMIT};
pub use stats::{
    cost_histogram, options, CatalogOptions, HistogramBin, DEFAULT_HISTOGRAM_BINS,
    MAX_HISTOGRAM_BINS,
};
