//! Query Service
//!
//! Read-only operations over a built [`PipelineHandle`]. None of them touch
//! shared mutable state, so any number can run concurrently on one handle.

use crate::pipeline::PipelineHandle;
use dishx_core::{Error, Filter, PreferenceFilter, RestaurantRecord, Result};
use dishx_similarity::{contributions, round_score, top_contributing_field};
use serde::Serialize;
use std::collections::BTreeMap;

/// Maximum number of entries returned by [`similar`]
pub const SIMILAR_LIMIT: usize = 5;

/// One entry of a similar-restaurants answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarRestaurant {
    /// Catalog row of the match
    pub index: usize,
    pub name: String,
    /// Cosine similarity rounded to 2 decimals
    pub score: f64,
    /// Per-feature share of the unrounded score
    pub explain: BTreeMap<String, f64>,
    /// Feature contributing most to the score, `None` when nothing is shared
    pub top_field: Option<String>,
}

/// Records matching city, cuisine and delivery exactly and costing at most
/// `max_price`, in catalog order. An empty result is not an error.
pub fn filter<'a>(
    handle: &'a PipelineHandle,
    city: &str,
    cuisine: &str,
    delivery: bool,
    max_price: f64,
) -> Vec<&'a RestaurantRecord> {
    filter_by(handle, &PreferenceFilter::new(city, cuisine, delivery, max_price))
}

/// Records accepted by an arbitrary [`Filter`], in catalog order
pub fn filter_by<'a, F: Filter + ?Sized>(handle: &'a PipelineHandle, filter: &F) -> Vec<&'a RestaurantRecord> {
    handle
        .records()
        .iter()
        .filter(|record| filter.matches(record))
        .collect()
}

/// Up to [`SIMILAR_LIMIT`] restaurants most similar to `name`.
///
/// The queried row is excluded by position, so another row with an identical
/// feature vector still shows up. Ordered by descending score, then by
/// ascending catalog row.
pub fn similar(handle: &PipelineHandle, name: &str) -> Result<Vec<SimilarRestaurant>> {
    let index = handle
        .position(name)
        .ok_or_else(|| Error::NotFound(name.to_string()))?;

    let features = handle.features();
    let query = features
        .get(index)
        .ok_or_else(|| Error::NotFound(name.to_string()))?;

    let results = handle
        .similarity()
        .top_neighbors(index, SIMILAR_LIMIT)
        .into_iter()
        .filter_map(|neighbor| {
            let record = handle.records().get(neighbor.index)?;
            let vector = features.get(neighbor.index)?;
            let explain = contributions(query, vector);
            let top_field = top_contributing_field(&explain).map(str::to_string);
            Some(SimilarRestaurant {
                index: neighbor.index,
                name: record.name.clone(),
                score: round_score(neighbor.score),
                explain,
                top_field,
            })
        })
        .collect();

    Ok(results)
}

/// The full catalog, in its original order
pub fn catalog_view(handle: &PipelineHandle) -> &[RestaurantRecord] {
    handle.records()
}
