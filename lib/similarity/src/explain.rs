//! Explainability for similarity scores
//!
//! Splits a cosine score into per-feature contributions so a caller can show
//! which attributes made two restaurants look alike.

use crate::schema::FeatureField;
use dishx_core::FeatureVector;
use std::collections::BTreeMap;

/// Round a score to 2 decimal places for presentation
#[inline]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Per-feature terms `u_k * v_k / (|u| |v|)`, keyed by feature name.
///
/// The terms sum to the cosine similarity of `u` and `v`. Every term is 0.0
/// when either vector has zero magnitude.
pub fn contributions(u: &FeatureVector, v: &FeatureVector) -> BTreeMap<String, f64> {
    let denom = u.norm() * v.norm();
    FeatureField::ALL
        .iter()
        .map(|field| {
            let k = field.position();
            let term = if denom == 0.0 {
                0.0
            } else {
                u.as_slice()[k] * v.as_slice()[k] / denom
            };
            (field.name().to_string(), term)
        })
        .collect()
}

/// Feature with the largest contribution, if any contribution is positive.
///
/// Equal contributions resolve to the first name in key order.
pub fn top_contributing_field(contributions: &BTreeMap<String, f64>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (name, value) in contributions {
        if *value > 0.0 && best.map_or(true, |(_, top)| *value > top) {
            best = Some((name.as_str(), *value));
        }
    }
    best.map(|(name, _)| name)
}
