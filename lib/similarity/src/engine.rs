//! Similarity Engine
//!
//! Dense N×N cosine similarity over a [`FeatureMatrix`], computed once and
//! read-only afterwards. Memory and time are O(N²), which suits catalogs of
//! hundreds to a few thousand restaurants.

use crate::matrix::FeatureMatrix;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

/// Similarity of a vector with itself
pub const MAX_SIMILARITY: f64 = 1.0;

/// A ranked row of the similarity matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Catalog row index
    pub index: usize,
    /// Unrounded cosine similarity
    pub score: f64,
}

/// Square, symmetric, row-major similarity scores
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairwise cosine similarities.
    ///
    /// Diagonal entries are [`MAX_SIMILARITY`]. Off-diagonal entries that
    /// involve a zero-magnitude vector are 0.0.
    pub fn compute(features: &FeatureMatrix) -> Self {
        let vectors = features.vectors();
        let size = vectors.len();
        let mut scores = vec![0.0f64; size * size];

        if size > 0 {
            scores.par_chunks_mut(size).enumerate().for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = if i == j {
                        MAX_SIMILARITY
                    } else {
                        vectors[i].cosine_similarity(&vectors[j]).clamp(-MAX_SIMILARITY, MAX_SIMILARITY)
                    };
                }
            });
        }

        Self { size, scores }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.scores[i * self.size + j])
        } else {
            None
        }
    }

    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.size {
            Some(&self.scores[i * self.size..(i + 1) * self.size])
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The `limit` rows most similar to `index`, excluding `index` itself.
    ///
    /// Sorted by descending score, ties broken by ascending row index.
    pub fn top_neighbors(&self, index: usize, limit: usize) -> Vec<Neighbor> {
        let Some(row) = self.row(index) else {
            return Vec::new();
        };

        let mut candidates: Vec<Neighbor> = row
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != index)
            .map(|(j, score)| Neighbor { index: j, score: *score })
            .collect();

        if limit == 0 {
            return Vec::new();
        }
        if limit < candidates.len() {
            candidates.select_nth_unstable_by(limit - 1, rank_order);
            candidates.truncate(limit);
        }
        candidates.sort_unstable_by(rank_order);
        candidates
    }
}

fn rank_order(a: &Neighbor, b: &Neighbor) -> Ordering {
    OrderedFloat(b.score)
        .cmp(&OrderedFloat(a.score))
        .then_with(|| a.index.cmp(&b.index))
}
