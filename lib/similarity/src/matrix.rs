//! Feature Matrix Builder
//!
//! One [`FeatureVector`] per record, kept in catalog row order so that row
//! `i` of the matrix always describes catalog record `i`.

use crate::encoder::{EncodeError, FeatureEncoder};
use dishx_core::{FeatureVector, RestaurantRecord};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureMatrix {
    vectors: Vec<FeatureVector>,
}

impl FeatureMatrix {
    /// Encode every record with an already fitted encoder
    pub fn build(encoder: &FeatureEncoder, records: &[RestaurantRecord]) -> Result<Self, EncodeError> {
        let vectors = records
            .iter()
            .map(|record| encoder.encode(record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { vectors })
    }

    pub fn from_vectors(vectors: Vec<FeatureVector>) -> Self {
        Self { vectors }
    }

    #[inline]
    pub fn get(&self, row: usize) -> Option<&FeatureVector> {
        self.vectors.get(row)
    }

    #[inline]
    pub fn vectors(&self) -> &[FeatureVector] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
