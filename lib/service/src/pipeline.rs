use ahash::AHashMap;
use dishx_core::{Error, RawRecord, RestaurantRecord, Result};
use dishx_similarity::{FeatureEncoder, FeatureMatrix, SimilarityMatrix};
use std::time::Instant;
use tracing::{debug, info};

/// Everything a query needs, built in one pass and never mutated.
///
/// Encoders, feature vectors and the similarity matrix always come from the
/// same catalog. A new catalog means a new handle.
#[derive(Debug)]
pub struct PipelineHandle {
    records: Vec<RestaurantRecord>,
    encoder: FeatureEncoder,
    features: FeatureMatrix,
    similarity: SimilarityMatrix,
    name_index: AHashMap<String, usize>,
}

/// Validate raw rows and run encode → vectors → similarity to completion.
///
/// Fails with [`Error::Data`] on the first row with a missing or malformed
/// numeric field; nothing is built in that case.
pub fn build_pipeline(records: &[RawRecord]) -> Result<PipelineHandle> {
    let records = records
        .iter()
        .enumerate()
        .map(|(row, raw)| RestaurantRecord::from_raw(row, raw))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    PipelineHandle::from_records(records)
}

impl PipelineHandle {
    /// Build from records that are already validated
    pub fn from_records(records: Vec<RestaurantRecord>) -> Result<Self> {
        let started = Instant::now();

        let encoder = FeatureEncoder::fit(&records);
        let features = FeatureMatrix::build(&encoder, &records)
            .map_err(|e| Error::Encoding(e.to_string()))?;
        debug!(rows = features.len(), "feature matrix built");

        let similarity = SimilarityMatrix::compute(&features);

        // First row wins for duplicate names
        let mut name_index = AHashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            name_index.entry(record.name.clone()).or_insert(row);
        }

        info!(
            records = records.len(),
            cities = encoder.cities().len(),
            cuisines = encoder.cuisines().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "pipeline built"
        );

        Ok(Self {
            records,
            encoder,
            features,
            similarity,
            name_index,
        })
    }

    pub fn records(&self) -> &[RestaurantRecord] {
        &self.records
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Catalog row of the first restaurant with this name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishx_core::DataError;
    use serde_json::json;

    #[test]
    fn test_build_pipeline() {
        let handle = build_pipeline(&[
            RawRecord::new("A", "NYC", "Italian", true, 200.0, 4.1),
            RawRecord::new("B", "NYC", "Italian", true, 220.0, 4.4),
            RawRecord::new("C", "LA", "Thai", false, 800.0, 3.8),
        ])
        .unwrap();

        assert_eq!(handle.len(), 3);
        assert_eq!(handle.features().len(), 3);
        assert_eq!(handle.similarity().len(), 3);
        assert_eq!(handle.position("C"), Some(2));
        assert_eq!(handle.position("Z"), None);
    }

    #[test]
    fn test_bad_cost_fails_whole_build() {
        let bad: RawRecord = serde_json::from_value(json!({
            "Restaurant": "Broken",
            "Average_cost": "n/a",
            "Rating": 4.0
        }))
        .unwrap();

        let err = build_pipeline(&[RawRecord::new("A", "NYC", "Italian", true, 200.0, 4.1), bad]).unwrap_err();
        match err {
            Error::Data(DataError::NotNumeric { row, field, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "Average_cost");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_names_resolve_to_first_row() {
        let handle = build_pipeline(&[
            RawRecord::new("Dup", "NYC", "Italian", true, 200.0, 4.1),
            RawRecord::new("Other", "LA", "Thai", false, 300.0, 4.0),
            RawRecord::new("Dup", "Goa", "Seafood", true, 500.0, 4.5),
        ])
        .unwrap();
        assert_eq!(handle.position("Dup"), Some(0));
    }

    #[test]
    fn test_empty_catalog_builds() {
        let handle = build_pipeline(&[]).unwrap();
        assert!(handle.is_empty());
        assert!(handle.similarity().is_empty());
    }
}
