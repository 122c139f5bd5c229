use serde::{Deserialize, Serialize};

/// Number of components in every feature vector
pub const FEATURE_DIM: usize = 4;

/// Encoded features of one restaurant, in the fixed order
/// (city code, cuisine code, delivery code, scaled cost)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: [f64; FEATURE_DIM],
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: [f64; FEATURE_DIM]) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_parts(city: u32, cuisine: u32, delivery: u32, scaled_cost: f64) -> Self {
        Self::new([city as f64, cuisine as f64, delivery as f64, scaled_cost])
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        FEATURE_DIM
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Cosine similarity, defined as 0.0 when either vector has zero magnitude
    #[inline]
    pub fn cosine_similarity(&self, other: &FeatureVector) -> f64 {
        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        self.dot(other) / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let v1 = FeatureVector::new([1.0, 0.0, 0.0, 0.0]);
        let v2 = FeatureVector::new([1.0, 0.0, 0.0, 0.0]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-6);

        let v3 = FeatureVector::new([1.0, 0.0, 0.0, 0.0]);
        let v4 = FeatureVector::new([0.0, 1.0, 0.0, 0.0]);
        assert!((v3.cosine_similarity(&v4) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_similarity_is_zero() {
        let zero = FeatureVector::new([0.0; FEATURE_DIM]);
        let other = FeatureVector::from_parts(1, 2, 0, 0.5);
        assert_eq!(zero.norm(), 0.0);
        assert_eq!(zero.cosine_similarity(&other), 0.0);
        assert_eq!(other.cosine_similarity(&zero), 0.0);
        assert_eq!(zero.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_from_parts_order() {
        let v = FeatureVector::from_parts(3, 1, 1, 0.25);
        assert_eq!(v.as_slice(), &[3.0, 1.0, 1.0, 0.25]);
        assert_eq!(v.dim(), 4);
        assert!((v.norm() - (9.0f64 + 1.0 + 1.0 + 0.0625).sqrt()).abs() < 1e-6);
    }
}
