//! Catalog summaries for selection widgets and charts
use crate::pipeline::PipelineHandle;
use dishx_core::{Error, Result};
use serde::Serialize;

pub const DEFAULT_HISTOGRAM_BINS: usize = 10;
pub const MAX_HISTOGRAM_BINS: usize = 1000;

/// Distinct values a user can pick from, in first-seen catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogOptions {
    pub cities: Vec<String>,
    pub cuisines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

pub fn options(handle: &PipelineHandle) -> CatalogOptions {
    let encoder = handle.encoder();
    CatalogOptions {
        cities: encoder.cities().values().to_vec(),
        cuisines: encoder.cuisines().values().to_vec(),
    }
}

/// Equal-width histogram of average cost over the fitted [min, max] range.
///
/// A zero-width range collapses into one bin holding every record.
pub fn cost_histogram(handle: &PipelineHandle, bins: usize) -> Result<Vec<HistogramBin>> {
    if bins == 0 {
        return Err(Error::InvalidConfig("histogram needs at least one bin".to_string()));
    }
    if bins > MAX_HISTOGRAM_BINS {
        return Err(Error::InvalidConfig(format!(
            "histogram supports at most {MAX_HISTOGRAM_BINS} bins, got {bins}"
        )));
    }
    if handle.is_empty() {
        return Ok(Vec::new());
    }

    let scaler = handle.encoder().cost_scaler();
    let (min, max) = (scaler.min(), scaler.max());

    if scaler.is_degenerate() {
        return Ok(vec![HistogramBin { lower: min, upper: max, count: handle.len() }]);
    }

    let width = (max - min) / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: if i + 1 == bins { max } else { min + (i + 1) as f64 * width },
            count: 0,
        })
        .collect();

    for record in handle.records() {
        let slot = (((record.average_cost - min) / width).floor() as usize).min(bins - 1);
        histogram[slot].count += 1;
    }

    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::build_pipeline;
    use dishx_core::RawRecord;

    #[test]
    fn test_options_first_seen_order() {
        let handle = build_pipeline(&[
            RawRecord::new("A", "Pune", "Cafe", true, 100.0, 4.0),
            RawRecord::new("B", "Goa", "Seafood", true, 200.0, 4.0),
            RawRecord::new("C", "Pune", "Bakery", false, 300.0, 4.0),
        ])
        .unwrap();

        let opts = options(&handle);
        assert_eq!(opts.cities, vec!["Pune", "Goa"]);
        assert_eq!(opts.cuisines, vec!["Cafe", "Seafood", "Bakery"]);
    }

    #[test]
    fn test_histogram_counts() {
        let raws: Vec<RawRecord> = [100.0, 150.0, 550.0, 1000.0, 1000.0]
            .iter()
            .enumerate()
            .map(|(i, cost)| RawRecord::new(format!("R{i}"), "Pune", "Cafe", true, *cost, 4.0))
            .collect();
        let handle = build_pipeline(&raws).unwrap();

        let histogram = cost_histogram(&handle, DEFAULT_HISTOGRAM_BINS).unwrap();
        assert_eq!(histogram.len(), 10);
        assert_eq!(histogram[0].count, 2);
        assert_eq!(histogram[5].count, 1);
        assert_eq!(histogram[9].count, 2);
        assert_eq!(histogram.iter().map(|b| b.count).sum::<usize>(), 5);
        assert_eq!(histogram[0].lower, 100.0);
        assert_eq!(histogram[9].upper, 1000.0);
    }

    #[test]
    fn test_histogram_degenerate_range() {
        let handle = build_pipeline(&[
            RawRecord::new("A", "Pune", "Cafe", true, 300.0, 4.0),
            RawRecord::new("B", "Goa", "Cafe", true, 300.0, 4.0),
        ])
        .unwrap();

        let histogram = cost_histogram(&handle, 4).unwrap();
        assert_eq!(histogram, vec![HistogramBin { lower: 300.0, upper: 300.0, count: 2 }]);
    }

    #[test]
    fn test_histogram_zero_bins() {
        let handle = build_pipeline(&[RawRecord::new("A", "Pune", "Cafe", true, 300.0, 4.0)]).unwrap();
        assert!(matches!(cost_histogram(&handle, 0), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_histogram_bin_limit() {
        let handle = build_pipeline(&[
            RawRecord::new("A", "Pune", "Cafe", true, 100.0, 4.0),
            RawRecord::new("B", "Goa", "Cafe", true, 900.0, 4.0),
        ])
        .unwrap();

        let widest = cost_histogram(&handle, MAX_HISTOGRAM_BINS).unwrap();
        assert_eq!(widest.len(), MAX_HISTOGRAM_BINS);

        for bins in [MAX_HISTOGRAM_BINS + 1, usize::MAX] {
            assert!(matches!(cost_histogram(&handle, bins), Err(Error::InvalidConfig(_))));
        }
    }
}
