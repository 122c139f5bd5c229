// Integration tests for DishX
use dishx::prelude::*;
use dishx::{cost_histogram, options, FeatureEncoder, EncodingTable, FeatureField, SIMILAR_LIMIT};
use serde_json::json;
use std::io::Write;

fn scenario_catalog() -> Vec<RawRecord> {
    vec![
        RawRecord::new("A", "NYC", "Italian", true, 200.0, 4.1),
        RawRecord::new("B", "NYC", "Italian", true, 220.0, 4.4),
        RawRecord::new("C", "LA", "Thai", false, 800.0, 3.8),
    ]
}

fn varied_catalog() -> Vec<RawRecord> {
    let cities = ["Delhi", "Mumbai", "Pune", "Goa"];
    let cuisines = ["North Indian", "Chinese", "Cafe", "Seafood", "Italian"];
    (0..40)
        .map(|i| {
            RawRecord::new(
                format!("Restaurant {i}"),
                cities[i % cities.len()],
                cuisines[(i * 7) % cuisines.len()],
                i % 3 != 0,
                100.0 + ((i * 37) % 900) as f64,
                3.0 + (i % 20) as f64 / 10.0,
            )
        })
        .collect()
}

#[test]
fn test_filter_scenario() {
    let handle = build_pipeline(&scenario_catalog()).unwrap();
    let result: Vec<&str> = filter(&handle, "NYC", "Italian", true, 250.0)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(result, vec!["A", "B"]);
}

#[test]
fn test_similar_scenario() {
    let handle = build_pipeline(&scenario_catalog()).unwrap();
    let result = similar(&handle, "A").unwrap();

    // A encodes to the zero vector, so both scores are 0.0 and row order decides
    let ranked: Vec<(&str, f64)> = result.iter().map(|r| (r.name.as_str(), r.score)).collect();
    assert_eq!(ranked, vec![("B", 0.0), ("C", 0.0)]);
}

#[test]
fn test_similar_unknown_restaurant_is_not_found() {
    let handle = build_pipeline(&scenario_catalog()).unwrap();
    assert!(matches!(similar(&handle, "Z"), Err(Error::NotFound(_))));
}

#[test]
fn test_identical_costs_do_not_divide_by_zero() {
    let raws: Vec<RawRecord> = ["Delhi", "Pune", "Goa", "Delhi"]
        .iter()
        .enumerate()
        .map(|(i, city)| RawRecord::new(format!("R{i}"), *city, "Cafe", i % 2 == 0, 300.0, 4.0))
        .collect();
    let handle = build_pipeline(&raws).unwrap();

    let scaled: Vec<f64> = handle
        .features()
        .vectors()
        .iter()
        .map(|v| v.as_slice()[FeatureField::Cost.position()])
        .collect();
    assert!(scaled.iter().all(|s| *s == scaled[0] && s.is_finite()));

    for i in 0..handle.len() {
        for j in 0..handle.len() {
            assert!(handle.similarity().get(i, j).unwrap().is_finite());
        }
    }
}

#[test]
fn test_similarity_matrix_symmetric() {
    let handle = build_pipeline(&varied_catalog()).unwrap();
    let sim = handle.similarity();
    for i in 0..sim.len() {
        assert_eq!(sim.get(i, i), Some(1.0));
        for j in 0..sim.len() {
            let s = sim.get(i, j).unwrap();
            assert_eq!(s, sim.get(j, i).unwrap());
            assert!(s <= 1.0);
        }
    }
}

#[test]
fn test_filter_results_are_ordered_subset() {
    let handle = build_pipeline(&varied_catalog()).unwrap();
    let catalog = catalog_view(&handle);

    for (city, cuisine, delivery, max_price) in [
        ("Delhi", "North Indian", true, 600.0),
        ("Pune", "Cafe", false, 1000.0),
        ("Goa", "Seafood", true, 100.0),
        ("Atlantis", "Cafe", true, 1000.0),
    ] {
        let result = filter(&handle, city, cuisine, delivery, max_price);

        let mut last = None;
        for record in &result {
            let pos = catalog.iter().position(|c| std::ptr::eq(c, *record)).unwrap();
            assert!(last.map_or(true, |l| pos > l));
            last = Some(pos);

            assert_eq!(record.city, city);
            assert_eq!(record.cuisine, cuisine);
            assert_eq!(record.offers_delivery(), Some(delivery));
            assert!(record.average_cost <= max_price);
        }

        let expected = catalog
            .iter()
            .filter(|r| {
                r.city == city && r.cuisine == cuisine && r.offers_delivery() == Some(delivery) && r.average_cost <= max_price
            })
            .count();
        assert_eq!(result.len(), expected);
    }
}

#[test]
fn test_similar_excludes_self_and_is_sorted() {
    let handle = build_pipeline(&varied_catalog()).unwrap();
    for record in catalog_view(&handle) {
        let result = similar(&handle, &record.name).unwrap();
        assert_eq!(result.len(), SIMILAR_LIMIT);
        assert!(result.iter().all(|r| r.name != record.name));

        for pair in result.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let handle_a = build_pipeline(&varied_catalog()).unwrap();
    let handle_b = build_pipeline(&varied_catalog()).unwrap();
    assert_eq!(handle_a.encoder(), handle_b.encoder());
    assert_eq!(handle_a.features(), handle_b.features());
    assert_eq!(handle_a.similarity(), handle_b.similarity());

    let fitted = FeatureEncoder::fit(catalog_view(&handle_a));
    let table: &EncodingTable = fitted.table(FeatureField::City).unwrap();
    assert_eq!(table.values(), &["Delhi", "Mumbai", "Pune", "Goa"].map(String::from));
}

#[test]
fn test_missing_cost_is_data_error() {
    let mut raws = scenario_catalog();
    raws.push(serde_json::from_value(json!({"Restaurant": "D", "City": "SF", "Rating": 4.0})).unwrap());
    assert!(matches!(
        build_pipeline(&raws),
        Err(Error::Data(DataError::MissingField { row: 3, field: "Average_cost" }))
    ));
}

#[test]
fn test_manager_loads_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let body = serde_json::to_string(&scenario_catalog()).unwrap();
    file.write_all(body.as_bytes()).unwrap();

    let manager = CatalogManager::new();
    assert!(matches!(manager.handle(), Err(Error::NotReady)));

    manager.load_file(file.path()).unwrap();
    let handle = manager.handle().unwrap();
    assert_eq!(catalog_view(&handle).len(), 3);
    assert_eq!(catalog_view(&handle)[0].delivery, "Yes");

    let opts = options(&handle);
    assert_eq!(opts.cities, vec!["NYC", "LA"]);
    assert_eq!(cost_histogram(&handle, 10).unwrap().len(), 10);
}
