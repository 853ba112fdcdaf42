//! Integration test: load bundles from disk and classify URLs end to end.

mod common;

use phishguard_core::bundle::{BundleError, BundleFormatError, ModelBundle};
use phishguard_core::inference::{predict, Label};
use phishguard_core::{extract, FEATURE_COLUMNS};
use serde_json::json;

const THRESHOLD: f64 = 0.464;

#[test]
fn leaf_only_bundle_scores_one_half() {
    let file = common::write_bundle(&common::coin_flip_bundle());
    let bundle = ModelBundle::load(file.path()).unwrap();

    let r = predict(&bundle, "http://example.com", THRESHOLD, false).unwrap();
    assert!((r.probability - 0.5).abs() < 1e-12);
    assert_eq!(r.label, Label::Phishing);
    assert_eq!(r.features.len(), FEATURE_COLUMNS.len());

    // same bundle, stricter threshold
    let r = predict(&bundle, "http://example.com", 0.6, false).unwrap();
    assert_eq!(r.label, Label::Legit);
}

#[test]
fn scaler_and_split_separate_query_urls() {
    let mut doc = common::query_bundle(0.0);
    doc["best_iteration"] = json!(1);
    let file = common::write_bundle(&doc);
    let bundle = ModelBundle::load(file.path()).unwrap();

    let r = predict(&bundle, "http://example.com/login?user=1", THRESHOLD, true).unwrap();
    assert!((r.probability - common::sigmoid(2.0)).abs() < 1e-12);
    assert_eq!(r.label, Label::Phishing);

    let r = predict(&bundle, "example.com/", THRESHOLD, false).unwrap();
    assert!((r.probability - common::sigmoid(-2.0)).abs() < 1e-12);
    assert_eq!(r.label, Label::Legit);
}

#[test]
fn best_iteration_truncates_rounds() {
    let all_rounds = common::write_bundle(&common::query_bundle(3.0));
    let bundle = ModelBundle::load(all_rounds.path()).unwrap();
    let r = predict(&bundle, "example.com", THRESHOLD, false).unwrap();
    assert!((r.probability - common::sigmoid(1.0)).abs() < 1e-12);

    let mut doc = common::query_bundle(3.0);
    doc["best_iteration"] = json!(1);
    let first_round = common::write_bundle(&doc);
    let bundle = ModelBundle::load(first_round.path()).unwrap();
    let r = predict(&bundle, "example.com", THRESHOLD, false).unwrap();
    assert!((r.probability - common::sigmoid(-2.0)).abs() < 1e-12);
}

#[test]
fn isotonic_calibration_clips_or_falls_back() {
    let mut doc = common::query_bundle(0.0);
    doc["calibrator"] = json!({ "kind": "isotonic", "x": [0.2, 0.8], "y": [0.1, 0.9] });
    let file = common::write_bundle(&doc);
    let bundle = ModelBundle::load(file.path()).unwrap();
    // raw sigmoid(2.0) is above the last breakpoint and clips to 0.9
    let r = predict(&bundle, "http://example.com/?q=1", THRESHOLD, false).unwrap();
    assert!((r.probability - 0.9).abs() < 1e-12);

    doc["calibrator"]["out_of_bounds"] = json!("raise");
    let file = common::write_bundle(&doc);
    let bundle = ModelBundle::load(file.path()).unwrap();
    // the calibrator refuses, so the raw probability is used
    let r = predict(&bundle, "http://example.com/?q=1", THRESHOLD, false).unwrap();
    assert!((r.probability - common::sigmoid(2.0)).abs() < 1e-12);
}

#[test]
fn platt_calibration_applies() {
    let mut doc = common::coin_flip_bundle();
    doc["calibrator"] = json!({ "kind": "sigmoid", "a": -4.0, "b": 0.0 });
    let file = common::write_bundle(&doc);
    let bundle = ModelBundle::load(file.path()).unwrap();
    let r = predict(&bundle, "example.com", THRESHOLD, false).unwrap();
    assert!((r.probability - common::sigmoid(2.0)).abs() < 1e-12);
}

#[test]
fn scaler_referencing_unknown_column_fails_at_predict() {
    let doc = json!({
        "preprocessor": {
            "kind": "standard_scaler",
            "columns": ["url_length", "domain_age_days"],
            "mean": [0.0, 0.0],
            "scale": [1.0, 1.0]
        },
        "booster": {
            "kind": "tree_ensemble",
            "num_features": 2,
            "trees": [ { "leaf_value": [0.0] } ]
        }
    });
    let file = common::write_bundle(&doc);
    let bundle = ModelBundle::load(file.path()).unwrap();
    let err = predict(&bundle, "example.com", THRESHOLD, false).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("domain_age_days"), "{msg}");
    assert!(msg.contains("url_length"), "{msg}");
}

#[test]
fn bundle_without_booster_is_rejected() {
    let file = common::write_bundle(&json!({ "preprocessor": { "kind": "identity" } }));
    match ModelBundle::load(file.path()) {
        Err(BundleError::Format(BundleFormatError::MissingField(field))) => {
            assert_eq!(field, "booster")
        }
        other => panic!("expected missing booster, got {other:?}"),
    }
}

#[test]
fn features_are_stable_across_predictions() {
    let file = common::write_bundle(&common::coin_flip_bundle());
    let bundle = ModelBundle::load(file.path()).unwrap();
    let url = "https://secure-1122.paypal.com.verify-account.xyz/signin?session=99#top";
    let a = predict(&bundle, url, THRESHOLD, false).unwrap();
    let b = predict(&bundle, url, THRESHOLD, false).unwrap();
    assert_eq!(a.features, b.features);
    assert_eq!(a.features, extract(url));
    assert_eq!(a.probability, b.probability);
}
