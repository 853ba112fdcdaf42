//! Tests for the predict command line.

use super::{parse, parse_err};
use crate::cli::{CliCommand, OutputFormat};
use std::path::Path;

#[test]
fn cli_parse_predict_minimal() {
    match parse(&["phishguard", "predict", "example.com"]) {
        CliCommand::Predict {
            url,
            bundle,
            threshold,
            format,
            verbose,
        } => {
            assert_eq!(url, "example.com");
            assert!(bundle.is_none());
            assert!(threshold.is_none());
            assert_eq!(format, OutputFormat::Text);
            assert!(!verbose);
        }
        _ => panic!("expected Predict"),
    }
}

#[test]
fn cli_parse_predict_all_flags() {
    match parse(&[
        "phishguard",
        "predict",
        "http://paypal.example.xyz/login",
        "--bundle",
        "/tmp/model.json",
        "--threshold",
        "0.7",
        "--format",
        "json",
        "--verbose",
    ]) {
        CliCommand::Predict {
            url,
            bundle,
            threshold,
            format,
            verbose,
        } => {
            assert_eq!(url, "http://paypal.example.xyz/login");
            assert_eq!(bundle.as_deref(), Some(Path::new("/tmp/model.json")));
            assert_eq!(threshold, Some(0.7));
            assert_eq!(format, OutputFormat::Json);
            assert!(verbose);
        }
        _ => panic!("expected Predict"),
    }
}

#[test]
fn cli_parse_predict_short_flags() {
    match parse(&["phishguard", "predict", "x.com", "-b", "m.json", "-t", "0", "-v"]) {
        CliCommand::Predict {
            bundle,
            threshold,
            verbose,
            ..
        } => {
            assert_eq!(bundle.as_deref(), Some(Path::new("m.json")));
            assert_eq!(threshold, Some(0.0));
            assert!(verbose);
        }
        _ => panic!("expected Predict"),
    }
}

#[test]
fn cli_parse_predict_rejects_bad_threshold() {
    parse_err(&["phishguard", "predict", "x.com", "--threshold", "1.5"]);
    parse_err(&["phishguard", "predict", "x.com", "--threshold", "high"]);
}

#[test]
fn cli_parse_predict_requires_url() {
    parse_err(&["phishguard", "predict"]);
}
