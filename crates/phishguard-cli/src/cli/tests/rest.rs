//! Tests for features, bundle-info, serve, completions and bundle resolution.

use super::{parse, parse_err};
use crate::cli::{resolve_bundle_path, CliCommand, OutputFormat};
use clap_complete::Shell;
use phishguard_core::config::PhishguardConfig;
use std::path::{Path, PathBuf};

#[test]
fn cli_parse_features() {
    match parse(&["phishguard", "features", "example.com", "--format", "json"]) {
        CliCommand::Features { url, format } => {
            assert_eq!(url, "example.com");
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("expected Features"),
    }
}

#[test]
fn cli_parse_bundle_info() {
    match parse(&["phishguard", "bundle-info", "-b", "model.json"]) {
        CliCommand::BundleInfo { bundle, format } => {
            assert_eq!(bundle.as_deref(), Some(Path::new("model.json")));
            assert_eq!(format, OutputFormat::Text);
        }
        _ => panic!("expected BundleInfo"),
    }
}

#[test]
fn cli_parse_serve() {
    match parse(&["phishguard", "serve"]) {
        CliCommand::Serve {
            bundle,
            bind,
            threshold,
        } => {
            assert!(bundle.is_none());
            assert!(bind.is_none());
            assert!(threshold.is_none());
        }
        _ => panic!("expected Serve"),
    }
    match parse(&["phishguard", "serve", "--bind", "0.0.0.0:5000", "-t", "0.464"]) {
        CliCommand::Serve {
            bind, threshold, ..
        } => {
            assert_eq!(bind.as_deref(), Some("0.0.0.0:5000"));
            assert_eq!(threshold, Some(0.464));
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["phishguard", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
    parse_err(&["phishguard", "completions", "cmd.exe"]);
}

#[test]
fn cli_parse_unknown_subcommand() {
    parse_err(&["phishguard", "download", "x.com"]);
}

#[test]
fn bundle_flag_wins_over_config() {
    let cfg = PhishguardConfig {
        bundle_path: Some(PathBuf::from("/etc/phishguard/model.json")),
        ..PhishguardConfig::default()
    };
    let path = resolve_bundle_path(Some(PathBuf::from("local.json")), &cfg).unwrap();
    assert_eq!(path, PathBuf::from("local.json"));
    let path = resolve_bundle_path(None, &cfg).unwrap();
    assert_eq!(path, PathBuf::from("/etc/phishguard/model.json"));
}

#[test]
fn bundle_must_come_from_somewhere() {
    let err = resolve_bundle_path(None, &PhishguardConfig::default()).unwrap_err();
    assert!(err.to_string().contains("--bundle"), "{err}");
}

#[test]
fn only_model_commands_read_config() {
    assert!(!parse(&["phishguard", "features", "example.com"]).needs_config());
    assert!(!parse(&["phishguard", "completions", "zsh"]).needs_config());
    assert!(parse(&["phishguard", "predict", "example.com"]).needs_config());
    assert!(parse(&["phishguard", "bundle-info"]).needs_config());
    assert!(parse(&["phishguard", "serve"]).needs_config());
}

#[tokio::test]
async fn features_runs_without_a_bundle() {
    parse(&["phishguard", "features", "example.com", "--format", "json"])
        .run()
        .await
        .unwrap();
}
