//! Tests for clean-mode arguments and runs.

use super::parse;
use crate::cli::{Cli, ModeArg, PolicyArg};
use blc_core::engine::Operation;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_defaults_to_clean_by_domain() {
    let cli = parse(&["blc", "links.txt"]);
    assert_eq!(cli.input_file, Path::new("links.txt"));
    assert_eq!(cli.mode, ModeArg::Domain);
    assert!(cli.output.is_none());
    assert!(cli.compare.is_none());
    assert!(cli.path_policy.is_none());
    assert!(!cli.new_only);
    assert_eq!(cli.operation(), Operation::CleanByDomain);
}

#[test]
fn cli_parse_clean_by_url_with_output() {
    let cli = parse(&["blc", "links.txt", "--mode", "url", "--output", "/tmp/out.txt"]);
    assert_eq!(cli.mode, ModeArg::Url);
    assert_eq!(cli.output.as_deref(), Some(Path::new("/tmp/out.txt")));
    assert_eq!(cli.operation(), Operation::CleanByUrl);
}

#[test]
fn cli_parse_path_policy() {
    let cli = parse(&["blc", "links.txt", "--path-policy", "strip"]);
    assert_eq!(cli.path_policy, Some(PolicyArg::Strip));
    let cli = parse(&["blc", "links.txt", "--path-policy", "trailing-slash"]);
    assert_eq!(cli.path_policy, Some(PolicyArg::TrailingSlash));
}

#[test]
fn cli_rejects_unknown_mode() {
    assert!(Cli::try_parse_from(["blc", "links.txt", "--mode", "host"]).is_err());
}

#[test]
fn cli_requires_input_file() {
    assert!(Cli::try_parse_from(["blc"]).is_err());
}

#[test]
fn cli_new_only_requires_compare() {
    assert!(Cli::try_parse_from(["blc", "links.txt", "--new-only"]).is_err());
}

#[test]
fn cli_run_clean_writes_output_with_policy_override() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("links.txt");
    let output = dir.path().join("clean.txt");
    let cfg = dir.path().join("config.toml");
    std::fs::write(&input, "http://x.com/a\nhttp://x.com/a/\nHTTP://X.COM/A\n").unwrap();
    std::fs::write(&cfg, "path_policy = \"trailing-slash\"\n").unwrap();

    let cli = parse(&[
        "blc",
        input.to_str().unwrap(),
        "--mode",
        "url",
        "--output",
        output.to_str().unwrap(),
        "--path-policy",
        "strip",
        "--config",
        cfg.to_str().unwrap(),
    ]);
    cli.run().unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "http://x.com/a");
}

#[test]
fn cli_run_clean_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.txt");
    let cfg = dir.path().join("config.toml");
    std::fs::write(&cfg, "").unwrap();

    let cli = parse(&[
        "blc",
        input.to_str().unwrap(),
        "--config",
        cfg.to_str().unwrap(),
    ]);
    let err = cli.run().unwrap_err();

    assert!(format!("{err:#}").contains("file not found"));
    assert!(!dir.path().join("absent_bersih_domain.txt").exists());
}
