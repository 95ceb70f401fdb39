//! Binary-level tests for startup configuration handling

use assert_cmd::Command;
use predicates::prelude::*;

/// Command with credentials set and every logging variable cleared
fn ingest_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shopsync-ingest").unwrap();
    cmd.env("SHOPIFY_SHOP", "http://127.0.0.1:9")
        .env("SHOPIFY_ACCESS_TOKEN", "shpat_test")
        .env("MOOSE_BASE_URL", "http://127.0.0.1:9")
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_FORMAT")
        .env_remove("LOG_FILTER")
        .env_remove("LOG_INCLUDE_TARGETS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_invalid_log_filter_is_fatal_before_fetch() {
    ingest_cmd()
        .env("LOG_FILTER", "reqwest=shouting")
        .args(["--resource", "orders", "--verbose"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid logging configuration"))
        .stderr(predicate::str::contains("filter directive"))
        .stderr(predicate::str::contains("starting").not());
}

#[test]
fn test_invalid_log_level_is_fatal_before_fetch() {
    ingest_cmd()
        .env("LOG_LEVEL", "loud")
        .arg("--verbose")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid log level: loud"))
        .stderr(predicate::str::contains("starting").not());
}

#[test]
fn test_missing_credentials_exit_with_failure() {
    ingest_cmd()
        .env_remove("SHOPIFY_ACCESS_TOKEN")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SHOPIFY_ACCESS_TOKEN is not set"));
}
