use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str], api_key_env: Option<&str>) -> Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_geo-seed"));
    cmd.args(args).env_remove("API_KEY").env_remove("RUST_LOG");
    if let Some(key) = api_key_env {
        cmd.env("API_KEY", key);
    }
    Ok(cmd.output()?)
}

fn write_seed(dir: &TempDir, seed: serde_json::Value) -> Result<String> {
    let path = dir.path().join("seed_geo.json");
    std::fs::write(&path, serde_json::to_vec(&seed)?)?;
    Ok(path.to_str().unwrap().to_string())
}

#[test]
fn test_successful_run_prints_status_and_done() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let countries_mock = server.mock(|when, then| {
        when.method(POST).path("/countries/bulk");
        then.status(201).json_body(json!({"created": 1}));
    });

    let seed = write_seed(&temp_dir, json!({"countries": [{"name": "X"}]}))?;
    let output = run_cli(&["--base-url", &server.base_url(), "--file", &seed], None)?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    countries_mock.assert();
    assert!(output.status.success());
    assert!(stdout.contains("/countries/bulk: status=201"));
    assert!(stdout.contains("\"created\": 1"));
    assert!(stdout.contains("Skip /states/bulk: no items"));
    assert!(stdout.contains("Skip /cities/bulk: no items"));
    assert!(stdout.trim_end().ends_with("Done seeding."));
    Ok(())
}

#[test]
fn test_api_key_falls_back_to_environment() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let keyed_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cities/bulk")
            .header("x-api-key", "from-env");
        then.status(200).body("ok");
    });

    let seed = write_seed(&temp_dir, json!({"cities": [{"name": "Y"}]}))?;
    let output = run_cli(&["--base-url", &server.base_url(), "--file", &seed], Some("from-env"))?;

    keyed_mock.assert();
    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_flag_overrides_environment_key() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let keyed_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cities/bulk")
            .header("x-api-key", "from-flag");
        then.status(200).body("ok");
    });

    let seed = write_seed(&temp_dir, json!({"cities": [{"name": "Y"}]}))?;
    let output = run_cli(
        &["--base-url", &server.base_url(), "--file", &seed, "--api-key", "from-flag"],
        Some("from-env"),
    )?;

    keyed_mock.assert();
    assert!(output.status.success());
    Ok(())
}

#[test]
fn test_server_error_exits_non_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/countries/bulk");
        then.status(500).body("boom");
    });

    let seed = write_seed(&temp_dir, json!({"countries": [{"name": "X"}]}))?;
    let output = run_cli(&["--base-url", &server.base_url(), "--file", &seed], None)?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("500"));
    assert!(stderr.contains("boom"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Done seeding."));
    Ok(())
}

#[test]
fn test_malformed_seed_exits_with_input_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("seed_geo.json");
    std::fs::write(&path, "not json")?;

    let output = run_cli(
        &["--base-url", "http://127.0.0.1:1", "--file", path.to_str().unwrap()],
        None,
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse seed file"));
    Ok(())
}

#[test]
fn test_missing_base_url_is_a_usage_error() -> Result<()> {
    let output = run_cli(&["--file", "seed_geo.json"], None)?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--base-url"));
    Ok(())
}

#[test]
fn test_dry_run_with_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let any_mock = server.mock(|when, then| {
        when.any_request();
        then.status(201);
    });

    let seed = write_seed(&temp_dir, json!({"states": [{"name": "S"}]}))?;
    let config_path = temp_dir.path().join("geo_seed.toml");
    std::fs::write(
        &config_path,
        format!("base_url = \"{}/\"\nfile = \"{}\"\n", server.base_url(), seed.replace('\\', "/")),
    )?;

    let output = run_cli(&["--config", config_path.to_str().unwrap(), "--dry-run"], None)?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    any_mock.assert_hits(0);
    assert!(output.status.success());
    assert!(stdout.contains(&format!(
        "/states/bulk: would post 1 records to {}",
        server.url("/states/bulk")
    )));
    assert!(!stdout.contains("Done seeding."));
    Ok(())
}
