#![allow(unused_crate_dependencies)]

use std::{fs, path::Path};

use duct::cmd;
use indoc::indoc;
use serde_json::{json, Value};
use tempfile::tempdir;

const BINARY: &str = env!("CARGO_BIN_EXE_minigraph");

fn run(dir: &Path, args: &[&str]) -> Value {
    let mut all_args = vec!["--config", "minigraph.toml", "--log", "off"];
    all_args.extend_from_slice(args);

    let output = cmd(BINARY, all_args)
        .dir(dir)
        .env_remove("MINIGRAPH_LOG")
        .env_remove("MINIGRAPH_LOG_STYLE")
        .env_remove("MINIGRAPH_DATASET_PATH")
        .env_remove("MINIGRAPH_CONFIG_PATH")
        .stdout_capture()
        .stderr_capture()
        .run()
        .unwrap();

    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn query_against_demo_data() {
    let dir = tempdir().unwrap();

    let response = run(dir.path(), &["--query", r#"{ coffee(id: "coffee1") { name price } }"#]);

    assert_eq!(json!({ "data": { "coffee": { "name": "Latte", "price": 3.99 } } }), response);
}

#[test]
fn request_from_stdin() {
    let dir = tempdir().unwrap();

    let output = cmd!(BINARY, "--config", "minigraph.toml", "--log", "off")
        .dir(dir.path())
        .env_remove("MINIGRAPH_LOG")
        .env_remove("MINIGRAPH_LOG_STYLE")
        .env_remove("MINIGRAPH_DATASET_PATH")
        .env_remove("MINIGRAPH_CONFIG_PATH")
        .stdin_bytes(r#"{ customer(id: "cust3") { name orders { id } } }"#)
        .stdout_capture()
        .run()
        .unwrap();

    let response: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(
        json!({ "data": { "customer": { "name": "Charlie", "orders": [{ "id": "order4" }] } } }),
        response
    );
}

#[test]
fn dataset_and_error_mode_from_config() {
    let dir = tempdir().unwrap();

    fs::write(
        dir.path().join("beans.json"),
        r#"{ "items": [{ "id": "b1", "name": "Geisha", "price": 12.5, "origin": "Panama" }] }"#,
    )
    .unwrap();

    fs::write(
        dir.path().join("minigraph.toml"),
        indoc! {r#"
            [engine]
            error_mode = "strict"

            [dataset]
            path = "beans.json"
        "#},
    )
    .unwrap();

    fs::write(dir.path().join("request.graphql"), r#"{ item(id: "b1") { name } coffee(id: "coffee1") { name } }"#).unwrap();

    let response = run(dir.path(), &["--file", "request.graphql"]);

    assert_eq!(json!({ "item": { "name": "Geisha" } }), response["data"]);
    assert_eq!(json!("NOT_FOUND"), response["errors"][0]["extensions"]["code"]);
    assert_eq!(json!(["coffee"]), response["errors"][0]["path"]);
}

#[test]
fn strict_flag() {
    let dir = tempdir().unwrap();

    let lenient = run(dir.path(), &["--query", "{ menu }"]);
    let strict = run(dir.path(), &["--strict", "--query", "{ menu }"]);

    assert_eq!(json!({ "data": {} }), lenient);
    assert_eq!(json!("UNKNOWN_FIELD"), strict["errors"][0]["extensions"]["code"]);
}

#[test]
fn demo_requests() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["--demo"]);
    let demos = output.as_array().unwrap();

    assert_eq!(4, demos.len());
    assert_eq!(
        json!({
            "data": {
                "allCoffees": [{ "name": "Latte" }, { "name": "Espresso" }, { "name": "Cappuccino" }]
            }
        }),
        demos[3]["response"]
    );
    assert_eq!(
        vec!["latte", "espresso", "cappuccino"],
        demos[2]["response"]["data"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
    );
}

#[test]
fn invalid_dataset_is_reported() {
    let dir = tempdir().unwrap();

    fs::write(
        dir.path().join("beans.toml"),
        indoc! {r#"
            [[items]]
            id = "b1"
            name = "Geisha"
            price = -1.0
            origin = "Panama"
        "#},
    )
    .unwrap();

    let output = cmd!(BINARY, "--log", "off", "--dataset", "beans.toml", "--query", "{ allItems { id } }")
        .dir(dir.path())
        .env_remove("MINIGRAPH_LOG")
        .env_remove("MINIGRAPH_LOG_STYLE")
        .env_remove("MINIGRAPH_DATASET_PATH")
        .env_remove("MINIGRAPH_CONFIG_PATH")
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid dataset beans.toml"), "{stderr}");
}
