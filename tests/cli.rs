//! CLI end-to-end tests against the fixture rows of a schema file.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const SCHEMA: &str = r#"
profile: full
models:
  - table: t
    attributes:
      - col_name: val
        name: Value
        description: Test value
        settings:
          mandatory: true
    rows:
      - { id: 1, val: 5 }
      - { id: 2, val: 10 }
      - { id: 3, val: null }
"#;

fn schema_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp schema");
    file.write_all(SCHEMA.as_bytes()).expect("write temp schema");
    file
}

fn execute(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_metamodels-numeric"))
        .args(args)
        .env("RUST_LOG", "metamodels_numeric=debug")
        .env_remove("METAMODELS_MYSQL_URI")
        .output()
        .expect("run metamodels-numeric")
}

fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn filter(schema: &NamedTempFile, op: &str, value: &str) -> Vec<i64> {
    let path = schema.path().to_str().unwrap();
    let output = execute(&["filter", "--schema", path, "--attribute", "t.val", op, value]);
    assert_cli_success(&output, &format!("filter {op} {value}"));
    serde_json::from_slice(&output.stdout).expect("ids as JSON")
}

#[test]
fn test_filter_scenario() {
    let schema = schema_file();
    assert_eq!(filter(&schema, "gt", "5"), vec![2]);
    assert_eq!(filter(&schema, "ge", "5"), vec![1, 2]);
    assert_eq!(filter(&schema, "le", "10"), vec![1, 2]);
    assert_eq!(filter(&schema, "ne", "5"), vec![2]);
    assert_eq!(filter(&schema, "lt", "-1"), Vec::<i64>::new());
}

#[test]
fn test_filter_non_numeric_value() {
    let schema = schema_file();
    assert_eq!(filter(&schema, "gt", "abc"), filter(&schema, "gt", "0"));
}

#[test]
fn test_describe() {
    let schema = schema_file();
    let path = schema.path().to_str().unwrap();
    let output = execute(&[
        "describe",
        "--schema",
        path,
        "--attribute",
        "t.val",
        "--override",
        "inputType=select",
        "--override",
        "eval.tl_class=w50",
    ]);
    assert_cli_success(&output, "describe");

    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["storage_type"], "int(10) NULL default NULL");
    assert_eq!(out["field_definition"]["inputType"], "text");
    assert_eq!(out["field_definition"]["eval"]["rgxp"], "digit");
    assert_eq!(out["field_definition"]["eval"]["tl_class"], "w50");
    assert_eq!(out["field_definition"]["eval"]["mandatory"], true);
    assert_eq!(out["field_definition"]["label"][0], "Value");

    let names: Vec<String> = serde_json::from_value(out["setting_names"].clone()).unwrap();
    assert!(names.ends_with(&[
        "mandatory".to_string(),
        "filterable".to_string(),
        "searchable".to_string(),
        "sortable".to_string(),
        "flag".to_string(),
    ]));
}

#[test]
fn test_describe_ignores_fixture_rows() {
    let mut schema = NamedTempFile::new().expect("create temp schema");
    schema
        .write_all(SCHEMA.replace("val: 10", "val: abc").as_bytes())
        .expect("write temp schema");
    let path = schema.path().to_str().unwrap();

    let output = execute(&["describe", "--schema", path, "--attribute", "t.val"]);
    assert_cli_success(&output, "describe with invalid fixture rows");
    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["storage_type"], "int(10) NULL default NULL");

    let output = execute(&["filter", "--schema", path, "--attribute", "t.val", "gt", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not an integer"), "{stderr}");
}

#[test]
fn test_describe_reduced_profile() {
    let schema = schema_file();
    let path = schema.path().to_str().unwrap();
    let output = execute(&[
        "describe",
        "--schema",
        path,
        "--attribute",
        "t.val",
        "--profile",
        "reduced",
    ]);
    assert_cli_success(&output, "describe --profile reduced");

    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<String> = serde_json::from_value(out["setting_names"].clone()).unwrap();
    assert_eq!(names.last().map(String::as_str), Some("searchable"));
    assert!(!names.iter().any(|n| n == "flag"));
}

#[test]
fn test_unknown_attribute_fails() {
    let schema = schema_file();
    let path = schema.path().to_str().unwrap();
    let output = execute(&["filter", "--schema", path, "--attribute", "t.nope", "gt", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Attribute 'nope' not found in model 't'"), "{stderr}");
}

#[test]
fn test_missing_schema_file_fails() {
    let output = execute(&[
        "filter",
        "--schema",
        "/nonexistent/schema.yaml",
        "--attribute",
        "t.val",
        "gt",
        "1",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load schema"), "{stderr}");
}
