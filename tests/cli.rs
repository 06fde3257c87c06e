#![cfg(feature = "cli")]
use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn run_fixture(stem: &str, extra_args: &[&str]) -> String {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join(format!("{stem}.json"));
    let output_path = dir.path().join(format!("{stem}.types"));

    // Load schema and copy into tmpdir
    let schema = fs::read_to_string(format!("tests/fixtures/avro/{stem}.json")).unwrap();
    fs::write(&input_path, schema).unwrap();

    // Run CLI
    let mut cmd = Command::cargo_bin("avro2types").unwrap();
    cmd.arg(input_path.to_str().unwrap())
        .arg(output_path.to_str().unwrap());
    for arg in extra_args {
        cmd.arg(arg);
    }
    cmd.assert().success();

    fs::read_to_string(&output_path).unwrap()
}

#[test]
fn generates_flow_by_default() {
    let output = run_fixture("person", &[]);
    assert!(output.starts_with("// @flow\n"));
    assert!(output.contains("export type Person = {|"));
    assert!(output.ends_with("export type AvroType = Person;\n"));
}

#[test]
fn generates_typescript_on_request() {
    let output = run_fixture("person", &["--target", "typescript"]);
    assert!(!output.contains("@flow"));
    assert!(output.contains("export type Person_Tags_Map = Record<string, string>;"));
}

#[test]
fn unwraps_primitives_on_request() {
    let output = run_fixture("person", &["--no-wrap-primitives"]);
    assert!(output.contains("export type Person_Measure = null | number;"));
}

#[test]
fn renames_the_root_declaration() {
    let output = run_fixture("person", &["--root-name", "Human"]);
    assert!(output.contains("export type Human = {|"));
    assert!(output.ends_with("export type AvroType = Human;\n"));
}

#[test]
fn reports_invalid_names_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("invalid_name.json");
    let output_path = dir.path().join("invalid_name.types");
    let schema = fs::read_to_string("tests/fixtures/avro/invalid_name.json").unwrap();
    fs::write(&input_path, schema).unwrap();

    let output = Command::cargo_bin("avro2types")
        .unwrap()
        .arg(input_path.to_str().unwrap())
        .arg(output_path.to_str().unwrap())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("'Some name' is not a valid avro name"));
    assert!(!output_path.exists());
}
