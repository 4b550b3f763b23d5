use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn converts_stdin_to_stdout() {
    let mut cmd = Command::cargo_bin("tagson").unwrap();
    cmd.write_stdin("<employee id=\"1\"><name>Alex</name></employee>")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "{\"employee\":{\"id\":\"1\",\"name\":\"Alex\"}}\n",
        ));
}

#[test]
fn no_attributes_flag_drops_attributes() {
    let mut cmd = Command::cargo_bin("tagson").unwrap();
    cmd.arg("--no-attributes")
        .write_stdin("<employee id=\"1\"></employee>")
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"employee\":\"\"}\n"));
}

#[test]
fn reads_input_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "<a><b>x</b></a>").unwrap();

    let mut cmd = Command::cargo_bin("tagson").unwrap();
    cmd.arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"a\":{\"b\":\"x\"}}\n"));
}

#[test]
fn writes_output_file() {
    let output = NamedTempFile::new().unwrap();

    let mut cmd = Command::cargo_bin("tagson").unwrap();
    cmd.arg("-o")
        .arg(output.path())
        .write_stdin("<role>Software Dev</role>")
        .assert()
        .success();

    let written = std::fs::read_to_string(output.path()).unwrap();
    assert_eq!(written, "{\"role\":\"Software Dev\"}");
}

#[test]
fn fails_on_malformed_input() {
    let mut cmd = Command::cargo_bin("tagson").unwrap();
    cmd.write_stdin("<employee><name></employee>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to convert input"));
}

#[test]
fn fails_on_empty_stdin() {
    let mut cmd = Command::cargo_bin("tagson").unwrap();
    cmd.write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided"));
}
