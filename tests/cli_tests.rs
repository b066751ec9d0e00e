#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const DOC: &str = "<root><foo><bar>0</bar><baz>0</baz></foo><foo><bar>1</bar><baz>0</baz></foo></root>";

fn cmd() -> Command {
    Command::cargo_bin("xpathlite").expect("binary builds")
}

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_nodes_from_stdin() {
    cmd()
        .args(["-p", "root/foo[bar=1]"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("<foo><bar>1</bar><baz>0</baz></foo>\n");
}

#[test]
fn test_nodes_from_file() {
    let file = input_file(DOC);
    cmd()
        .arg(file.path())
        .args(["--path", "root/foo/bar/text()"])
        .assert()
        .success()
        .stdout("0\n1\n");
}

#[test]
fn test_several_paths() {
    cmd()
        .args(["-p", "root/foo[bar=0]/baz/text()", "-p", "root/zzz"])
        .args(["-p", "root/foo[bar=1]/bar/text()"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("0\n1\n");
}

#[test]
fn test_number_modes() {
    cmd()
        .args(["-p", "root/foo/bar/text()", "-m", "numbers"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("0\n1\n");

    cmd()
        .args(["-p", "root/a/text()", "--mode", "number"])
        .write_stdin("<root><a>2.5</a></root>")
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn test_string_mode_on_element_is_empty() {
    cmd()
        .args(["-p", "root/foo", "-m", "string"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_pretty_output() {
    cmd()
        .args(["-p", "r", "--pretty"])
        .write_stdin("<r><a>1</a><b><c></c></b></r>")
        .assert()
        .success()
        .stdout("<r>\n  <a>1</a>\n  <b>\n    <c></c>\n  </b>\n</r>\n");
}

#[test]
fn test_output_file() {
    let out = NamedTempFile::new().unwrap();
    cmd()
        .args(["-p", "root/foo/baz/text()", "-m", "any", "-o"])
        .arg(out.path())
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(out.path()).unwrap(), "0\n");
}

#[test]
fn test_malformed_document_fails() {
    cmd()
        .args(["-p", "a"])
        .write_stdin("<a><b></a>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("closing element b not found"));
}

#[test]
fn test_malformed_path_fails() {
    cmd()
        .args(["-p", "a[=c]"])
        .write_stdin("<a></a>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to compile path a[=c]"));
}

#[test]
fn test_depth_limit_flag() {
    cmd()
        .args(["-p", "a", "--max-depth", "1"])
        .write_stdin("<a><b></b></a>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max depth exceeded"));
}

#[test]
fn test_path_is_required() {
    cmd().write_stdin(DOC).assert().failure();
}
