use std::{fs, process::Command};

use assert_cmd::cargo::cargo_bin;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn meth() -> Command {
    Command::new(cargo_bin("meth"))
}

#[test]
fn prints_log_output_then_result() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let script = temp.path().join("main.meth");
    fs::write(&script, "(load 'utils').log('hi', 1); return _0_.add('!');")?;

    let output = meth().arg(&script).arg("x").output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "hi 1\nx!\n");
    Ok(())
}

#[test]
fn prints_nothing_without_result() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let script = temp.path().join("main.meth");
    fs::write(&script, "x = 1;")?;

    let output = meth().arg(&script).output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "");
    Ok(())
}

#[test]
fn runtime_error_exits_with_status_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let script = temp.path().join("main.meth");
    fs::write(&script, "(load 'utils').log('before');\nx = 5; x();")?;

    let output = meth().arg(&script).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout)?, "before\n");
    assert!(String::from_utf8(output.stderr)?.contains("Error on line 2"));
    Ok(())
}

#[test]
fn missing_file_exits_with_status_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let output = meth().arg(temp.path().join("missing.meth")).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Failed to read the input file"));
    Ok(())
}
