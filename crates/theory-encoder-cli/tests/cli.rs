use assert_cmd::Command;
use std::io::Write;

fn smt_encode() -> Command {
    Command::cargo_bin("smt-encode").unwrap()
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn encodes_valid_statements_and_reports_the_rest() {
    let output = smt_encode()
        .arg("tests/inputs/schedule.toml")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "(assert (= a1 (<= (- |start(b)| |start(a)|) (- 3))))\n\
         (assert (= a3 (and (<= 0 x) (<= x 9))))\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ArityViolation"));
    assert!(stderr.contains("statement: a2 (diff)"));
}

#[test]
fn fail_on_error_exits_with_failure() {
    let output = smt_encode()
        .args(["tests/inputs/schedule.toml", "--fail-on-error"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    // valid statements are still printed
    assert_eq!(stdout_of(&output).lines().count(), 2);
}

#[test]
fn preamble_from_config_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "logic = \"qf_idl\"\nemit_preamble = true").unwrap();

    let output = smt_encode()
        .arg("tests/inputs/schedule.toml")
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("(set-logic QF_IDL)\n(declare-fun a1 () Bool)\n"));
    assert!(stdout.contains("(declare-fun |start(a)| () Int)\n"));
}

#[test]
fn unknown_logic_is_rejected() {
    smt_encode()
        .args(["tests/inputs/schedule.toml", "--logic", "QF_LRA"])
        .assert()
        .failure();
}
