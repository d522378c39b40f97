use std::process::{Command, Output};

fn xtask(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .args(args)
        .output()
        .expect("run xtask")
}

#[test]
fn help_lists_commands() {
    let output = xtask(&["help"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
    assert!(stderr.contains("conform"));
}

#[test]
fn print_schema_ids() {
    let output = xtask(&["print-schema-ids"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "hardscore.report.v1\nhardscore.config.v1\n"
    );
}

#[test]
fn committed_schemas_are_current() {
    let output = xtask(&["validate-schemas"]);
    assert!(
        output.status.success(),
        "validate-schemas failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("All schemas are up to date."));
}

#[test]
fn contract_fixtures_conform() {
    let output = xtask(&["conform"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "conform failed:\n{stdout}\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("partial.json validates"));
}

#[test]
fn every_check_is_explained() {
    let output = xtask(&["explain-coverage"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("10 check IDs have explanations"));
}

#[test]
fn unknown_command_fails() {
    let output = xtask(&["frobnicate"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown xtask command: frobnicate"));
}
