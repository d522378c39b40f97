use assert_cmd::Command;

/// Helper to get a Command for the hardscore binary.
#[allow(deprecated)]
fn hardscore_cmd() -> Command {
    Command::cargo_bin("hardscore").unwrap()
}

#[test]
fn help_works() {
    hardscore_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_works() {
    hardscore_cmd().args(["check", "--help"]).assert().success();
}
