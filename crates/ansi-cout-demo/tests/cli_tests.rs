//! End-to-end checks of the demo binary's stdout bytes and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn demo() -> Command {
    let mut cmd = Command::cargo_bin("ansi-cout-demo").expect("binary built");
    cmd.env_remove("RUST_LOG")
        .env_remove("ANSI_COUT_LOG")
        .env_remove("ANSI_COUT_ON_WRITE_FAILURE")
        .env_remove("ANSI_COUT_AUTO_FLUSH");
    cmd
}

#[test]
fn test_move_default_count() {
    demo().args(["move", "up"]).assert().success().stdout("\x1b[1A");
}

#[test]
fn test_move_with_count() {
    demo()
        .args(["move", "backward", "12"])
        .assert()
        .success()
        .stdout("\x1b[12D");
}

#[test]
fn test_position_unterminated() {
    demo()
        .args(["position", "3", "7"])
        .assert()
        .success()
        .stdout("\x1b[3;7");
}

#[test]
fn test_save_restore_erase() {
    demo().arg("save").assert().success().stdout("\x1b[s");
    demo().arg("restore").assert().success().stdout("\x1b[u");
    demo()
        .args(["erase", "display"])
        .assert()
        .success()
        .stdout("\x1b[2J");
    demo().args(["erase", "line"]).assert().success().stdout("\x1b[K");
}

#[test]
fn test_color_both_planes() {
    demo()
        .args(["color", "--fg", "red", "--bg", "blue"])
        .assert()
        .success()
        .stdout("\x1b[41m\x1b[34m");
}

#[test]
fn test_attr_joined() {
    demo()
        .args(["attr", "bold", "underscore"])
        .assert()
        .success()
        .stdout("\x1b[1;4m");
}

#[test]
fn test_sgr_empty_resets() {
    demo().arg("sgr").assert().success().stdout("\x1b[m");
}

#[test]
fn test_mode_set_and_reset() {
    demo()
        .args(["mode", "set", "7"])
        .assert()
        .success()
        .stdout("\x1b[=7h");
    demo()
        .args(["mode", "reset", "3"])
        .assert()
        .success()
        .stdout("\x1b[=3l");
}

#[test]
fn test_unknown_mode_is_usage_error() {
    demo()
        .args(["mode", "set", "12"])
        .assert()
        .code(64)
        .stdout("")
        .stderr(predicate::str::contains("Unknown screen mode 12"));
}

#[test]
fn test_palette_ends_with_reset() {
    demo()
        .arg("palette")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\x1b[47mwhite   \x1b[0m")
                .and(predicate::str::contains("\x1b[5mblink\x1b[0m"))
                .and(predicate::str::ends_with("\x1b[m")),
        );
}

#[test]
fn test_unknown_attribute_rejected() {
    demo()
        .args(["attr", "italic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown attribute 'italic'"));
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    demo()
        .args(["save", "--verbose"])
        .assert()
        .success()
        .stdout("\x1b[s");
}

// =============================================================================
// Error paths
// =============================================================================

#[test]
fn test_failed_command_flushes_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("demo.log");

    demo()
        .env("ANSI_COUT_LOG", &log)
        .args(["mode", "set", "12"])
        .assert()
        .code(64);

    let written = std::fs::read_to_string(&log).unwrap();
    assert!(!written.is_empty());
    assert!(written.contains("Unknown screen mode 12"), "{written}");
}

#[test]
fn test_verbose_success_logs_to_file_only() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("demo.log");

    demo()
        .env("ANSI_COUT_LOG", &log)
        .args(["-v", "restore"])
        .assert()
        .success()
        .stdout("\x1b[u")
        .stderr("");

    let written = std::fs::read_to_string(&log).unwrap();
    assert!(written.contains("running"), "{written}");
}

#[cfg(target_os = "linux")]
mod full_device {
    use std::fs::OpenOptions;
    use std::process::Command as StdCommand;

    use assert_cmd::cargo::cargo_bin;
    use assert_cmd::prelude::*;
    use predicates::prelude::*;

    fn demo_into_full_device(args: &[&str]) -> StdCommand {
        let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
        let mut cmd = StdCommand::new(cargo_bin("ansi-cout-demo"));
        cmd.args(args)
            .env_remove("RUST_LOG")
            .env_remove("ANSI_COUT_LOG")
            .env_remove("ANSI_COUT_ON_WRITE_FAILURE")
            .env_remove("ANSI_COUT_AUTO_FLUSH")
            .stdout(full);
        cmd
    }

    #[test]
    fn test_palette_ignore_write_errors_exits_zero() {
        demo_into_full_device(&["palette", "--ignore-write-errors"])
            .assert()
            .success();
    }

    #[test]
    fn test_palette_write_failure_exits_ioerr() {
        demo_into_full_device(&["palette"])
            .assert()
            .code(74)
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_completions_write_failure_exits_ioerr() {
        demo_into_full_device(&["completions", "bash"])
            .assert()
            .code(74)
            .stderr(predicate::str::contains("panicked").not());
    }
}
