//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn multiples() -> Command {
    let mut cmd = Command::cargo_bin("multiples").expect("binary not found");
    cmd.env_remove("MULTIPLES_TOTAL")
        .env_remove("MULTIPLES_REST_PORT");
    cmd
}

#[test]
fn help_flag() {
    multiples()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multiples"));
}

#[test]
fn version_flag() {
    multiples()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("multiples"));
}

#[test]
fn concurrent_three_up_to_twenty() {
    multiples()
        .args(["--total", "20", "--multiples", "3", "--algo", "concurrent", "-q"])
        .assert()
        .success()
        .stdout("63\n");
}

#[test]
fn one_loop_below_ten() {
    multiples()
        .args(["-t", "10", "-m", "3,5", "--algo", "one-loop", "-q"])
        .assert()
        .success()
        .stdout("23\n");
}

#[test]
fn all_algorithms_print_both_sums() {
    multiples()
        .args(["-t", "20", "-m", "5", "--algo", "all", "-q"])
        .assert()
        .success()
        .stdout("30\n50\n");
}

#[test]
fn comparison_table_in_normal_mode() {
    multiples()
        .args(["-t", "10", "-m", "3,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results"))
        .stdout(predicate::str::contains("OneLoop"))
        .stdout(predicate::str::contains("Concurrent"));
}

#[test]
fn empty_multiples_are_zero() {
    multiples()
        .args(["-t", "10", "--algo", "all", "-q"])
        .assert()
        .success()
        .stdout("0\n0\n");
}

#[test]
fn closed_form_with_capped_pool() {
    multiples()
        .args([
            "-t",
            "1000000",
            "-m",
            "3,5,7,11",
            "--algo",
            "concurrent",
            "--strategy",
            "closed-form",
            "--max-workers",
            "2",
            "-q",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}

#[test]
fn zero_multiple_fails_with_config_exit_code() {
    multiples()
        .args(["-t", "10", "-m", "3,0", "--algo", "concurrent"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn invalid_algo() {
    multiples()
        .args(["-t", "10", "-m", "3", "--algo", "invalid"])
        .assert()
        .code(4);
}

#[test]
fn deadline_exceeded_exit_code() {
    multiples()
        .args([
            "-t",
            "4611686018427387903",
            "-m",
            "1,2",
            "--algo",
            "concurrent",
            "--timeout",
            "10ms",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("deadline"));
}

#[test]
fn bash_completion() {
    multiples()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--multiples"));
}

#[test]
fn one_loop_deadline_exceeded_exit_code() {
    multiples()
        .args([
            "-t",
            "4611686018427387903",
            "-m",
            "1",
            "--algo",
            "one-loop",
            "--timeout",
            "10ms",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("deadline"));
}

#[test]
fn empty_multiples_with_huge_total_return_immediately() {
    multiples()
        .args(["-t", "18446744073709551615", "--algo", "one-loop", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn malformed_timeout_is_rejected() {
    multiples()
        .args(["-t", "10", "-m", "3", "--timeout", "5min"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn oversized_timeout_is_rejected_without_panicking() {
    multiples()
        .args(["-t", "10", "-m", "3", "--timeout", "999999999999999999m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"))
        .stderr(predicate::str::contains("panicked").not());
}
