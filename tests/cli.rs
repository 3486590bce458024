//! End-to-end tests for the stackcalc binary

#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;

fn stackcalc() -> Command {
    let mut cmd = Command::cargo_bin("stackcalc").unwrap();
    cmd.env_remove("STACKCALC_SEPARATOR").env_remove("STACKCALC_LOG");
    cmd
}

#[test]
fn postfix() {
    stackcalc()
        .args(["postfix", "A+B*C"])
        .assert()
        .success()
        .stdout("ABC*+\n");
}

#[test]
fn prefix() {
    stackcalc()
        .args(["prefix", "(A+B)*C"])
        .assert()
        .success()
        .stdout("*+ABC\n");
}

#[test]
fn separator_from_flag_and_env() {
    stackcalc()
        .args(["--separator", " ", "postfix", "12+34"])
        .assert()
        .success()
        .stdout("12 34 +\n");
    stackcalc()
        .env("STACKCALC_SEPARATOR", ",")
        .args(["prefix", "a^b^c"])
        .assert()
        .success()
        .stdout("^,a,^,b,c\n");
}

#[test]
fn json_output() {
    stackcalc()
        .args(["--json", "postfix", "A^B^C"])
        .assert()
        .success()
        .stdout("{\"success\":true,\"result\":\"ABC^^\"}\n");
}

#[test]
fn malformed_expression_fails() {
    stackcalc()
        .args(["postfix", "(A+B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mismatched parentheses"));
    stackcalc()
        .args(["prefix", "A+B#C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown symbol '#'"));
}

#[test]
fn calc_from_argument() {
    stackcalc()
        .args([
            "calc",
            r#"{"operation":"circle_area","inputs":{"radius":2}}"#,
        ])
        .assert()
        .success()
        .stdout("{\"success\":true,\"result\":12.57}\n");
}

#[test]
fn calc_from_stdin() {
    stackcalc()
        .arg("calc")
        .write_stdin(r#"{"operation":"infix_to_prefix","inputs":{"expression":"A-B-C"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\":\"--ABC\""));
}

#[test]
fn failed_calc_prints_the_response() {
    stackcalc()
        .arg("calc")
        .write_stdin(r#"{"operation":"average","inputs":{"numbers":[]}}"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\":false"));
}

#[test]
fn subcommand_is_required() {
    stackcalc().assert().failure();
}
