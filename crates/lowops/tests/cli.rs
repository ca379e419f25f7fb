//! End-to-end tests for the `lowops` binary.

use std::process::{Command, Output};

fn lowops(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lowops"))
        .args(args)
        .output()
        .expect("failed to run lowops")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn eval_prints_folded_value() {
    let output = lowops(&["eval", "int_floordiv_zer", "-7", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-4");

    let output = lowops(&["eval", "OP_UINT_SUB", "0", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), usize::MAX.to_string());
}

#[test]
fn eval_fault_exits_non_zero() {
    let output = lowops(&["eval", "int_mod_zer", "5", "0"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "ZeroDivisionError: integer modulo");

    let output = lowops(&["eval", "int_lshift_val", "1", "-1"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "ValueError: negative shift count");
}

#[test]
fn eval_mul_check_modes_agree() {
    for mode in ["widening", "float-approx"] {
        let output = lowops(&["eval", "--mul-check", mode, "llong_mul_ovf", "3037000499", "3037000499"]);
        assert!(output.status.success(), "{mode}");
        assert_eq!(stdout(&output), "9223372030926249001");

        let output = lowops(&["eval", "--mul-check", mode, "llong_mul_ovf", "3037000500", "3037000500"]);
        assert!(!output.status.success(), "{mode}");
        assert_eq!(stdout(&output), "OverflowError: integer multiplication");
    }
}

#[test]
fn eval_rejects_bad_requests() {
    let output = lowops(&["eval", "int_frobnicate", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown operation"));

    let output = lowops(&["eval", "int_add", "1"]);
    assert!(!output.status.success());
}

#[test]
fn list_filters_by_family() {
    let output = lowops(&["list", "--family", "cast"]);
    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.lines().all(|line| line.starts_with("cast_")));
    assert!(listing.contains("OP_CAST_FLOAT_TO_INT_OVF"));
}
