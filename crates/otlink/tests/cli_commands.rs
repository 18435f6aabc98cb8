#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn otlink(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_otlink"))
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("otlink binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be utf-8")
}

#[test]
fn decode_prints_frame_fields_as_json() {
    let output = otlink(&["--format", "json", "decode", "0x80190000"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("\"frame\":\"80190000\""), "stdout: {out}");
    assert!(out.contains("\"msg_type\":\"READ_DATA\""), "stdout: {out}");
    assert!(out.contains("\"data_id\":25"), "stdout: {out}");
    assert!(out.contains("\"data_id_name\":\"BoilerTemperature\""), "stdout: {out}");
    assert!(out.contains("\"parity_ok\":true"), "stdout: {out}");
}

#[test]
fn decode_rejects_malformed_hex() {
    let output = otlink(&["decode", "not-hex"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn encode_setpoint_write_matches_reference_frame() {
    // WRITE_DATA, id 1, 37.5 °C. Six set bits, so parity stays clear.
    let output = otlink(&[
        "--format",
        "raw",
        "encode",
        "ControlSetpoint",
        "--msg-type",
        "write-data",
        "--temperature",
        "37.5",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "10012580");
}

#[test]
fn encode_and_decode_round_trip() {
    let encoded = otlink(&["--format", "raw", "encode", "25"]);
    assert!(encoded.status.success());
    let frame = stdout(&encoded).trim().to_string();

    let decoded = otlink(&["--format", "json", "decode", &frame]);
    assert!(decoded.status.success());
    assert!(stdout(&decoded).contains("\"data_id_name\":\"BoilerTemperature\""));
}

#[test]
fn ids_lists_the_data_id_table() {
    let output = otlink(&["--format", "pretty", "ids"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("0 Status"), "stdout: {out}");
    assert!(out.contains("25 BoilerTemperature"), "stdout: {out}");
    assert!(out.contains("127 SlaveVersion"), "stdout: {out}");
}

#[test]
fn simulate_auto_reply_succeeds() {
    let output = otlink(&["--format", "json", "simulate", "0x80190000"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("\"response_outcome\":\"SUCCESS\""), "stdout: {out}");
}

#[test]
fn simulate_silent_slave_exits_with_timeout_code() {
    let output = otlink(&["--format", "json", "simulate", "0x80190000", "--silent"]);
    assert_eq!(output.status.code(), Some(124));
    let out = stdout(&output);
    assert!(out.contains("\"response_outcome\":\"TIMEOUT\""), "stdout: {out}");
}

#[test]
fn version_prints_package_version() {
    let output = otlink(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("otlink "));
}
