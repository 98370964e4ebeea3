//! End-to-end runs of the kube-pass-auth binary
#![cfg(unix)]

use std::path::Path;
use std::process::{Command, Output};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tempfile::TempDir;

/// Run the binary with `cat` standing in for `pass`.
///
/// `cat show <entry>` prints the entry file because `show` is an empty file
/// in the working directory.
fn run_with_cat(dir: &Path, args: &[&str]) -> Output {
    std::fs::write(dir.join("show"), "").unwrap();
    let config = dir.join("config.json");
    std::fs::write(&config, r#"{"pass_program": "cat"}"#).unwrap();

    Command::new(env!("CARGO_BIN_EXE_kube-pass-auth"))
        .args(args)
        .arg("--config")
        .arg(&config)
        .current_dir(dir)
        .env_remove("KUBE_PASS_AUTH_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_pem_credential() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("admin"),
        format!(
            "client-certificate-data: {}\nclient-key-data: {}\n",
            STANDARD.encode("CERT"),
            STANDARD.encode("KEY")
        ),
    )
    .unwrap();

    let output = run_with_cat(tmp.path(), &["pem", "admin"]);
    assert_eq!(output.status.code(), Some(0));

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["apiVersion"], "client.authentication.k8s.io/v1beta1");
    assert_eq!(value["kind"], "ExecCredential");
    assert_eq!(value["status"]["clientCertificateData"], "CERT");
    assert_eq!(value["status"]["clientKeyData"], "KEY");
}

#[test]
fn test_token_credential() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("ci"),
        format!(
            "token: {}\nexpirationTimestamp: {}\n",
            STANDARD.encode("abc123"),
            STANDARD.encode("2025-01-01T00:00:00Z")
        ),
    )
    .unwrap();

    let output = run_with_cat(tmp.path(), &["token", "ci"]);
    assert_eq!(output.status.code(), Some(0));

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"]["token"], "abc123");
    assert_eq!(value["status"]["expirationTimestamp"], "2025-01-01T00:00:00Z");
}

#[test]
fn test_missing_fields_prints_nothing_to_stdout() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("partial"),
        format!("client-certificate-data: {}\n", STANDARD.encode("CERT")),
    )
    .unwrap();

    let output = run_with_cat(tmp.path(), &["pem", "partial"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("client-key-data"));
}

#[test]
fn test_unreadable_secret() {
    let tmp = TempDir::new().unwrap();
    let output = run_with_cat(tmp.path(), &["pem", "absent"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_argument_errors() {
    let tmp = TempDir::new().unwrap();

    assert_eq!(run_with_cat(tmp.path(), &[]).status.code(), Some(2));
    assert_eq!(run_with_cat(tmp.path(), &["pem"]).status.code(), Some(3));
    assert_eq!(run_with_cat(tmp.path(), &["cert", "admin"]).status.code(), Some(5));
}

#[test]
fn test_extra_argument_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    let output = run_with_cat(tmp.path(), &["pem", "admin", "extra"]);

    assert_eq!(output.status.code(), Some(9));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_kube-pass-auth"))
        .arg("--help")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("PASS_ENTRY"));
}

#[test]
fn test_debug_logs_stay_off_stdout() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("show"), "").unwrap();
    std::fs::write(
        tmp.path().join("ci"),
        format!("token: {}\n", STANDARD.encode("abc123")),
    )
    .unwrap();
    let config = tmp.path().join("config.json");
    std::fs::write(&config, r#"{"pass_program": "cat"}"#).unwrap();

    let verbose = Command::new(env!("CARGO_BIN_EXE_kube-pass-auth"))
        .args(["-v", "token", "ci", "--config"])
        .arg(&config)
        .current_dir(tmp.path())
        .env_remove("KUBE_PASS_AUTH_LOG")
        .output()
        .unwrap();

    let from_env = Command::new(env!("CARGO_BIN_EXE_kube-pass-auth"))
        .args(["token", "ci", "--config"])
        .arg(&config)
        .current_dir(tmp.path())
        .env("KUBE_PASS_AUTH_LOG", "debug")
        .output()
        .unwrap();

    for output in [verbose, from_env] {
        assert_eq!(output.status.code(), Some(0));
        assert!(!output.stderr.is_empty());

        let value: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["status"]["token"], "abc123");
    }
}

#[test]
fn test_missing_pass_program() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.json");
    std::fs::write(&config, r#"{"pass_program": "kube-pass-auth-no-such-binary"}"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_kube-pass-auth"))
        .args(["token", "ci", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7));
    assert!(output.stdout.is_empty());
}
