/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use chrono::{Duration, Utc};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Command running in `dir` with no certificate or FIPS variables inherited.
fn fips_cmd(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("fips-compliance");
    cmd.current_dir(dir)
        .env_remove("FIPS_CERTIFICATE_PATH")
        .env_remove("OPENSSL_FIPS")
        .env_remove("OPENSSL_CONF");
    cmd
}

/// Write a certificate expiring `days` from today (negative for the past).
fn write_certificate(dir: &Path, days: i64, algorithms: &[&str]) -> PathBuf {
    let expiry = Utc::now().date_naive() + Duration::days(days);
    let path = dir.join("certificate-4985.json");
    let document = serde_json::json!({
        "certificate_number": "4985",
        "validation_date": "2023-01-15",
        "expiry_date": expiry.format("%Y-%m-%d").to_string(),
        "status": "valid",
        "module_name": "OpenSSL FIPS Provider",
        "module_version": "3.0.8",
        "security_level": "Level 1",
        "algorithms": algorithms,
        "vendor": "OpenSSL Software Foundation",
        "validation_lab": "NIST CMVP"
    });
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}

fn write_valid_certificate(dir: &Path) -> PathBuf {
    write_certificate(
        dir,
        5 * 365,
        &["AES-GCM", "SHA-256", "RSA-2048", "ECDSA-P256"],
    )
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("fips-compliance").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("fips-compliance")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("fips-compliance")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("fips-compliance")
            .args(["-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 0: every check passes
    #[test]
    fn test_exit_code_compliant() {
        let dir = TempDir::new().unwrap();
        let certificate = write_valid_certificate(dir.path());

        fips_cmd(dir.path())
            .arg("--certificate")
            .arg(&certificate)
            .assert()
            .code(0);
    }

    /// Exit code 1: an expired certificate
    #[test]
    fn test_exit_code_expired_certificate() {
        let dir = TempDir::new().unwrap();
        let certificate = write_certificate(dir.path(), -1, &["AES-GCM"]);

        fips_cmd(dir.path())
            .arg("--certificate")
            .arg(&certificate)
            .assert()
            .code(1);
    }

    /// Exit code 1: the certificate exists but is malformed
    #[test]
    fn test_exit_code_malformed_certificate() {
        let dir = TempDir::new().unwrap();
        let certificate = dir.path().join("certificate.json");
        fs::write(&certificate, r#"{"certificate_number": "4985"}"#).unwrap();

        fips_cmd(dir.path())
            .arg("--certificate")
            .arg(&certificate)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Malformed certificate"));

        assert!(!dir.path().join("fips-compliance-report.json").exists());
    }
}

#[test]
fn test_e2e_compliant_run_writes_artifacts() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .assert()
        .success()
        .stderr(predicate::str::contains("Compliance status: COMPLIANT"));

    let report = read_json(&dir.path().join("fips-compliance-report.json"));
    assert_eq!(report["certificate_number"], "4985");
    assert_eq!(report["overall_status"], "COMPLIANT");
    for name in ["certificate", "module", "algorithms", "sbom"] {
        assert_eq!(report["validation_results"][name], "PASS");
    }

    let sbom = read_json(&dir.path().join("openssl-fips-sbom.json"));
    assert_eq!(sbom["bomFormat"], "CycloneDX");
    let component = &sbom["metadata"]["component"];
    assert_eq!(component["type"], "library");
    assert_eq!(component["purl"], "pkg:conan/openssl@4.0.0");
    assert_eq!(component["properties"][0]["name"], "fips:enabled");
    assert_eq!(component["properties"][0]["value"], "true");
    assert_eq!(component["properties"][1]["value"], "4985");
}

#[test]
fn test_e2e_json_summary_on_stdout() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());

    let output = fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .output()
        .unwrap();

    let stdout: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout["overall_status"], "COMPLIANT");
}

#[test]
fn test_e2e_markdown_summary() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# FIPS 140-3 Compliance Report"))
        .stdout(predicate::str::contains("| Security Level | Level 1 |"))
        .stdout(predicate::str::contains("**COMPLIANT**"));
}

#[test]
fn test_e2e_summary_to_output_file() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());
    let summary = dir.path().join("summary.md");

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .args(["-f", "md", "-o"])
        .arg(&summary)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(fs::read_to_string(summary)
        .unwrap()
        .contains("## Validation Results"));
}

#[test]
fn test_e2e_expired_certificate_still_reports() {
    let dir = TempDir::new().unwrap();
    let certificate = write_certificate(
        dir.path(),
        -1,
        &["AES-GCM", "SHA-256", "RSA-2048", "ECDSA-P256"],
    );

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .assert()
        .code(1);

    let report = read_json(&dir.path().join("fips-compliance-report.json"));
    assert_eq!(
        report["validation_results"]["certificate"],
        "FAIL: certificate expired"
    );
    assert_eq!(report["validation_results"]["module"], "PASS");
    assert_eq!(report["validation_results"]["algorithms"], "PASS");
    assert_eq!(report["validation_results"]["sbom"], "PASS");
    assert_eq!(report["overall_status"], "NON-COMPLIANT");
}

#[test]
fn test_e2e_declared_unapproved_algorithm() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .args(["-a", "MD5", "-a", "AES-GCM"])
        .assert()
        .code(1);

    let report = read_json(&dir.path().join("fips-compliance-report.json"));
    assert_eq!(
        report["validation_results"]["algorithms"],
        "FAIL: unapproved algorithms: MD5"
    );
    assert_eq!(report["validation_results"]["certificate"], "PASS");
}

#[test]
fn test_e2e_custom_allowlist() {
    let dir = TempDir::new().unwrap();
    let certificate = write_certificate(dir.path(), 365, &["AES-GCM", "SHA-384"]);

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .args([
            "--approved-algorithm",
            "AES-GCM",
            "--approved-algorithm",
            "SHA-384",
        ])
        .assert()
        .code(0);
}

#[test]
fn test_e2e_fallback_certificate() {
    let dir = TempDir::new().unwrap();

    fips_cmd(dir.path())
        .assert()
        .stderr(predicate::str::contains("No certificate found"))
        .stderr(predicate::str::contains("built-in certificate #4985"));

    let report = read_json(&dir.path().join("fips-compliance-report.json"));
    assert_eq!(report["certificate_number"], "4985");
    assert_eq!(
        report["validation_results"].as_object().unwrap().len(),
        4
    );
}

#[test]
fn test_e2e_certificate_from_environment() {
    let dir = TempDir::new().unwrap();
    let certificate = write_certificate(dir.path(), -10, &["AES-GCM"]);

    fips_cmd(dir.path())
        .env("FIPS_CERTIFICATE_PATH", &certificate)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Loaded certificate #4985"));
}

#[test]
fn test_e2e_require_certificate_rejects_fallback() {
    let dir = TempDir::new().unwrap();

    fips_cmd(dir.path())
        .args(["--certificate", "missing.json", "--require-certificate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Certificate source not found"));

    assert!(!dir.path().join("fips-compliance-report.json").exists());
}

#[test]
fn test_e2e_fips_mode_from_environment() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());

    fips_cmd(dir.path())
        .env("OPENSSL_FIPS", "0")
        .arg("--certificate")
        .arg(&certificate)
        .args(["--openssl-config", "/etc/ssl/fips.cnf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("FIPS mode: disabled"));

    let sbom = read_json(&dir.path().join("openssl-fips-sbom.json"));
    let properties = sbom["metadata"]["component"]["properties"]
        .as_array()
        .unwrap()
        .clone();
    assert!(properties.contains(&serde_json::json!({"name": "fips:enabled", "value": "true"})));
    assert!(properties.contains(&serde_json::json!({"name": "fips:mode", "value": "disabled"})));
    assert!(properties.contains(&serde_json::json!({"name": "fips:config", "value": "/etc/ssl/fips.cnf"})));
}

#[test]
fn test_e2e_module_digest_mismatch() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());
    let artifact = dir.path().join("fips.so");
    fs::write(&artifact, b"abc").unwrap();

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .arg("--module-path")
        .arg(&artifact)
        .args(["--module-sha256", &"0".repeat(64)])
        .assert()
        .code(1);

    let report = read_json(&dir.path().join("fips-compliance-report.json"));
    let module = report["validation_results"]["module"].as_str().unwrap();
    assert!(module.starts_with("FAIL: integrity check failed"));
}

#[test]
fn test_e2e_module_path_without_digest_fails() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .arg("--module-path")
        .arg(dir.path().join("missing-fips.so"))
        .assert()
        .code(1);

    let report = read_json(&dir.path().join("fips-compliance-report.json"));
    let module = report["validation_results"]["module"].as_str().unwrap();
    assert!(module.starts_with("FAIL: no expected SHA-256 configured"));
}

#[test]
fn test_e2e_module_digest_match() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());
    let artifact = dir.path().join("fips.so");
    fs::write(&artifact, b"abc").unwrap();

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .arg("--module-path")
        .arg(&artifact)
        .args([
            "--module-sha256",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ])
        .assert()
        .success();
}

#[test]
fn test_e2e_custom_artifact_paths() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .arg("--report")
        .arg(out.join("report.json"))
        .arg("--sbom")
        .arg(out.join("sbom.json"))
        .assert()
        .success();

    assert!(out.join("report.json").is_file());
    assert!(out.join("sbom.json").is_file());
    assert!(!dir.path().join("fips-compliance-report.json").exists());
}

#[test]
fn test_e2e_unwritable_report_destination() {
    let dir = TempDir::new().unwrap();
    let certificate = write_valid_certificate(dir.path());

    fips_cmd(dir.path())
        .arg("--certificate")
        .arg(&certificate)
        .args(["--report", "missing-dir/report.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write to file"));
}
