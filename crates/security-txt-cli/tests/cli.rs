use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("security-txt.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn generate_writes_both_files_and_reports_them() {
    let temp = TempDir::new().expect("tempdir");
    write_config(
        &temp,
        "contact = \"mailto:security@example.com\"\nexpires = \"2026-12-31T23:59:59Z\"\n",
    );

    let mut cmd = Command::cargo_bin("security-txt").unwrap();
    cmd.current_dir(temp.path()).arg("generate");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✅").count(2));

    let well_known = temp.path().join("public/.well-known/security.txt");
    let root = temp.path().join("public/security.txt");
    assert_eq!(
        fs::read_to_string(well_known).expect("read well-known copy"),
        "Contact: mailto:security@example.com\nExpires: 2026-12-31T23:59:59Z\n"
    );
    assert_eq!(
        fs::read_to_string(root).expect("read root copy"),
        "Contact: mailto:security@example.com\nExpires: 2026-12-31T23:59:59Z\n"
    );
}

#[test]
fn generate_warns_when_expires_is_missing() {
    let temp = TempDir::new().expect("tempdir");
    write_config(&temp, "contact = \"mailto:security@example.com\"\n");

    let mut cmd = Command::cargo_bin("security-txt").unwrap();
    cmd.current_dir(temp.path()).arg("generate");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("expires"));
}

#[test]
fn generate_fails_without_contact() {
    let temp = TempDir::new().expect("tempdir");
    write_config(&temp, "expires = \"2026-12-31T23:59:59Z\"\n");

    let mut cmd = Command::cargo_bin("security-txt").unwrap();
    cmd.current_dir(temp.path()).arg("generate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at least one contact field"));
}

#[test]
fn generate_honours_explicit_output_directory() {
    let temp = TempDir::new().expect("tempdir");
    write_config(&temp, "contact = \"mailto:security@example.com\"\n");

    let mut cmd = Command::cargo_bin("security-txt").unwrap();
    cmd.current_dir(temp.path())
        .args(["generate", "--out", "site/static"]);

    cmd.assert().success();
    assert!(temp
        .path()
        .join("site/static/.well-known/security.txt")
        .is_file());
}

#[test]
fn show_prints_the_document() {
    let temp = TempDir::new().expect("tempdir");
    let config = write_config(
        &temp,
        "contact = [\"mailto:a@b.com\", \"https://example.com/contact\"]\n",
    );

    let mut cmd = Command::cargo_bin("security-txt").unwrap();
    cmd.arg("show").arg("--config").arg(config);

    cmd.assert().success().stdout(predicate::eq(
        "Contact: mailto:a@b.com\nContact: https://example.com/contact\n",
    ));
}

#[test]
fn check_fails_for_invalid_configuration() {
    let temp = TempDir::new().expect("tempdir");
    let config = write_config(&temp, "expires = \"not a timestamp\"\n");

    let mut cmd = Command::cargo_bin("security-txt").unwrap();
    cmd.arg("check").arg("--config").arg(config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("contact"))
        .stderr(predicate::str::contains("not a timestamp"));
}

#[test]
fn check_passes_for_valid_configuration() {
    let temp = TempDir::new().expect("tempdir");
    let config = write_config(
        &temp,
        "contact = \"mailto:a@b.com\"\nexpires = \"2099-12-31T23:59:59Z\"\n",
    );

    let mut cmd = Command::cargo_bin("security-txt").unwrap();
    cmd.arg("check").arg("--config").arg(config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn missing_config_file_is_reported() {
    let temp = TempDir::new().expect("tempdir");

    let mut cmd = Command::cargo_bin("security-txt").unwrap();
    cmd.current_dir(temp.path()).arg("show");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unable to load configuration"));
}
