//! End-to-end tests for the print-formats binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn print_formats() -> Command {
    let mut cmd = Command::cargo_bin("print-formats").unwrap();
    cmd.env_remove("USE_IMAGEMAGICK")
        .env_remove("PRINT_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_formats_without_config_lists_pdf_only() {
    print_formats()
        .arg("formats")
        .assert()
        .success()
        .stdout("pdf\n");
}

#[test]
fn test_formats_json_with_wildcard() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "server.toml", "formats = [\"*\"]\n");

    print_formats()
        .args(["formats", "--json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"["bmp","gif","jpeg","jpg","pdf","png","svg","tif","tiff"]"#,
        ));
}

#[test]
fn test_select_default_is_pdf() {
    print_formats()
        .arg("select")
        .assert()
        .success()
        .stdout(predicate::str::contains("PdfOutput"))
        .stdout(predicate::str::contains("application/pdf"));
}

#[test]
fn test_select_image_from_spec() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "server.json", r#"{"formats": ["pdf", "png"]}"#);
    let spec = write_config(&dir, "request.json", r#"{"outputFormat": "PNG", "dpi": 254}"#);

    print_formats()
        .arg("select")
        .arg("--config")
        .arg(&config)
        .arg("--spec")
        .arg(&spec)
        .assert()
        .success()
        .stdout(predicate::str::contains("ScalableImageOutput"))
        .stdout(predicate::str::contains("image/png"));
}

#[test]
fn test_select_unsupported_format_exits_with_user_error() {
    print_formats()
        .args(["select", "--format", "png"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "png is not a supported format. Supported formats: pdf",
        ));
}

#[test]
fn test_select_pdf_not_permitted_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "server.yaml", "formats:\n  - png\n");

    print_formats()
        .args(["select", "--format", "pdf", "--config"])
        .arg(&config)
        .assert()
        .code(70)
        .stderr(predicate::str::contains("There must be a format that can output PDF"));
}

#[test]
fn test_providers_lists_registry_order() {
    print_formats()
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)PdfProvider.*ScalableImageProvider.*ImageProvider").unwrap());
}

#[test]
fn test_imagemagick_flag_registers_provider() {
    print_formats()
        .env("IMAGEMAGICK_CMD", "definitely-not-an-imagemagick-binary")
        .args(["providers", "--imagemagick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ImageMagickProvider"))
        .stdout(predicate::str::contains("disabled"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    print_formats()
        .arg("formats")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_missing_spec_file_names_path() {
    let dir = TempDir::new().unwrap();
    print_formats()
        .arg("select")
        .arg("--spec")
        .arg(dir.path().join("request.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("request.json"));
}

#[test]
fn test_blank_output_format_in_spec_is_rejected() {
    let dir = TempDir::new().unwrap();
    let spec = write_config(&dir, "request.json", r#"{"outputFormat": ""}"#);

    print_formats()
        .arg("select")
        .arg("--spec")
        .arg(&spec)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a supported format"));
}
