use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use image::{Rgb, RgbImage};

fn run_with_answers(working_dir: &Path, answers: &str) -> Output {
    let binary = env!("CARGO_BIN_EXE_watermark-manager");
    let mut child = Command::new(binary)
        .current_dir(working_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start watermark-manager");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(answers.as_bytes())
        .unwrap();
    // dropping stdin closes it, so the program sees end of input after the last answer
    child
        .wait_with_output()
        .expect("watermark-manager did not exit")
}

fn setup() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("img")).unwrap();
    RgbImage::from_pixel(64, 48, Rgb([30, 60, 90]))
        .save(dir.path().join("img/test.png"))
        .unwrap();
    RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]))
        .save(dir.path().join("img/logo.png"))
        .unwrap();
    dir
}

#[test]
fn test_decline_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_with_answers(dir.path(), "n\n");

    assert!(result.status.success());
    assert!(dir.path().join("img").is_dir());
    assert!(dir.path().join("images").is_dir());
    assert_eq!(
        std::fs::read_dir(dir.path().join("images")).unwrap().count(),
        0
    );
}

#[test]
fn test_text_watermark_succeeds() {
    let dir = setup();
    // ready, file, text watermark, brighten, text, then end of input at the next welcome
    let result = run_with_answers(dir.path(), "y\ntest.png\n1\ny\n1\n(c) me\n");

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("Text watermark added successfully."));
    assert!(dir.path().join("images/test-with-watermark.png").exists());
}

#[test]
fn test_image_watermark_succeeds() {
    let dir = setup();
    let result = run_with_answers(dir.path(), "y\ntest.png\n2\nn\nlogo.png\n");

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("Image watermark added successfully."));

    let written = image::open(dir.path().join("images/test-with-watermark.png"))
        .unwrap()
        .to_rgb8();
    assert_eq!(written.dimensions(), (64, 48));
    // corner untouched, center lightened by the half-transparent white logo
    assert_eq!(written.get_pixel(0, 0).0, [30, 60, 90]);
    assert!(written.get_pixel(32, 24)[0] > 100);
}

#[test]
fn test_missing_input_reports_generic_error() {
    let dir = setup();
    let result = run_with_answers(dir.path(), "y\nnope.jpg\n1\n");

    // no second welcome question, and a failing status for scripts
    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8(result.stdout.clone()).unwrap();
    assert_eq!(stdout.matches("Are you ready?").count(), 1);
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert!(stderr.contains("Something went wrong... Try again."));
    assert!(dir.path().join("images").is_dir());
    assert_eq!(
        std::fs::read_dir(dir.path().join("images")).unwrap().count(),
        0
    );
}

#[test]
fn test_help() {
    let binary = env!("CARGO_BIN_EXE_watermark-manager");
    let result = Command::new(binary)
        .arg("--help")
        .output()
        .expect("watermark-manager did not exit");

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("invert image"));
    assert!(stdout.contains("Image watermark"));
}
