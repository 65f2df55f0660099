// Command-line driver behaviour

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cedarc-{}-{}", std::process::id(), name))
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cedarc"))
        .args(args)
        .output()
        .expect("Failed to launch cedarc")
}

#[test]
fn test_output_file_written_on_success() {
    let input = scratch_path("ok.cedar");
    let output = scratch_path("ok.ll");
    fs::write(&input, r#"start echo "hi" end"#).unwrap();
    let _ = fs::remove_file(&output);

    let result = run(&[input.to_str().unwrap(), "-o", output.to_str().unwrap()]);

    assert!(result.status.success());
    let ir = fs::read_to_string(&output).expect("IR file missing");
    assert!(ir.contains("c\"hi\\00\""));
    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn test_no_output_file_on_failure() {
    let input = scratch_path("bad.cedar");
    let output = scratch_path("bad.ll");
    fs::write(&input, "start echo end").unwrap();
    let _ = fs::remove_file(&output);

    let result = run(&[input.to_str().unwrap(), "-o", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Expected string literal after 'echo'"));
    let _ = fs::remove_file(&input);
}

#[test]
fn test_unwritable_output_reports_error() {
    let input = scratch_path("unwritable.cedar");
    fs::write(&input, r#"start echo "hi" end"#).unwrap();
    let output = scratch_path("missing-dir").join("out.ll");

    let result = run(&[input.to_str().unwrap(), "-o", output.to_str().unwrap()]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Error: Failed to write"));
    let _ = fs::remove_file(&input);
}
