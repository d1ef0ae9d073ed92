use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tsx-extract").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir_all(dir.path().join("src")).unwrap();
    for (relative, content) in files {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

#[test]
fn missing_src_is_reported() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("Error: src directory not found at"))
        .stdout(contains("Current directory:"));

    assert!(!dir.path().join("all_tsx_files.txt").exists());
}

#[test]
fn empty_src_is_reported() {
    let dir = project(&[("src/main.ts", "console.log(1);")]);

    cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("No .tsx files found in src directory."))
        .stdout(contains("Successfully created").not());

    assert!(!dir.path().join("all_tsx_files.txt").exists());
}

#[test]
fn combines_files_in_path_order() {
    let dir = project(&[
        ("src/sub/b.tsx", "export const B = 2;\n"),
        ("src/a.tsx", "export const A = 1;\n"),
    ]);

    cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("Found 2 .tsx files"))
        .stdout(contains("✓ Processed: src/a.tsx"))
        .stdout(contains("✓ Processed: src/sub/b.tsx"))
        .stdout(contains("📄 Combined 2 .tsx files into a single text file"))
        .stdout(contains("📊 File size:"));

    let output = fs::read_to_string(dir.path().join("all_tsx_files.txt")).unwrap();
    assert!(output.starts_with("=== EXTRACTED TSX FILES ===\n"));
    assert!(output.contains("Total files: 2\n"));

    let a = output.find("FILE: src/a.tsx ").unwrap();
    let b = output.find("FILE: src/sub/b.tsx ").unwrap();
    assert!(a < b);
    assert!(output.contains("export const A = 1;\n\n\n"));
}

#[test]
fn invalid_utf8_does_not_stop_the_run() {
    let dir = project(&[("src/a.tsx", "const ok = true;")]);
    fs::write(dir.path().join("src/bad.tsx"), [0x80, 0x81, 0x82]).unwrap();

    cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("✓ Processed: src/a.tsx"))
        .stdout(contains("Warning: Could not read src/bad.tsx (encoding issue)"))
        .stdout(contains("1 file(s) could not be read"));

    let output = fs::read_to_string(dir.path().join("all_tsx_files.txt")).unwrap();
    assert!(output.contains("const ok = true;"));
    assert!(output.contains("ERROR: Warning: Could not read src/bad.tsx (encoding issue)"));
}

#[test]
fn failed_file_is_reported_once() {
    let dir = project(&[("src/a.tsx", "const ok = true;")]);
    fs::write(dir.path().join("src/bad.tsx"), [0xff]).unwrap();

    let assert = cmd(dir.path()).assert().success();
    let out = assert.get_output();
    let terminal = format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );

    assert_eq!(terminal.matches("Could not read src/bad.tsx").count(), 1);
}

#[test]
fn overwrites_previous_output() {
    let dir = project(&[("src/App.tsx", "app")]);
    fs::write(dir.path().join("all_tsx_files.txt"), "stale").unwrap();

    cmd(dir.path()).assert().success();

    let output = fs::read_to_string(dir.path().join("all_tsx_files.txt")).unwrap();
    assert!(!output.contains("stale"));
    assert!(output.contains("FILE: src/App.tsx"));
}

#[test]
fn conflicting_log_flags_are_reported() {
    let dir = project(&[("src/App.tsx", "app")]);

    cmd(dir.path())
        .args(["--verbose", "--quiet"])
        .assert()
        .success()
        .stderr(contains("Cannot use both --verbose and --quiet"));

    assert!(!dir.path().join("all_tsx_files.txt").exists());
}

#[test]
fn positional_arguments_are_rejected() {
    let dir = TempDir::new().unwrap();

    cmd(dir.path()).arg("elsewhere").assert().failure();
}
