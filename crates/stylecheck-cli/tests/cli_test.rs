use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_failed_run_exit_code_is_violation_count() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("examples");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("tabs.txt"), "a\tb\tc").unwrap();
    fs::write(root.join("clean1.txt"), "clean").unwrap();
    fs::write(root.join("clean2.txt"), "also\nclean").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.current_dir(dir.path())
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("ERROR: Tab detected at"))
        .stdout(predicate::str::contains("Line number: 1"))
        .stdout(predicate::str::contains("Checked 3 files"))
        .stdout(predicate::str::contains("Errors detected: 2"))
        .stdout(predicate::str::contains("Validation FAILED"));
}

#[test]
fn test_default_roots_include_implementation_tests() {
    let dir = tempdir().unwrap();
    let tests_dir = dir.path().join("implementation").join("tests");
    fs::create_dir_all(&tests_dir).unwrap();
    fs::write(tests_dir.join("t.txt"), "ends with newline\n").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: Trailing newline detected at"))
        .stdout(predicate::str::contains("Checked 1 files"));
}

#[test]
fn test_clean_run_passes() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("examples");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("ok.txt"), "fine").unwrap();
    fs::write(root.join("empty.txt"), "").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 2 files"))
        .stdout(predicate::str::contains("Errors detected: 0"))
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_missing_default_roots_pass_with_zero_files() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 0 files"))
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_legacy_preset_and_explicit_roots() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("snippets")).unwrap();
    fs::create_dir_all(dir.path().join("custom")).unwrap();
    fs::write(dir.path().join("snippets").join("s.txt"), "\t").unwrap();
    fs::write(dir.path().join("custom").join("c.txt"), "\t\t\t").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.current_dir(dir.path()).arg("--preset").arg("legacy").assert().code(1);

    // 显式目录替换预设
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.current_dir(dir.path())
        .arg("custom")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Checked 1 files"));
}

#[test]
fn test_disable_individual_checks() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("f.txt"), "\tx\n").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.arg(dir.path()).arg("--no-tabs").assert().code(1);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.arg(dir.path()).arg("--no-trailing-newline").assert().code(1);

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.arg(dir.path())
        .arg("--no-tabs")
        .arg("--no-trailing-newline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_exit_code_saturates_at_255() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("many.txt"), "\t".repeat(300)).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.arg(dir.path())
        .assert()
        .code(255)
        .stdout(predicate::str::contains("Errors detected: 300"));
}

#[test]
fn test_json_report_written() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("src");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "x\n\ty").unwrap();
    let report_path = dir.path().join("report.json");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.arg(&root).arg("--report").arg(&report_path).assert().code(1);

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.starts_with('['));
    assert!(report.contains("\"line\":2"));
    assert!(report.contains("\"kind\":\"tab\""));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok"), "ok").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.env("RUST_LOG", "debug")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("starting style check").not())
        .stderr(predicate::str::contains("starting style check"));
}

#[test]
fn test_report_inside_scanned_root_is_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x\ty").unwrap();
    // 上一次运行留下的报告（含制表符）
    fs::write(dir.path().join("report.json"), "\t\t\t\n").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stylecheck"));
    cmd.current_dir(dir.path())
        .arg(".")
        .arg("--report")
        .arg("report.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checked 1 files"))
        .stdout(predicate::str::contains("report.json").not());

    let report = fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(report.contains("\"kind\":\"tab\""));
}
