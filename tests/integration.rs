use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_sigscrape")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- members --

#[test]
fn members_writes_sorted_listing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("all.txt");
    let expected = std::fs::read_to_string(fixture_path("members/expected_all.txt")).unwrap();

    cmd()
        .args(["members", &fixture_path("members/html"), "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn members_writes_namespace_subset() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("all.txt");
    let geometry = dir.path().join("nested/geometry.txt");

    cmd()
        .args(["members", &fixture_path("members/html"), "-o"])
        .arg(&out)
        .args(["--namespace", "Rhino.Geometry", "--namespace-output"])
        .arg(&geometry)
        .assert()
        .success();

    let subset = std::fs::read_to_string(&geometry).unwrap();
    assert_eq!(subset.lines().count(), 2);
    assert!(subset.lines().all(|l| l.starts_with("Rhino.Geometry.")));
}

#[test]
fn members_reports_summary_on_stderr() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["members", &fixture_path("members/html"), "-o"])
        .arg(dir.path().join("all.txt"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("extracted 4 signatures"))
        .stderr(predicate::str::contains("skipped 1"));
}

#[test]
fn members_quiet_suppresses_info() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["-q", "members", &fixture_path("members/html"), "-o"])
        .arg(dir.path().join("all.txt"))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn members_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["members"])
        .arg(dir.path().join("absent"))
        .arg("-o")
        .arg(dir.path().join("all.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("input directory not found"));
}

#[test]
fn members_empty_directory_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("all.txt");
    cmd()
        .args(["members"])
        .arg(dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "");
}

// -- script --

#[test]
fn script_writes_sorted_unique_listing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("rs.txt");
    let expected = std::fs::read_to_string(fixture_path("script_expected.txt")).unwrap();

    cmd()
        .args(["script", &fixture_path("script_index.html"), "-o"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn script_custom_module_and_python_style() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("rs.txt");

    cmd()
        .args(["script", &fixture_path("script_index.html"), "-o"])
        .arg(&out)
        .args(["--module", "rs", "--type-style", "python"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.lines().all(|l| l.starts_with("rs.")));
    assert!(content.contains("rs.AddCircle(plane_or_center: Tuple[float, float, float], radius: float) -> str"));
}

#[test]
fn script_invalid_type_style_fails() {
    cmd()
        .args(["script", &fixture_path("script_index.html"), "-o", "out.txt"])
        .args(["--type-style", "java"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn script_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["script"])
        .arg(dir.path().join("nope.html"))
        .arg("-o")
        .arg(dir.path().join("rs.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// -- filter --

#[test]
fn filter_keeps_namespace_lines() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("display.txt");

    cmd()
        .args(["filter", &fixture_path("members/expected_all.txt"), "-o"])
        .arg(&out)
        .args(["--namespace", "Rhino.Display"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.starts_with("Rhino.Display.ColorHSL.CreateFromLCH("));
}

// -- cli --

#[test]
fn no_subcommand_shows_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn verbose_and_quiet_conflict() {
    cmd()
        .args(["-v", "-q", "filter", "a", "-o", "b", "--namespace", "X"])
        .assert()
        .failure();
}
