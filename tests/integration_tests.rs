//! Integration tests for the max-lines CLI

use assert_cmd::Command;
use git2::{IndexAddOption, Repository, Signature};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn max_lines(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("max-lines").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write_lines(dir: &Path, name: &str, lines: usize) {
    fs::write(dir.join(name), "a\n".repeat(lines)).unwrap();
}

fn stage_all(repo: &Repository) {
    let mut index = repo.index().unwrap();
    index.add_all(["*"], IndexAddOption::DEFAULT, None).unwrap();
    index.write().unwrap();
}

fn commit_all(repo: &Repository) {
    stage_all(repo);
    let mut index = repo.index().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, "commit", &tree, &parents)
        .unwrap();
}

/// Repository with `f.py` committed at 10 lines
fn repo_with_committed_file() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    write_lines(dir.path(), "f.py", 10);
    commit_all(&repo);
    (dir, repo)
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    max_lines(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("maximum number of lines"))
        .stdout(predicate::str::contains("--ignore-modified"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    max_lines(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("max-lines"));
}

#[test]
fn test_no_filenames_passes() {
    let dir = TempDir::new().unwrap();
    max_lines(dir.path()).assert().success();
}

#[test]
fn test_limit_boundary() {
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "f.py", 10);

    max_lines(dir.path())
        .args(["f.py", "--max-lines", "10"])
        .assert()
        .success();

    max_lines(dir.path())
        .args(["f.py", "-m", "9"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("f.py exceeds 9 lines"));
}

#[test]
fn test_default_limit_is_1000() {
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "ok.py", 1000);
    write_lines(dir.path(), "long.py", 1001);

    max_lines(dir.path()).arg("ok.py").assert().success();
    max_lines(dir.path())
        .arg("long.py")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("long.py exceeds 1000 lines"));
}

#[test]
fn test_large_file() {
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "f.py", 100_000);

    max_lines(dir.path())
        .args(["f.py", "-m", "100000"])
        .assert()
        .success();
    max_lines(dir.path())
        .args(["f.py", "-m", "99999"])
        .assert()
        .code(1);
}

#[test]
fn test_extension_filter() {
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "f.py", 10);
    write_lines(dir.path(), "f.txt", 10);

    max_lines(dir.path())
        .args(["f.py", "f.txt", "-m", "9", "-x", "py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("f.py exceeds"))
        .stdout(predicate::str::contains("f.txt").not());

    max_lines(dir.path())
        .args(["f.py", "f.txt", "-m", "9", "--extension", "json"])
        .assert()
        .success();
}

#[test]
fn test_missing_file_is_not_a_violation() {
    let dir = TempDir::new().unwrap();
    max_lines(dir.path())
        .args(["deleted.py", "-m", "0"])
        .assert()
        .success();
}

#[test]
fn test_ignore_modified_with_libgit2() {
    let (dir, repo) = repo_with_committed_file();

    max_lines(dir.path())
        .args(["f.py", "-m", "5", "--ignore-modified", "--diff-backend", "libgit2"])
        .assert()
        .code(1);

    write_lines(dir.path(), "f.py", 9);
    stage_all(&repo);

    max_lines(dir.path())
        .args(["f.py", "-m", "5", "--ignore-modified", "--diff-backend", "libgit2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignoring modified files"));

    // Without the flag the shrunk file still counts
    max_lines(dir.path())
        .args(["f.py", "-m", "5", "--diff-backend", "libgit2"])
        .assert()
        .code(1);
}

#[test]
fn test_ignore_modified_with_git() {
    if which::which("git").is_err() {
        return;
    }
    let (dir, repo) = repo_with_committed_file();

    max_lines(dir.path())
        .args(["f.py", "--max-lines", "9", "--ignore-modified"])
        .assert()
        .code(1);

    write_lines(dir.path(), "f.py", 9);
    stage_all(&repo);

    max_lines(dir.path())
        .args(["f.py", "--max-lines", "1", "--ignore-modified"])
        .assert()
        .success();
}

#[test]
fn test_unstaged_shrink_is_not_exempt() {
    let (dir, _repo) = repo_with_committed_file();
    write_lines(dir.path(), "f.py", 9);

    max_lines(dir.path())
        .args(["f.py", "-m", "5", "--ignore-modified", "--diff-backend", "libgit2"])
        .assert()
        .code(1);
}

#[test]
fn test_ignore_modified_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    let inner = dir.path().join("not-a-repo");
    fs::create_dir(&inner).unwrap();
    write_lines(&inner, "f.py", 3);

    max_lines(&inner)
        .args(["f.py", "--ignore-modified", "--diff-backend", "libgit2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line count check failed"));
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "a.rs", 3);
    write_lines(dir.path(), "b.rs", 1);

    let assert = max_lines(dir.path())
        .args(["a.rs", "b.rs", "-m", "2", "--format", "json"])
        .assert()
        .code(1);

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["max_lines"], 2);
    assert_eq!(report["checked"].as_array().unwrap().len(), 2);
    assert_eq!(report["exceeding"][0]["path"], "a.rs");
    assert_eq!(report["exceeding"][0]["lines"], 3);
}

#[test]
fn test_repository_config_file() {
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "f.py", 10);
    fs::write(dir.path().join(".max-lines.toml"), "max_lines = 9\n").unwrap();

    max_lines(dir.path()).arg("f.py").assert().code(1);

    // Command line wins over the file
    max_lines(dir.path())
        .args(["f.py", "-m", "10"])
        .assert()
        .success();
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "f.py", 10);
    fs::write(dir.path().join(".max-lines.toml"), "max_lines = 9\n").unwrap();

    max_lines(dir.path())
        .arg("f.py")
        .env("MAX_LINES_MAX_LINES", "20")
        .assert()
        .success();
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    max_lines(dir.path())
        .args(["--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_exceptions_are_accepted_but_not_applied() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("vendor")).unwrap();
    write_lines(dir.path(), "vendor/big.py", 10);

    max_lines(dir.path())
        .args(["vendor/big.py", "-m", "5", "-e", "vendor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not applied"));
}

#[test]
fn test_quiet_still_reports_violations() {
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "ok.py", 1);
    write_lines(dir.path(), "long.py", 10);

    max_lines(dir.path())
        .args(["ok.py", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    max_lines(dir.path())
        .args(["long.py", "-q", "-m", "5"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("long.py exceeds 5 lines"));
}

#[test]
fn test_wc_line_counter() {
    if which::which("wc").is_err() {
        return;
    }
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "f.py", 10);

    max_lines(dir.path())
        .args(["f.py", "-m", "9", "--line-counter", "wc"])
        .assert()
        .code(1);
    max_lines(dir.path())
        .args(["f.py", "-m", "10", "--line-counter", "wc"])
        .assert()
        .success();
}

#[test]
fn test_wc_line_counter_with_dash_filename() {
    if which::which("wc").is_err() {
        return;
    }
    let dir = TempDir::new().unwrap();
    write_lines(dir.path(), "-dash.py", 3);

    max_lines(dir.path())
        .args(["-m", "2", "--line-counter", "wc", "--", "-dash.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("-dash.py exceeds 2 lines"));
}

#[test]
fn test_ignore_modified_with_git_non_ascii_name() {
    if which::which("git").is_err() {
        return;
    }
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    write_lines(dir.path(), "caf\u{e9}.py", 10);
    commit_all(&repo);
    write_lines(dir.path(), "caf\u{e9}.py", 9);
    stage_all(&repo);

    max_lines(dir.path())
        .args(["caf\u{e9}.py", "-m", "5", "--ignore-modified"])
        .assert()
        .success();
}

#[test]
fn test_json_exempted_lists_only_candidates() {
    let (dir, repo) = repo_with_committed_file();
    write_lines(dir.path(), "notes.txt", 10);
    commit_all(&repo);
    write_lines(dir.path(), "notes.txt", 4);
    stage_all(&repo);

    let assert = max_lines(dir.path())
        .args([
            "f.py",
            "-x",
            "py",
            "--ignore-modified",
            "--diff-backend",
            "libgit2",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["exempted"], serde_json::json!([]));
    assert_eq!(report["checked"][0]["path"], "f.py");
}
