use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SLUG: &str = "my-first-zenn-article";

fn zenn_command(cwd: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_zenn"));
    command
        .arg("new:article")
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("EDITOR");
    command
}

fn zenn(cwd: &Path, args: &[&str]) -> Output {
    zenn_command(cwd, args)
        .output()
        .expect("Should be able to run zenn")
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("articles")).unwrap();
    dir
}

fn article_count(dir: &Path) -> usize {
    fs::read_dir(dir.join("articles")).unwrap().count()
}

#[test]
fn machine_readable_prints_only_file_name() {
    let dir = workspace();
    let output = zenn(dir.path(), &["--slug", SLUG, "--machine-readable"]);

    assert!(output.status.success());
    assert_eq!(format!("{SLUG}.md\n"), String::from_utf8_lossy(&output.stdout));
    assert_eq!(1, article_count(dir.path()));
    assert!(dir.path().join("articles").join(format!("{SLUG}.md")).is_file());

    dir.close().unwrap();
}

#[test]
fn invalid_slug_exits_with_error() {
    let dir = workspace();
    let output = zenn(dir.path(), &["--slug", "short"]);

    assert_eq!(Some(1), output.status.code());
    assert!(String::from_utf8_lossy(&output.stderr).contains("エラー：slugの値（short）が不正です"));
    assert!(output.stdout.is_empty());
    assert_eq!(0, article_count(dir.path()));

    dir.close().unwrap();
}

#[test]
fn second_run_keeps_first_article() {
    let dir = workspace();
    let path = dir.path().join("articles").join(format!("{SLUG}.md"));

    let first = zenn(dir.path(), &["--slug", SLUG, "--title", "one"]);
    assert!(first.status.success());
    let content = fs::read(&path).unwrap();

    let second = zenn(dir.path(), &["--slug", SLUG, "--title", "two"]);
    // write failures are reported but do not change the exit code
    assert!(second.status.success());
    assert!(String::from_utf8_lossy(&second.stdout).contains("エラーが発生しました"));
    assert_eq!(content, fs::read(&path).unwrap());

    dir.close().unwrap();
}

#[test]
fn help_does_not_write() {
    let dir = workspace();
    let output = zenn(dir.path(), &["--slug", SLUG, "--help"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("zenn new:article [options]"));
    assert_eq!(0, article_count(dir.path()));

    dir.close().unwrap();
}

#[test]
fn unknown_option_prints_help() {
    let dir = workspace();
    let output = zenn(dir.path(), &["--slug", SLUG, "--draft"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("無効なオプションです"));
    assert!(stdout.contains("--machine-readable"));
    assert_eq!(0, article_count(dir.path()));

    dir.close().unwrap();
}

#[test]
fn human_readable_output_names_file() {
    let dir = workspace();
    let output = zenn(dir.path(), &["--slug", SLUG, "--type", "idea", "--published", "true"]);

    assert!(output.status.success());
    assert_eq!(
        format!("📄 {SLUG}.md created.\n"),
        String::from_utf8_lossy(&output.stdout)
    );

    let content = fs::read_to_string(dir.path().join("articles").join(format!("{SLUG}.md"))).unwrap();
    assert!(content.contains("type: \"idea\""));
    assert!(content.contains("published: true"));

    dir.close().unwrap();
}

#[test]
fn repeated_slug_uses_last_value() {
    let dir = workspace();
    let output = zenn(
        dir.path(),
        &["--slug", "aaaaaaaaaaaaaa", "--slug", SLUG, "--machine-readable"],
    );

    assert!(output.status.success());
    assert_eq!(format!("{SLUG}.md\n"), String::from_utf8_lossy(&output.stdout));
    assert_eq!(1, article_count(dir.path()));
    assert!(dir.path().join("articles").join(format!("{SLUG}.md")).is_file());

    dir.close().unwrap();
}

#[test]
fn editor_failure_still_prints_file_name() {
    let dir = workspace();
    let output = zenn_command(dir.path(), &["--slug", SLUG, "--edit", "--machine-readable"])
        .env("EDITOR", "zenn-no-such-editor")
        .output()
        .expect("Should be able to run zenn");

    assert_eq!(Some(1), output.status.code());
    assert_eq!(format!("{SLUG}.md\n"), String::from_utf8_lossy(&output.stdout));
    assert!(String::from_utf8_lossy(&output.stderr).contains("エラー："));
    assert_eq!(1, article_count(dir.path()));

    dir.close().unwrap();
}
