use crate::common::file::{FileSpec, create_directory, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const COMMIT_DATE: &str = "2023-01-01";
pub const DEFAULT_BRANCH: &str = "main";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    init_repository_with_commit(repository_dir.path(), "Initial commit");

    repository_dir
}

/// `git init` with `main` as the unborn branch, independent of the
/// installed git's default branch name
pub fn init_repository(dir: &Path) {
    create_directory(dir);

    run_git_command(dir, &["init", "--quiet"])
        .assert()
        .success();
    let head_ref = format!("refs/heads/{DEFAULT_BRANCH}");
    run_git_command(dir, &["symbolic-ref", "HEAD", head_ref.as_str()])
        .assert()
        .success();
}

pub fn init_repository_with_commit(dir: &Path, message: &str) {
    init_repository(dir);

    write_file(FileSpec::new(dir.join("README.md"), message.to_string()));

    run_git_command(dir, &["add", "."]).assert().success();
    git_commit(dir, message).assert().success();
}

pub fn run_substatus_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("substatus").expect("Failed to find substatus binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("CLICOLOR_FORCE");
    cmd.env_remove("SUBSTATUS_GIT");
    isolate_git(&mut cmd, dir);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    isolate_git(&mut cmd, dir);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "--quiet", "-m", message]);
    let date = format!("{COMMIT_DATE}T12:00:00+0000");
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", AUTHOR_NAME),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_AUTHOR_DATE", date.as_str()),
        ("GIT_COMMITTER_NAME", AUTHOR_NAME),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_DATE", date.as_str()),
    ]);
    cmd
}

// keep the developer's global config and any enclosing checkout out of the test
fn isolate_git(cmd: &mut Command, dir: &Path) {
    cmd.env("GIT_CONFIG_NOSYSTEM", "1");
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null");
    if let Some(parent) = dir.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
}
