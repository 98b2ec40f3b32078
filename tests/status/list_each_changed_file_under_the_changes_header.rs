use crate::common::command::{init_repository_dir, run_substatus_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_each_changed_file_under_the_changes_header(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let untracked_count = (1..=5).fake::<usize>();
    let mut untracked = write_generated_files(init_repository_dir.path(), untracked_count);
    untracked.sort_by(|a, b| a.path.cmp(&b.path));

    write_file(FileSpec::new(
        init_repository_dir.path().join("README.md"),
        "changed".to_string(),
    ));

    let actual_output = run_substatus_command(init_repository_dir.path(), &["status"])
        .assert()
        .success();
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;

    let changes = stdout
        .lines()
        .skip_while(|line| *line != "  Working tree has changes:")
        .skip(1)
        .take_while(|line| line.starts_with("    "))
        .collect::<Vec<_>>();

    let mut expected = vec!["    M README.md".to_string()];
    expected.extend(untracked.iter().map(|file| {
        let name = file
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("    ?? {name}")
    }));

    assert_eq!(changes, expected);
    assert!(!stdout.contains("Working tree clean"));

    Ok(())
}
