use assert_fs::assert::PathAssert;
use crate::common::command::{repository_dir, run_twig_command};
use assert_fs::TempDir;
use assert_fs::fixture::PathChild;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let marker_path = repository_dir.path().canonicalize()?.join(".twig");

    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(format!(
            "Initialized empty twig repository in {}\n",
            marker_path.display()
        ));

    assert_eq!(
        std::fs::read_to_string(marker_path.join("HEAD"))?,
        "ref: refs/heads/main\n"
    );
    repository_dir
        .child(".twig/objects")
        .assert(predicate::path::is_dir());
    repository_dir
        .child(".twig/refs/heads")
        .assert(predicate::path::is_dir());
    repository_dir
        .child(".twig/refs/heads/main")
        .assert(predicate::path::missing());

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("project");

    run_twig_command(repository_dir.path(), &["init", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty twig repository in"));

    assert!(target.join(".twig/HEAD").is_file());
    assert!(!repository_dir.path().join(".twig").exists());

    Ok(())
}

#[rstest]
fn reinit_reports_existing_repository(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_path = repository_dir.path().canonicalize()?;
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(format!(
            "twig repository already exists in {}\n",
            repository_path.display()
        ));

    Ok(())
}

#[rstest]
#[case::status(&["status"])]
#[case::log(&["log"])]
#[case::write_tree(&["write-tree"])]
fn commands_outside_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    run_twig_command(repository_dir.path(), args)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a twig repository"));
}
