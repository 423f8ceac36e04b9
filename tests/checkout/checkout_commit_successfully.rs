use crate::common::command::{
    get_head_commit_sha, init_repository_dir, run_twig_command, twig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_commit_restores_its_files(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "version one".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();
    twig_commit(dir, "First").assert().success();
    let first = get_head_commit_sha(dir)?;

    write_file(FileSpec::new(dir.join("a.txt"), "version two".to_string()));
    write_file(FileSpec::new(dir.join("b.txt"), "new file".to_string()));
    write_file(FileSpec::new(dir.join("scratch/notes.txt"), "notes".to_string()));
    write_file(FileSpec::new(dir.join(".keep"), "hidden".to_string()));
    run_twig_command(dir, &["add", "a.txt", "b.txt"]).assert().success();
    twig_commit(dir, "Second").assert().success();
    let second = get_head_commit_sha(dir)?;

    run_twig_command(dir, &["checkout", &first])
        .assert()
        .success()
        .stdout(format!("Checked out commit {first}\n"));

    assert_eq!(std::fs::read_to_string(dir.join("a.txt"))?, "version one");
    assert!(!dir.join("b.txt").exists());
    assert!(!dir.join("scratch").exists());
    assert!(dir.join(".keep").exists());
    // HEAD stays where it was
    assert_eq!(get_head_commit_sha(dir)?, second);

    Ok(())
}

#[rstest]
fn checkout_of_non_commit_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "keep me".to_string()));
    let blob_oid = String::from_utf8(
        run_twig_command(dir, &["hash-object", "-w", "a.txt"])
            .output()?
            .stdout,
    )?;

    run_twig_command(dir, &["checkout", blob_oid.trim()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a commit object (found blob)"));
    assert_eq!(std::fs::read_to_string(dir.join("a.txt"))?, "keep me");

    run_twig_command(dir, &["checkout", "1111111111111111111111111111111111111111"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    Ok(())
}
