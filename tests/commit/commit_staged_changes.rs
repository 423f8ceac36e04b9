use crate::common::command::{
    get_head_commit_sha, get_parent_commit_id, init_repository_dir, run_twig_command, twig_commit,
    twig_output,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_staged_changes_in_sequence(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "X".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();

    let output = twig_commit(dir, "First").output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let first = get_head_commit_sha(dir)?;
    assert_eq!(stdout, format!("Created commit {first}\n"));
    assert_eq!(
        std::fs::read_to_string(dir.join(".twig/refs/heads/main"))?,
        format!("{first}\n")
    );
    assert_eq!(std::fs::read_to_string(dir.join(".twig/index"))?, "");

    write_file(FileSpec::new(dir.join("b.txt"), "Y".to_string()));
    run_twig_command(dir, &["add", "b.txt"]).assert().success();

    let output = twig_commit(dir, "Second").output()?;
    let second = get_head_commit_sha(dir)?;
    assert_eq!(
        String::from_utf8(output.stdout)?,
        format!("Created commit {second}\nParent: {first}\n")
    );
    assert_eq!(get_parent_commit_id(dir, &second)?, Some(first));

    // the second tree carries the first commit's file forward
    let commit = twig_output(dir, &["cat-file", "-p", &second])?;
    let tree_oid = commit
        .lines()
        .find_map(|line| line.strip_prefix("tree "))
        .ok_or("commit without tree")?;
    let names = twig_output(dir, &["ls-tree", tree_oid])?
        .lines()
        .filter_map(|line| line.split_once('\t').map(|(_, name)| name.to_string()))
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a.txt", "b.txt"]);

    Ok(())
}

#[rstest]
fn commit_with_nothing_staged_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    twig_commit(dir, "Nothing")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: no changes staged for commit"));

    assert!(!dir.join(".twig/refs/heads/main").exists());
}

#[rstest]
fn commit_reads_message_from_stdin(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "X".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();

    run_twig_command(dir, &["commit"])
        .write_stdin("From the prompt\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Commit message: Created commit "));

    let commit_oid = get_head_commit_sha(dir)?;
    let commit = twig_output(dir, &["cat-file", "-p", &commit_oid])?;
    assert!(commit.ends_with("\n\nFrom the prompt"));

    Ok(())
}

#[rstest]
fn empty_message_flag_falls_back_to_prompt(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "X".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();

    run_twig_command(dir, &["commit", "-m", ""])
        .write_stdin("  padded message  \n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Commit message: Created commit "));

    let commit_oid = get_head_commit_sha(dir)?;
    let raw = run_twig_command(dir, &["cat-file", "-p", &commit_oid]).output()?;
    assert!(String::from_utf8(raw.stdout)?.ends_with("\n\n  padded message  \n"));

    Ok(())
}
