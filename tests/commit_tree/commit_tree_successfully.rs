use crate::common::command::{
    AUTHOR_DATE, AUTHOR_EMAIL, AUTHOR_NAME, get_parent_commit_id, init_repository_dir,
    run_twig_command, twig_output,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_tree_chain(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    let tree_oid = twig_output(dir, &["write-tree"])?;

    let root = run_twig_command(dir, &["commit-tree", &tree_oid, "-m", "root"])
        .envs(vec![
            ("TWIG_AUTHOR_NAME", AUTHOR_NAME),
            ("TWIG_AUTHOR_EMAIL", AUTHOR_EMAIL),
            ("TWIG_AUTHOR_DATE", AUTHOR_DATE),
        ])
        .output()?;
    let root = String::from_utf8(root.stdout)?.trim().to_string();
    assert_eq!(root.len(), 40);
    assert_eq!(get_parent_commit_id(dir, &root)?, None);

    let child = twig_output(dir, &["commit-tree", &tree_oid, "-m", "child", "-p", &root])?;
    assert_eq!(get_parent_commit_id(dir, &child)?, Some(root));

    // commit-tree does not move HEAD
    assert!(!dir.join(".twig/refs/heads/main").exists());

    Ok(())
}

#[rstest]
fn commit_tree_rejects_wrong_kinds(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    let blob_oid = twig_output(dir, &["hash-object", "-w", "1.txt"])?;
    let tree_oid = twig_output(dir, &["write-tree"])?;

    run_twig_command(dir, &["commit-tree", &blob_oid, "-m", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a tree object (found blob)"));

    run_twig_command(dir, &["commit-tree", &tree_oid, "-m", "nope", "-p", &tree_oid])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a commit object (found tree)"));

    run_twig_command(
        dir,
        &["commit-tree", "0000000000000000000000000000000000000000", "-m", "nope"],
    )
    .assert()
    .code(1)
    .stderr(predicate::str::contains("not found"));

    Ok(())
}
