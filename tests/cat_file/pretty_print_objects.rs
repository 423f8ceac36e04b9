use crate::common::command::{
    AUTHOR_EMAIL, AUTHOR_NAME, committed_repository_dir, get_head_commit_sha, run_twig_command,
    twig_output,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn pretty_print_commit_and_tree(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let commit_oid = get_head_commit_sha(dir)?;

    let expected_commit = format!(
        "tree 593951edc0a15d67fb8adacf0bb1a36d3e57bd5d\n\
        author {AUTHOR_NAME} <{AUTHOR_EMAIL}> 1672574400 +0000\n\
        committer {AUTHOR_NAME} <{AUTHOR_EMAIL}> 1672574400 +0000\n\
        \n\
        Initial commit"
    );
    assert_eq!(twig_output(dir, &["cat-file", "-p", &commit_oid])?, expected_commit);

    let expected_tree = "100644 blob 43dd47ea691c90a5fa7827892c70241913351963\t1.txt\n\
        100644 blob 64c5e5885a4b06010b3a0c20edb7900dd0311025\t2.txt";
    assert_eq!(
        twig_output(dir, &["cat-file", "-p", "593951edc0a15d67fb8adacf0bb1a36d3e57bd5d"])?,
        expected_tree
    );

    Ok(())
}

#[rstest]
fn raw_cat_of_non_blob_fails(committed_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let commit_oid = get_head_commit_sha(dir)?;

    run_twig_command(dir, &["cat-file", &commit_oid])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a blob object (found commit)"));

    Ok(())
}

#[rstest]
#[case::unknown("0123456789012345678901234567890123456789", "object 0123456789012345678901234567890123456789 not found")]
#[case::malformed("xyz", "invalid object id: xyz")]
fn cat_of_bad_id_fails(committed_repository_dir: TempDir, #[case] oid: &str, #[case] message: &str) {
    run_twig_command(committed_repository_dir.path(), &["cat-file", "-t", oid])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(message));
}
