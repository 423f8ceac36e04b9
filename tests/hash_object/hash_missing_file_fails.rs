use crate::common::command::{init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn hash_missing_file_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["hash-object", "-w", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: file 'missing.txt' not found"));
}
