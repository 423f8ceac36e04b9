use assert_fs::assert::PathAssert;
use crate::common::command::{init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn hash_blob_without_writing(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    init_repository_dir
        .child("hello.txt")
        .write_str("Hello, World!")?;

    run_twig_command(init_repository_dir.path(), &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout("b45ef6fec89518d314f546fd6c3025367b721684\n");

    init_repository_dir
        .child(".twig/objects/b4/5ef6fec89518d314f546fd6c3025367b721684")
        .assert(predicate::path::missing());

    Ok(())
}
