use crate::common::command::{committed_repository_dir, init_repository_dir, run_twig_command};
use crate::common::file::{FileSpec, create_directory, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_placeholders_for_empty_repository(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("Staged files:\n  (no files staged)\n\nUntracked files:\n  (none)\n");
}

#[rstest]
fn list_staged_and_untracked_files_in_name_order(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("b.txt"), "b".to_string()));
    write_file(FileSpec::new(dir.join("a.txt"), "a".to_string()));
    write_file(FileSpec::new(dir.join("c.txt"), "c".to_string()));
    write_file(FileSpec::new(dir.join(".hidden"), "h".to_string()));
    create_directory(&dir.join("nested"));
    write_file(FileSpec::new(dir.join("nested/d.txt"), "d".to_string()));

    run_twig_command(dir, &["add", "b.txt"]).assert().success();

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout("Staged files:\n  b.txt\n\nUntracked files:\n  a.txt\n  c.txt\n");
}

#[rstest]
fn committed_files_count_as_untracked_after_commit(committed_repository_dir: TempDir) {
    // the index is emptied by every commit
    run_twig_command(committed_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout("Staged files:\n  (no files staged)\n\nUntracked files:\n  1.txt\n  2.txt\n");
}
