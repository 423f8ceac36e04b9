use crate::common::command::{init_repository_dir, twig_output};
use crate::common::file::{FileSpec, create_directory, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn write_tree_for_nested_project(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "two".to_string()));
    write_file(FileSpec::new(dir.join(".hidden"), "ignored".to_string()));
    write_file(FileSpec::new(dir.join("a").join(".env"), "ignored".to_string()));

    let tree_oid = twig_output(dir, &["write-tree"])?;
    assert_eq!(tree_oid, "302a2caed7030e78cfe91e221c270df9f3031422");

    assert_eq!(
        twig_output(dir, &["ls-tree", &tree_oid])?,
        "100644 blob 43dd47ea691c90a5fa7827892c70241913351963\t1.txt\n\
        40000 tree 6bd86417cbe0c4abfe2e4cdbef17eba948ff298c\ta"
    );

    Ok(())
}

#[rstest]
fn write_tree_for_empty_directory(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    create_directory(&dir.join("nothing"));

    let tree_oid = twig_output(dir, &["write-tree"])?;
    let subtree = twig_output(dir, &["ls-tree", &tree_oid])?;

    assert_eq!(
        subtree,
        "40000 tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\tnothing"
    );
    assert_eq!(
        twig_output(dir, &["ls-tree", "4b825dc642cb6eb9a060e54bf8d69288fbee4904"])?,
        ""
    );

    Ok(())
}
