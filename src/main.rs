use anyhow::Context;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twig::areas::repository::Repository;
use twig::commands::plumbing::cat_file::CatFileMode;
use twig::errors::TwigError;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressable version control store",
    long_about = "twig stores file blobs, directory trees and commits keyed by the SHA-1 \
    of their encoding, and keeps a staging index and a branch pointer on top of them.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file as a blob and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the kind, size or content of an object",
        long_about = "Without a flag the object must be a blob and its raw content is printed."
    )]
    CatFile {
        #[arg(short = 't', conflicts_with_all = ["size", "pretty"], help = "Print the object kind")]
        kind: bool,
        #[arg(short = 's', conflicts_with = "pretty", help = "Print the payload size")]
        size: bool,
        #[arg(short = 'p', help = "Pretty-print the object whatever its kind")]
        pretty: bool,
        #[arg(index = 1, help = "The object id")]
        sha: String,
    },
    #[command(
        name = "write-tree",
        about = "Store a tree object snapshotting the working directory"
    )]
    WriteTree,
    #[command(name = "ls-tree", about = "List the entries of a tree object")]
    LsTree {
        #[arg(index = 1, help = "The tree id")]
        sha: String,
    },
    #[command(name = "commit-tree", about = "Create a commit object for a tree")]
    CommitTree {
        #[arg(index = 1, help = "The tree id")]
        tree: String,
        #[arg(short, long, default_value = "", help = "The commit message")]
        message: String,
        #[arg(short, long, help = "The parent commit id")]
        parent: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files, directories or deletions for the next commit"
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1..)]
        paths: Vec<String>,
    },
    #[command(name = "status", about = "Show staged and untracked files")]
    Status,
    #[command(
        name = "commit",
        about = "Create a new commit from the staged changes",
        long_about = "This command creates a new commit with the specified message. \
        When the message is missing or empty it is read from standard input."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Restore the files of a commit into the working directory"
    )]
    Checkout {
        #[arg(index = 1, help = "The commit id")]
        sha: String,
    },
    #[command(name = "log", about = "Show commit history from HEAD")]
    Log,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("twig={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(command: &Commands) -> anyhow::Result<()> {
    let pwd = std::env::current_dir()?;

    let mut repository = match command {
        Commands::Init { path } => {
            let path = path.as_deref().map(PathBuf::from).unwrap_or(pwd);
            Repository::new(&path, Box::new(std::io::stdout()))?
        }
        _ => open_repository(&pwd)?,
    };

    match command {
        Commands::Init { .. } => repository.init_repository()?,
        Commands::HashObject { write, file } => repository.hash_object(file, *write)?,
        Commands::CatFile {
            kind,
            size,
            pretty,
            sha,
        } => {
            let mode = match (*kind, *size, *pretty) {
                (true, _, _) => CatFileMode::Type,
                (_, true, _) => CatFileMode::Size,
                (_, _, true) => CatFileMode::Pretty,
                _ => CatFileMode::Blob,
            };

            repository.cat_file(sha, mode)?
        }
        Commands::WriteTree => repository.snapshot_workspace()?,
        Commands::LsTree { sha } => repository.ls_tree(sha)?,
        Commands::CommitTree {
            tree,
            message,
            parent,
        } => repository.commit_tree(tree, parent.as_deref(), message)?,
        Commands::Add { paths } => repository.add(paths)?,
        Commands::Status => repository.status()?,
        Commands::Commit { message } => {
            let message = match message {
                Some(message) if !message.is_empty() => message.clone(),
                _ => prompt_commit_message(&repository)?,
            };

            repository.commit(&message)?
        }
        Commands::Checkout { sha } => repository.checkout(sha)?,
        Commands::Log => repository.log()?,
    }

    repository.writer().flush()?;

    Ok(())
}

fn open_repository(path: &Path) -> anyhow::Result<Repository> {
    let repository = Repository::new(path, Box::new(std::io::stdout()))?;
    repository.ensure_initialized()?;

    Ok(repository)
}

fn prompt_commit_message(repository: &Repository) -> anyhow::Result<String> {
    write!(repository.writer(), "Commit message: ")?;
    repository.writer().flush()?;

    let mut message = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut message)
        .context("Failed to read the commit message")?;

    let message = message.strip_suffix('\n').unwrap_or(&message);
    Ok(message.strip_suffix('\r').unwrap_or(message).to_string())
}

/// Map a failure to its exit status: expected conditions exit 1, store
/// corruption and everything unexpected exit 128.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<TwigError>() {
        Some(already_exists @ TwigError::AlreadyExists(_)) => {
            println!("{already_exists}");
            ExitCode::SUCCESS
        }
        Some(twig_err) if twig_err.is_recoverable() => {
            eprintln!("error: {twig_err}");
            ExitCode::from(1)
        }
        _ => {
            eprintln!("fatal: {err:#}");
            ExitCode::from(128)
        }
    }
}
