//! CLI entry point for gitree

use std::path::PathBuf;
use std::process;

use clap::Parser;
use gitree::{WalkerConfig, print_structure};

#[derive(Parser, Debug)]
#[command(name = "gitree")]
#[command(about = "Print a directory tree that respects .gitignore")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Include hidden files and directories (still respects .gitignore)
    #[arg(short, long)]
    all: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Do not read or apply the root .gitignore
    #[arg(long = "no-gitignore")]
    no_gitignore: bool,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };
    // Normalize trailing "." / ".." segments so the root label is the
    // directory's real name.
    let root = root.canonicalize().unwrap_or(root);

    let config = WalkerConfig {
        show_all: args.all,
        ignore_patterns: args.ignore,
        respect_gitignore: !args.no_gitignore,
    };

    if let Err(e) = print_structure(&root, config) {
        eprintln!("gitree: {}", e);
        process::exit(1);
    }
}
