use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use asv_scaffold::{mark_executable, repo_structure, write_all, EXECUTABLES};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Create the ASV monorepo folder and placeholder file skeleton", long_about = None)]
struct Cli {
    /// Repo root folder to create, e.g. ./asv
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    overwrite: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fs::create_dir_all(&cli.root)
        .with_context(|| format!("Failed to create root directory: {}", cli.root.display()))?;
    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("Failed to resolve root directory: {}", cli.root.display()))?;

    let table = repo_structure();
    let summary = write_all(&root, &table, cli.overwrite)?;

    // Chmod after the write pass so the hooks and scripts exist.
    mark_executable(&root, EXECUTABLES);

    println!("✅ Scaffold complete at: {}", root.display());
    println!(
        "📄 Files listed in scaffold: {} ({} written, {} skipped)",
        table.len(),
        summary.written,
        summary.skipped
    );
    println!("{}", "Next:".bold());
    println!("  cd {}", root.display());
    println!("  git init");
    println!("  ./tools/dev/setup-hooks.sh   # enforce commit style");

    Ok(())
}
