//! Project automation tasks for taiex-ticker

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Project automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all tests
    Test {
        /// Also run tests that need network access to Yahoo Finance
        #[arg(long)]
        network: bool,
    },
    /// Run clippy lints
    Lint,
    /// Check formatting
    Fmt,
    /// Run fmt, lint and test in order
    Ci,
}

fn cargo(args: &[&str]) -> anyhow::Result<()> {
    println!("$ cargo {}", args.join(" "));
    let status = Command::new(env!("CARGO"))
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("cargo {} failed with {status}", args.join(" "));
    }
    Ok(())
}

fn test(network: bool) -> anyhow::Result<()> {
    cargo(&["test", "--workspace"])?;
    if network {
        cargo(&["test", "--workspace", "--", "--ignored"])?;
    }
    Ok(())
}

fn lint() -> anyhow::Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
}

fn fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"])
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test { network } => test(network),
        Commands::Lint => lint(),
        Commands::Fmt => fmt(),
        Commands::Ci => {
            fmt()?;
            lint()?;
            test(false)
        }
    }
}
