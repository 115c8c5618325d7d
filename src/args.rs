use crate::codegen::Backend;
use crate::errors::*;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Increase logging output (can be used multiple times)
    #[arg(short, long, global = true, action(ArgAction::Count))]
    pub verbose: u8,
    /// Reduce logging output (can be used multiple times)
    #[arg(short, long, global = true, action(ArgAction::Count))]
    pub quiet: u8,
    #[command(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, Subcommand)]
pub enum SubCommand {
    Generate(Generate),
    Check(Check),
    Completions(Completions),
}

/// Generate source code declaring the constants of a manifest
#[derive(Debug, Clone, Parser)]
pub struct Generate {
    /// Path to the manifest describing the constants
    pub manifest: PathBuf,
    /// Write the generated source here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// The source language to generate
    #[arg(short, long, value_enum, default_value = "c")]
    pub backend: Backend,
}

/// Ensure a manifest resolves and show what it declares
#[derive(Debug, Clone, Parser)]
pub struct Check {
    /// Path to the manifest to inspect
    pub manifest: PathBuf,
    /// Also print the parsed manifest as json
    #[arg(long)]
    pub json: bool,
}

/// Generate shell completions
#[derive(Debug, Clone, Parser)]
pub struct Completions {
    pub shell: Shell,
}

pub fn gen_completions(args: &Completions) -> Result<()> {
    clap_complete::generate(
        args.shell,
        &mut Args::command(),
        "blobgen",
        &mut io::stdout(),
    );
    Ok(())
}
