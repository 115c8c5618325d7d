use blobgen::args::{self, Args, SubCommand};
use blobgen::check;
use blobgen::errors::*;
use blobgen::generate;
use clap::Parser;
use env_logger::Env;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match (args.quiet, args.verbose) {
        (0, 0) => "warn,blobgen=info",
        (1, 0) => "warn",
        (_, 0) => "error",
        (_, 1) => "info,blobgen=debug",
        (_, 2) => "debug",
        (_, 3) => "debug,blobgen=trace",
        _ => "trace",
    };
    env_logger::init_from_env(Env::default().default_filter_or(log_level));

    match args.subcommand {
        SubCommand::Generate(generate) => generate::run(generate)?,
        SubCommand::Check(check) => check::run(check)?,
        SubCommand::Completions(completions) => args::gen_completions(&completions)?,
    }

    Ok(())
}
