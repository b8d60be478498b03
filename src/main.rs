use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kcda::cli::Args;

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "kcda=debug" } else { "kcda=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if let Err(error) = run(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let rows = kcda::export::run(&args.input, &args.output_dir)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    println!("Done: {} rows", rows);
    Ok(())
}
