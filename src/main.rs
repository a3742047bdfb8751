use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use cdiff::cli::{build_options, Args};
use cdiff::diff::{compare_files, write_changes};

fn main() -> Result<()> {
    let args = Args::parse();
    let opts = build_options(&args);

    let changes = compare_files(&args.files, &opts);
    write_changes(&changes, io::stdout().lock()).context("Failed to write diff output")?;

    Ok(())
}
