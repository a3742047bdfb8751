use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files to compare (exactly two; anything else yields no output)
    pub files: Vec<PathBuf>,

    /// Trim leading/trailing whitespace before comparing
    #[arg(short, long)]
    pub strip: bool,

    /// Remove C-style comments (// and /* */) before comparing
    #[arg(short = 'c', long, alias = "ignoreComment")]
    pub ignore_comment: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub strip: bool,
    pub ignore_comment: bool,
}

pub fn build_options(args: &Args) -> Options {
    Options {
        strip: args.strip,
        ignore_comment: args.ignore_comment,
    }
}
