//! Line-level diffing of two normalized line sequences.

use std::io::{self, Write};
use std::path::PathBuf;

use similar::{ChangeTag, TextDiff};

use crate::cli::Options;
use crate::normalize::normalize;
use crate::utils::read_lines;

/// One line present on only one side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Line present only in the second file.
    Added(String),
    /// Line present only in the first file.
    Removed(String),
}

impl EditOp {
    pub fn marker(&self) -> char {
        match self {
            EditOp::Added(_) => '+',
            EditOp::Removed(_) => '-',
        }
    }

    pub fn line(&self) -> &str {
        match self {
            EditOp::Added(line) | EditOp::Removed(line) => line,
        }
    }
}

/// Aligns the two sequences on their longest common subsequence and reports
/// every line outside it, in visit order: within a divergent block, removals
/// from `a` come before additions from `b`. Aligned identical lines are
/// suppressed entirely.
pub fn diff_lines(a: &[String], b: &[String]) -> Vec<EditOp> {
    let a_refs: Vec<&str> = a.iter().map(|s| s.as_str()).collect();
    let b_refs: Vec<&str> = b.iter().map(|s| s.as_str()).collect();
    let diff = TextDiff::from_slices(&a_refs, &b_refs);
    let mut ops = Vec::new();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => {}
            ChangeTag::Delete => ops.push(EditOp::Removed(change.value().to_string())),
            ChangeTag::Insert => ops.push(EditOp::Added(change.value().to_string())),
        }
    }
    ops
}

/// The whole pipeline: read both files, normalize each, diff the results.
///
/// Anything other than exactly two paths is a defined degenerate case that
/// yields an empty result, matching the silent-failure policy of
/// [`read_lines`]: bad invocations produce less output, never an error.
pub fn compare_files(paths: &[PathBuf], opts: &Options) -> Vec<EditOp> {
    if paths.len() != 2 {
        return Vec::new();
    }

    let a = normalize(&read_lines(&paths[0]), opts.strip, opts.ignore_comment);
    let b = normalize(&read_lines(&paths[1]), opts.strip, opts.ignore_comment);
    diff_lines(&a, &b)
}

/// Renders each change as its marker immediately followed by the line
/// content, one change per output line. Normalized lines may have lost
/// their trailing newline; one is added back so markers stay aligned.
pub fn write_changes<W: Write>(changes: &[EditOp], mut out: W) -> io::Result<()> {
    for change in changes {
        let line = change.line();
        if line.ends_with('\n') {
            write!(out, "{}{}", change.marker(), line)?;
        } else {
            writeln!(out, "{}{}", change.marker(), line)?;
        }
    }
    Ok(())
}
