//
// lib.rs
// cdiff
//
// Library entry that re-exports modules so the binary and tests can access
// CLI parsing, line normalization, diffing, and file reading.
//

pub mod cli;
pub mod diff;
pub mod normalize;
pub mod utils;

pub use cli::{build_options, Args, Options};
pub use diff::{compare_files, diff_lines, write_changes, EditOp};
pub use normalize::{normalize, CommentState};
pub use utils::read_lines;
