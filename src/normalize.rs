//! Line normalization: whitespace trimming and C-style comment removal,
//! applied to a whole file's lines before they are diffed.

/// Tracks whether the cursor is inside an unterminated `/* */` comment.
///
/// Scoped to a single file's normalization pass; the state is threaded
/// through [`strip_block_comment`] one line at a time and only an explicit
/// `*/` flips it back to `Code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentState {
    Code,
    InBlock,
}

/// Cleans a file's lines according to the flags.
///
/// With `ignore_comments` unset this is the identity, even when `strip` is
/// set: stripping only happens as part of the comment-removal pass. With
/// `ignore_comments` set, each line is optionally trimmed, has its `//` and
/// `/* */` comments removed, is optionally trimmed again, and is kept only
/// if something non-empty remains. Comment-only and blank lines are dropped
/// from the result, not blanked.
///
/// An unmatched `/*` is not an error: all following lines count as comment
/// until a `*/` shows up.
pub fn normalize(lines: &[String], strip: bool, ignore_comments: bool) -> Vec<String> {
    if !ignore_comments {
        return lines.to_vec();
    }

    let mut results = Vec::new();
    let mut state = CommentState::Code;

    for raw in lines {
        let line = if strip { raw.trim() } else { raw.as_str() };
        let line = strip_line_comment(line);
        let (line, next) = strip_block_comment(line, state);
        state = next;

        let line = if strip { line.trim().to_string() } else { line };
        if !line.is_empty() {
            results.push(line);
        }
    }

    results
}

/// Truncates the line at the first `//`, if any.
pub fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Removes the `/* */`-commented portion of one line, given the state left
/// behind by the previous line, and returns the state for the next one.
///
/// The first `/*` truncates the line and opens a comment. The `*/` search
/// then runs over whatever that truncation left, so an opener earlier on
/// the line hides a terminator that comes after it; a `*/` that survives
/// closes the comment and only the text after it is kept. A line with
/// neither marker while inside a comment becomes empty.
pub fn strip_block_comment(line: &str, state: CommentState) -> (String, CommentState) {
    let mut state = state;
    let mut current = line;

    let opened = current.find("/*");
    if let Some(idx) = opened {
        state = CommentState::InBlock;
        current = &current[..idx];
    }

    let closed = current.find("*/");
    if let Some(idx) = closed {
        state = CommentState::Code;
        current = &current[idx + 2..];
    } else if state == CommentState::InBlock && opened.is_none() {
        current = "";
    }

    (current.to_string(), state)
}
