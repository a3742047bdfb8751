use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

/// Reads a file as an ordered sequence of lines, each keeping its trailing
/// newline. Content that is not valid UTF-8 is decoded as Windows-1252 as a
/// best effort. An unreadable path yields an empty sequence rather than an
/// error; callers see "nothing to compare", never a failure.
pub fn read_lines(path: &Path) -> Vec<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return Vec::new(),
    };

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => WINDOWS_1252.decode(err.as_bytes()).0.into_owned(),
    };

    content.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_lines_keeping_newlines() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let file = tmp.child("input.c");
        file.write_str("int a;\nint b;\nno trailing newline").unwrap();

        assert_eq!(
            read_lines(file.path()),
            vec!["int a;\n", "int b;\n", "no trailing newline"]
        );
    }

    #[test]
    fn unreadable_file_yields_empty_sequence() {
        let tmp = assert_fs::TempDir::new().unwrap();
        assert_eq!(read_lines(&tmp.path().join("missing.c")), Vec::<String>::new());
    }

    #[test]
    fn non_utf8_content_falls_back_to_windows_1252() {
        let tmp = assert_fs::TempDir::new().unwrap();
        let file = tmp.child("latin1.c");
        file.write_binary(b"caf\xe9\n").unwrap();

        assert_eq!(read_lines(file.path()), vec!["café\n"]);
    }
}
