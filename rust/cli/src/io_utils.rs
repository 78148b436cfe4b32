//! File I/O utilities for reading input lines and snapshot files.
//!
//! This module provides helper functions for file operations used across CLI commands:
//! - Reading from stdin (interactive confirmation)
//! - Reading and writing text files with automatic .zst (de)compression
//! - Ensuring parent directories exist before file writes
//!
//! ## Error Handling
//!
//! Functions return `Result` types with appropriate error messages. I/O errors
//! are converted to `String` so the snapshot store can log and move on.

use std::io::BufRead;
use std::path::Path;

/// Upper bound for a decompressed snapshot.
const MAX_DECOMPRESSED: usize = 8 * 1024 * 1024;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or read errors.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use lostcities_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn is_zst(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

/// Read text file with automatic .zst decompression detection.
///
/// UTF-8 BOM is stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use lostcities_cli::io_utils::read_text_auto;
/// use std::path::Path;
///
/// let plain = read_text_auto(Path::new("game_state.json")).unwrap();
/// let packed = read_text_auto(Path::new("game_state.json.zst")).unwrap();
/// ```
pub fn read_text_auto(path: &Path) -> Result<String, String> {
    let mut content = if is_zst(path) {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, MAX_DECOMPRESSED).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Write text file, compressing with Zstandard when the path ends in `.zst`.
pub fn write_text_auto(path: &Path, content: &str) -> Result<(), String> {
    if is_zst(path) {
        let comp = zstd::bulk::compress(content.as_bytes(), 0).map_err(|e| e.to_string())?;
        std::fs::write(path, comp).map_err(|e| e.to_string())
    } else {
        std::fs::write(path, content).map_err(|e| e.to_string())
    }
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use lostcities_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("saves/evening/game_state.json");
/// ensure_parent_dir(path).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string if present.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_with_whitespace() {
        let mut cursor = Cursor::new(b"  yes  \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("yes".to_string()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn test_strip_utf8_bom() {
        let mut s = "\u{feff}{}".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "{}");
    }

    #[test]
    fn test_zst_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json.zst");
        write_text_auto(&path, "{\"player1\":[]}").unwrap();
        let raw = std::fs::read(&path).unwrap();
        assert_ne!(raw, b"{\"player1\":[]}");
        assert_eq!(read_text_auto(&path).unwrap(), "{\"player1\":[]}");
    }

    #[test]
    fn test_read_missing_file_is_err() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_text_auto(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_ensure_parent_dir_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("subdir").join("file.txt");
        assert!(ensure_parent_dir(&nested_path).is_ok());
        assert!(temp_dir.path().join("subdir").exists());
    }

    #[test]
    fn test_ensure_parent_dir_no_parent() {
        assert!(ensure_parent_dir(Path::new("file.txt")).is_ok());
    }
}
