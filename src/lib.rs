pub mod grid;
pub mod solutions;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use solutions::{Solution, ALL_SOLUTIONS};

pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Result is only correct if bytes represents a valid positive number without any additional
/// characters! Returns `None` if the number doesn't fit into a `usize`.
pub fn parse_usize_from_bytes(bytes: &[u8]) -> Option<usize> {
    bytes.iter().try_fold(0usize, |ret, b| {
        ret.checked_mul(10)?.checked_add((b - b'0') as usize)
    })
}

pub fn input_path(dir: &Path, day: usize) -> PathBuf {
    dir.join(format!("{}.txt", day))
}

pub fn load_input(dir: &Path, day: usize) -> Result<String> {
    let path = input_path(dir, day);
    log::debug!("loading input for day {} from {}", day, path.display());
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn default_input(day: usize) -> Result<String> {
    load_input(Path::new(DEFAULT_INPUT_DIR), day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usize() {
        assert_eq!(parse_usize_from_bytes(b"0"), Some(0));
        assert_eq!(parse_usize_from_bytes(b"467"), Some(467));
        assert_eq!(parse_usize_from_bytes(b""), Some(0));
        assert_eq!(
            parse_usize_from_bytes(usize::MAX.to_string().as_bytes()),
            Some(usize::MAX)
        );
        assert_eq!(parse_usize_from_bytes(b"123456789012345678901234"), None);
    }

    #[test]
    fn test_input_path() {
        assert_eq!(
            input_path(Path::new("inputs"), 3),
            Path::new("inputs").join("3.txt")
        );
        assert!(load_input(Path::new("does/not/exist"), 1).is_err());
    }
}
