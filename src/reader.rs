use crate::error::{FollowCheckError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read one export file into its raw lines, in file order.
///
/// Lines are returned untrimmed; trimming and classification belong to the
/// extractor. The file handle is released before this returns.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => FollowCheckError::NotFound {
            path: path.display().to_string(),
        },
        _ => FollowCheckError::Io(err),
    })?;

    let content = String::from_utf8(bytes).map_err(|_| FollowCheckError::Decode {
        path: path.display().to_string(),
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FollowCheckError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_lines_in_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("following.txt");
        fs::write(&path, "Search\nalice's profile picture\nalice\nRemove\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(
            lines,
            vec!["Search", "alice's profile picture", "alice", "Remove"]
        );
    }

    #[test]
    fn test_lines_are_not_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("following.txt");
        fs::write(&path, "  alice  \n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["  alice  "]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does_not_exist.txt");

        let error = read_lines(&path).unwrap_err();
        match error {
            FollowCheckError::NotFound { path } => {
                assert!(path.contains("does_not_exist.txt"));
            }
            other => panic!("expected NotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("followers.txt");
        fs::write(&path, [0xff, 0xfe, 0x41]).unwrap();

        let error = read_lines(&path).unwrap_err();
        assert!(matches!(error, FollowCheckError::Decode { .. }));
    }

    #[test]
    fn test_empty_file_yields_no_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("followers.txt");
        fs::write(&path, "").unwrap();

        assert!(read_lines(&path).unwrap().is_empty());
    }
}
