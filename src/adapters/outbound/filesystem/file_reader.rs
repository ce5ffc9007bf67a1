use crate::ports::outbound::RequirementsReader;
use crate::shared::error::ToolError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading requirements files from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementsReader for FileSystemReader {
    fn read_requirements(&self, path: &Path) -> Result<String> {
        tracing::debug!(path = %path.display(), "reading requirements file");

        fs::read_to_string(path).map_err(|e| {
            ToolError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_requirements_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("requirements.txt");
        fs::write(&path, "requests==2.31.0\r\nflask\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_requirements(&path).unwrap();

        assert_eq!(content, "requests==2.31.0\r\nflask\n");
    }

    #[test]
    fn test_read_requirements_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let reader = FileSystemReader::new();
        let result = reader.read_requirements(&path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read file"));
        assert!(err_string.contains("missing.txt"));
    }

    #[test]
    fn test_read_requirements_directory() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::default();
        assert!(reader.read_requirements(temp_dir.path()).is_err());
    }

    #[test]
    fn test_read_requirements_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, b'\n']).unwrap();

        let reader = FileSystemReader::new();
        assert!(reader.read_requirements(&path).is_err());
    }
}
