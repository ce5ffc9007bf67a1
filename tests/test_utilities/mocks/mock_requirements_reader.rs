use deploy_utils::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock RequirementsReader serving in-memory files
#[derive(Default)]
pub struct MockRequirementsReader {
    files: HashMap<PathBuf, String>,
}

impl MockRequirementsReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl RequirementsReader for MockRequirementsReader {
    fn read_requirements(&self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            ToolError::FileReadError {
                path: path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into()
        })
    }
}
