use crate::shared::Result;
use std::path::Path;

/// RequirementsReader port for loading requirements files
///
/// This port abstracts the file system access needed to read the base
/// list and the requirements file being pruned.
pub trait RequirementsReader {
    /// Reads the whole requirements file at `path`
    ///
    /// # Arguments
    /// * `path` - Path to a pip-style requirements file
    ///
    /// # Returns
    /// The raw file content, line terminators included
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid UTF-8
    fn read_requirements(&self, path: &Path) -> Result<String>;
}
