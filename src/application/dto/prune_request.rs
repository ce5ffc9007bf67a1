use std::path::PathBuf;

/// PruneRequest - Request DTO for the requirements pruning use case
#[derive(Debug, Clone)]
pub struct PruneRequest {
    /// Requirements already provided (e.g. by a base image)
    pub base_path: PathBuf,
    /// Requirements file to prune
    pub requirements_path: PathBuf,
}

impl PruneRequest {
    pub fn new(base_path: PathBuf, requirements_path: PathBuf) -> Self {
        Self {
            base_path,
            requirements_path,
        }
    }
}
