use crate::requirements::domain::PackageName;

/// PruneResponse - Response DTO from the requirements pruning use case
#[derive(Debug, Clone)]
pub struct PruneResponse {
    /// Pruned requirements, ready to be presented verbatim
    pub content: String,
    /// Names whose lines were removed, in file order
    pub removed: Vec<PackageName>,
    /// Number of distinct names in the base list
    pub base_package_count: usize,
}

impl PruneResponse {
    pub fn new(content: String, removed: Vec<PackageName>, base_package_count: usize) -> Self {
        Self {
            content,
            removed,
            base_package_count,
        }
    }
}
