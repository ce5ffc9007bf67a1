use super::{PackageName, RequirementLine};
use std::collections::HashSet;

/// Set of package names already provided by a base requirements list
///
/// Built once from the base file and only queried afterwards.
#[derive(Debug, Clone, Default)]
pub struct BaseNameSet {
    names: HashSet<PackageName>,
}

impl BaseNameSet {
    /// Collects the name of every classifiable line in `content`
    pub fn from_content(content: &str) -> Self {
        let names = content
            .lines()
            .filter_map(|line| RequirementLine::classify(line).package_name().cloned())
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
