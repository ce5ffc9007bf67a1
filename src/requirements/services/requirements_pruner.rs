use crate::requirements::domain::{BaseNameSet, PackageName, RequirementLine};

/// Result of pruning one requirements file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedRequirements {
    /// Surviving lines, byte-for-byte, in their original order
    pub content: String,
    /// Names of the removed lines, in file order (may repeat)
    pub removed: Vec<PackageName>,
}

/// RequirementsPruner - removes requirements already satisfied by a base list
pub struct RequirementsPruner;

impl RequirementsPruner {
    /// Drops every line of `requirements` whose package name is in `base`.
    ///
    /// Line terminators are kept with the line they end, so the output is
    /// the input with the removed lines cut out and nothing else changed.
    pub fn prune(base: &BaseNameSet, requirements: &str) -> PrunedRequirements {
        let mut content = String::with_capacity(requirements.len());
        let mut removed = Vec::new();

        for line in requirements.split_inclusive('\n') {
            match RequirementLine::classify(line).package_name() {
                Some(name) if base.contains(name) => removed.push(name.clone()),
                _ => content.push_str(line),
            }
        }

        PrunedRequirements { content, removed }
    }
}
