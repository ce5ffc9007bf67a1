mod requirements_pruner;

pub use requirements_pruner::{PrunedRequirements, RequirementsPruner};
