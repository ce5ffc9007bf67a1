use crate::application::dto::{PruneRequest, PruneResponse};
use crate::ports::outbound::RequirementsReader;
use crate::requirements::domain::BaseNameSet;
use crate::requirements::services::RequirementsPruner;
use crate::shared::Result;

/// PruneRequirementsUseCase - removes requirements already provided by a base list
///
/// # Type Parameters
/// * `R` - RequirementsReader implementation
pub struct PruneRequirementsUseCase<R> {
    requirements_reader: R,
}

impl<R> PruneRequirementsUseCase<R>
where
    R: RequirementsReader,
{
    pub fn new(requirements_reader: R) -> Self {
        Self {
            requirements_reader,
        }
    }

    /// Executes the pruning use case
    ///
    /// Both files are read completely before anything is returned, so the
    /// caller may write the result over the requirements file itself.
    ///
    /// # Errors
    /// Returns an error if either file cannot be read.
    pub fn execute(&self, request: PruneRequest) -> Result<PruneResponse> {
        let base_content = self
            .requirements_reader
            .read_requirements(&request.base_path)?;
        let base = BaseNameSet::from_content(&base_content);
        tracing::debug!(
            path = %request.base_path.display(),
            packages = base.len(),
            "loaded base requirements"
        );

        let requirements = self
            .requirements_reader
            .read_requirements(&request.requirements_path)?;
        let pruned = RequirementsPruner::prune(&base, &requirements);

        for name in &pruned.removed {
            tracing::debug!(package = %name, "removed requirement provided by base");
        }

        Ok(PruneResponse::new(pruned.content, pruned.removed, base.len()))
    }
}
