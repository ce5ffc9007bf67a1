pub mod base_name_set;
pub mod package_name;
pub mod requirement_line;

pub use base_name_set::BaseNameSet;
pub use package_name::{normalize_name, PackageName};
pub use requirement_line::RequirementLine;
