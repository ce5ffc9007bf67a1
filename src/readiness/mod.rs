/// Readiness domain - connection targets, retry timing and outcomes
/// for the database wait loop
pub mod domain;
