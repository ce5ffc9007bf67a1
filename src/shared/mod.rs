/// Shared kernel - error types, logging setup and common aliases
pub mod error;
pub mod logging;
mod result;

pub use result::Result;
