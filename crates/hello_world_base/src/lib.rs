//! Foundational crate for the hello_world workspace: error handling and
//! tracing initialization shared by the other crates.

pub mod error;
pub mod tracing;

// Re-export commonly used types for convenience
pub use crate::tracing::{debug, error, info, init_tracing, instrument, trace, warn};
pub use error::{ErrorKind, HelloError, HelloResult, ResultExt};
