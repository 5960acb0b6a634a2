//! Estate Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging initialization for the estate platform
//! workspace.
//!
//! # Example
//!
//! ```no_run
//! use estate_common::logging::{LogConfig, init_logging};
//!
//! fn main() -> estate_common::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{EstateError, Result};
