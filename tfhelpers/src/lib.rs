//! tfhelpers - building blocks for Terraform providers on tfplug
//!
//! Named schema attribute constructors and the configs behind them,
//! diagnostic formatting for API failures, value and timestamp conversions,
//! canned validator sets, shared resource configuration, and logging setup
//! for provider binaries.

pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod resource;
pub mod schema;
pub mod util;
pub mod validators;

// Re-exports for convenience
pub use error::{Error, Result};
pub use logging::{init_logging, LogLevel, LoggingConfig};
pub use resource::{BaseProvider, BaseResource, BaseResourceConfig};
