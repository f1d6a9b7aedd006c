//! # callvis-error
//!
//! Unified error handling for callvis.
//!
//! - **ErrorKind**: what went wrong (e.g. `InvalidFormat`, `IoFailed`)
//! - **Operation**: where it went wrong (e.g. `dot::render`), chained as
//!   the error travels outward
//! - **Context**: key/value details such as the offending path or option
//! - **Source**: the wrapped underlying error, if any
//!
//! callvis never retries. Sink and file errors are handed back to the caller
//! unchanged apart from added context.
//!
//! ## Usage
//!
//! ```rust
//! use callvis_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::config_invalid("nodesep", "must be non-negative")
//!         .with_operation("options::validate")
//!         .with_context("value", "-1"))
//! }
//!
//! assert_eq!(example().unwrap_err().kind(), ErrorKind::ConfigInvalid);
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using callvis Error
pub type Result<T> = std::result::Result<T, Error>;
