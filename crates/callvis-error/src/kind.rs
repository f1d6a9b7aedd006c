//! Error kinds for callvis operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Option values the layout engine cannot accept
    ConfigInvalid,

    /// Input the graph model cannot represent (e.g. duplicate sibling clusters)
    InvalidArgument,

    /// The output document could not be formatted into the buffer
    InvalidFormat,

    /// Structural limit exceeded (cluster nesting too deep)
    InvariantViolation,

    /// Graph description or config could not be decoded
    DeserializationFailed,

    FileNotFound,

    PermissionDenied,

    /// Any other IO failure, including writes rejected by an output sink
    IoFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
