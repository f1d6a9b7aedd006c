//! Global graph settings interpolated into the document header.

use callvis_error::{Error, Result};

/// Default minimum edge length, in ranks.
pub const DEFAULT_MINLEN: u32 = 2;

/// Default separation between adjacent nodes, in inches.
pub const DEFAULT_NODESEP: f64 = 0.35;

/// Options for graph rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphOptions {
    /// Minimum edge length (`edge [minlen=...]`).
    pub minlen: u32,
    /// Node separation (`nodesep=...`). Must be finite and non-negative.
    pub nodesep: f64,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            minlen: DEFAULT_MINLEN,
            nodesep: DEFAULT_NODESEP,
        }
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minlen(mut self, minlen: u32) -> Self {
        self.minlen = minlen;
        self
    }

    pub fn with_nodesep(mut self, nodesep: f64) -> Self {
        self.nodesep = nodesep;
        self
    }

    /// Reject option values the layout engine cannot accept.
    pub fn validate(&self) -> Result<()> {
        if !self.nodesep.is_finite() || self.nodesep < 0.0 {
            return Err(Error::config_invalid(
                "nodesep",
                "node separation must be a finite non-negative number",
            )
            .with_operation("options::validate")
            .with_context("value", self.nodesep.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callvis_error::ErrorKind;

    #[test]
    fn test_defaults() {
        let opts = GraphOptions::default();
        assert_eq!(opts.minlen, 2);
        assert_eq!(opts.nodesep, 0.35);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_zero_is_valid() {
        let opts = GraphOptions::new().with_minlen(0).with_nodesep(0.0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_nodesep() {
        for bad in [-0.5, f64::NAN, f64::INFINITY] {
            let err = GraphOptions::new().with_nodesep(bad).validate().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        }
    }
}
