//! Command-line options for graph rendering.

use clap::Args;

/// Overrides for the graph header. Unset values fall back to the config
/// file, then the input document.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Graph title (the `label` of the digraph)
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Minimum edge length in ranks
    #[arg(long, value_name = "N")]
    pub minlen: Option<u32>,

    /// Minimum space between adjacent nodes in the same rank, in inches
    #[arg(long, value_name = "INCHES")]
    pub nodesep: Option<f64>,
}

impl GraphArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_minlen(mut self, minlen: u32) -> Self {
        self.minlen = Some(minlen);
        self
    }

    pub fn with_nodesep(mut self, nodesep: f64) -> Self {
        self.nodesep = Some(nodesep);
        self
    }
}
