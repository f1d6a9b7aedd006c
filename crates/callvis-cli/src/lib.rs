//! callvis command-line interface.
//!
//! Loads a JSON graph description, applies option overrides and writes the
//! DOT document.
pub mod config;
pub mod input;
pub mod options;
pub mod output;

use std::path::PathBuf;

use tracing::warn;

use callvis_dot::Graph;
use callvis_error::Result;

pub use config::{ConfigFile, resolve_options, resolve_title};
pub use input::GraphSpec;
pub use options::GraphArgs;
pub use output::write_dot_output;

/// Options for running callvis.
#[derive(Debug, Clone, Default)]
pub struct CallvisOptions {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub graph: GraphArgs,
}

/// Load the input and config and build the graph to render.
pub fn build_graph(opts: &CallvisOptions) -> Result<Graph> {
    let config = match &opts.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };

    let spec = GraphSpec::load(&opts.input)?;
    let options = resolve_options(&opts.graph, &config.graph, &spec.options)?;
    let title = resolve_title(&opts.graph, &config.graph, spec.title.clone());

    let mut graph = spec.into_graph()?.with_options(options);
    graph.title = title;

    for edge in graph.dangling_edges() {
        warn!(from = edge.from(), to = edge.to(), "edge endpoint not found in any cluster");
    }

    Ok(graph)
}

/// Main entry point
pub fn run_main(opts: &CallvisOptions) -> Result<()> {
    let graph = build_graph(opts)?;
    write_dot_output(&graph, opts.output.as_deref())
}
