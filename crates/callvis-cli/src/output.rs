//! Output generation (DOT documents).

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Instant;

use tracing::info;

use callvis_dot::{Graph, render};
use callvis_error::{Error, Result};

/// Render `graph` to `path`, or to stdout when no path is given.
pub fn write_dot_output(graph: &Graph, path: Option<&Path>) -> Result<()> {
    let render_start = Instant::now();

    match path {
        Some(path) => {
            let file = File::create(path).map_err(|err| {
                Error::from(err)
                    .with_operation("output::create")
                    .with_context("path", path.display().to_string())
            })?;
            render(graph, &mut BufWriter::new(file))
                .map_err(|err| err.with_context("path", path.display().to_string()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let stdout = io::stdout();
            render(graph, &mut stdout.lock())?;
        }
    }

    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );
    Ok(())
}
