use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use callvis::{CallvisOptions, GraphArgs, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "callvis",
    about = "callvis: render call graphs as Graphviz DOT",
    version
)]
pub struct Cli {
    /// JSON graph description to render
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// TOML config file with a [graph] table
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    graph: GraphArgs,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

pub fn main() -> ExitCode {
    let args = Cli::parse();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = CallvisOptions {
        input: args.input,
        config: args.config,
        output: args.output,
        graph: args.graph,
    };

    match run_main(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    }
}
