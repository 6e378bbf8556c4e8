//! graph-bfs-demo: build the sample graph, print BFS order and distances.

mod cli;
mod logging;
mod sample;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, OutputFormat};

/// Runtime failure.
const EXIT_FAILURE: u8 = 1;
/// Bad flags or arguments.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("error: failed to initialize logging: {}", e);
        return ExitCode::from(EXIT_FAILURE);
    }

    let graph = match sample::sample_graph(cli.edge_order.into()) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        edge_order = ?graph.edge_order(),
        "sample graph built"
    );

    let Some(source) = graph.find_by_value(cli.source) else {
        eprintln!("error: no node with value {} in the sample graph", cli.source);
        return ExitCode::from(EXIT_USAGE);
    };

    let report = match sample::run(&graph, source) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match cli.format {
        OutputFormat::Human => print!("{}", report.render_human()),
        OutputFormat::Json => match report.render_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(EXIT_FAILURE);
            }
        },
    }

    ExitCode::SUCCESS
}
