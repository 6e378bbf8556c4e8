use clap::{Parser, ValueEnum};
use graph_bfs_core::EdgeOrder;

/// Run breadth-first traversal and distance computation over the sample graph.
#[derive(Parser, Debug)]
#[command(name = "graph-bfs-demo", version, about)]
pub struct Cli {
    /// Where each new edge lands in its node's adjacency list
    #[arg(long, value_enum, default_value_t = EdgeOrderArg::Prepend)]
    pub edge_order: EdgeOrderArg,

    /// Payload value of the node to start from
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub source: i64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log filter (e.g. "trace" or "graph_bfs_core=debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrderArg {
    Prepend,
    Append,
}

impl From<EdgeOrderArg> for EdgeOrder {
    fn from(arg: EdgeOrderArg) -> Self {
        match arg {
            EdgeOrderArg::Prepend => EdgeOrder::Prepend,
            EdgeOrderArg::Append => EdgeOrder::Append,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["graph-bfs-demo"]).unwrap();
        assert_eq!(cli.edge_order, EdgeOrderArg::Prepend);
        assert_eq!(cli.source, 1);
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "graph-bfs-demo",
            "--edge-order",
            "append",
            "--source",
            "4",
            "--format",
            "json",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(EdgeOrder::from(cli.edge_order), EdgeOrder::Append);
        assert_eq!(cli.source, 4);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.log_json);
    }

    #[test]
    fn test_rejects_unknown_edge_order() {
        assert!(Cli::try_parse_from(["graph-bfs-demo", "--edge-order", "sideways"]).is_err());
    }
}
