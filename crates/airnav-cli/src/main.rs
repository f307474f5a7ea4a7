use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airnav_lib::RouteAlgorithm;

mod commands;
mod source;

use source::NetworkSource;

#[derive(Parser, Debug)]
#[command(version, about = "Weighted-graph and airspace routing utilities")]
struct Cli {
    /// Load a Cartesian graph from a [NODES]/[SEGMENTS] text file.
    #[arg(long, global = true, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Load an airspace from its three flat files.
    #[arg(long, global = true, num_args = 3, value_names = ["NAV", "SEG", "AIRPORTS"])]
    airspace: Option<Vec<PathBuf>>,

    /// Use the built-in 12-node demonstration graph.
    #[arg(long, global = true)]
    demo: bool,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    #[value(name = "a-star")]
    AStar,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a shortest route between two points.
    Route {
        /// Starting point (name, or fix number for airspaces).
        #[arg(long)]
        from: String,
        /// Destination point.
        #[arg(long)]
        to: String,
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
        /// Points the route must not traverse (repeatable).
        #[arg(long)]
        avoid: Vec<String>,
    },
    /// List every point reachable from a start point.
    Reach {
        #[arg(long)]
        from: String,
    },
    /// Find the point closest to a coordinate (x/y, or longitude/latitude).
    Nearest {
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
    },
    /// Export the network, or one route through it, as KML.
    ExportKml {
        #[arg(long)]
        output: PathBuf,
        /// Export only the route from this point instead of the whole network.
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// Print a summary of the loaded network.
    Info,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = NetworkSource::load(
        cli.graph.as_deref(),
        cli.airspace.as_deref(),
        cli.demo,
    )?;

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            avoid,
        } => commands::route(&source, &from, &to, algorithm.into(), &avoid, cli.format),
        Command::Reach { from } => commands::reach(&source, &from, cli.format),
        Command::Nearest { x, y } => commands::nearest(&source, x, y, cli.format),
        Command::ExportKml { output, from, to } => {
            commands::export_kml(&source, &output, from.as_deref(), to.as_deref())
        }
        Command::Info => commands::info(&source, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
