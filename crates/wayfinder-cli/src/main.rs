use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::commands::interactive::run_interactive;
use wayfinder_cli::commands::nodes::handle_nodes_command;
use wayfinder_cli::commands::route::{handle_route_command, AlgorithmArg, RouteCommandArgs};
use wayfinder_cli::commands::load_map;
use wayfinder_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Uninformed route search over edge-list road maps")]
struct Cli {
    /// Map file (origin,destination,cost per line). Defaults to $WAYFINDER_MAP or ./route.csv.
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two node names.
    Route {
        /// Starting node name.
        #[arg(long = "from")]
        from: String,
        /// Destination node name.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Bfs)]
        algorithm: AlgorithmArg,
        /// Depth limit for depth-limited search.
        #[arg(long, default_value_t = 0)]
        depth_limit: usize,
        /// Depth increment for iterative deepening.
        #[arg(long, default_value_t = 1)]
        step_size: usize,
        /// Stop iterative deepening once the limit would exceed this depth.
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// List every node in the map.
    Nodes,
    /// Prompt for routes on stdin until asked to stop.
    Interactive,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = load_map(cli.map.as_deref())?;

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            depth_limit,
            step_size,
            max_depth,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
                depth_limit,
                step_size,
                max_depth,
            };
            handle_route_command(&graph, &args, cli.format)
        }
        Command::Nodes => handle_nodes_command(&graph, cli.format),
        Command::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_interactive(&graph, stdin.lock(), &mut stdout)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
