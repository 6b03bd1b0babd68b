mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{BrowseArgs, GraphArgs, ScreensArgs};

/// mm - browse migration records and workload dependency maps
#[derive(Parser)]
#[command(name = "mm")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging on stderr
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Filter, sort and page through one screen's records
  Browse(BrowseArgs),

  /// Build the workload dependency graph
  Graph(GraphArgs),

  /// List the browsable screens
  Screens(ScreensArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("migmap_lib=debug,mm=debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Browse(args) => cmd::cmd_browse(args).await,
    Commands::Graph(args) => cmd::cmd_graph(args).await,
    Commands::Screens(args) => cmd::cmd_screens(args),
  }
}
