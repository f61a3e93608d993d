//! alder CLI binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use alder::cli::{run_dump, run_number, run_print, ToolOptions};

/// Syntax-tree introspection for a C++-like front end.
#[derive(Parser)]
#[command(name = "alder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Show compiler-synthesized declarations in dump output.
    #[arg(long, global = true)]
    include_implicit: bool,

    /// Use the experimental definition-first instantiation ordering.
    #[arg(long, global = true)]
    definition_first_instantiations: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an indented pre-order outline of the tree.
    Print {
        /// Serialized tree (JSON)
        file: PathBuf,
    },

    /// Dump one detailed record per reachable node.
    Dump {
        /// Serialized tree (JSON)
        file: PathBuf,
    },

    /// Number the tree in visitation order and report totals.
    Number {
        /// Serialized tree (JSON)
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = ToolOptions {
        include_implicit: cli.include_implicit,
        definition_first: cli.definition_first_instantiations,
    };

    let result = match cli.command {
        Commands::Print { file } => run_print(&file),
        Commands::Dump { file } => run_dump(&file, &options),
        Commands::Number { file } => run_number(&file),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("alder: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
