//! Siting CLI - find the best place for a facility on a road network.
//!
//! # Commands
//!
//! - `siting solve <file>` - Report the graph center and every eccentricity
//! - `siting inspect <file>` - Summarize a graph file
//! - `siting input` - Type in a graph at the prompt
//! - `siting sample` - Print the built-in demo town
//!
//! # Examples
//!
//! ```bash
//! # Solve the demo town and draw it
//! siting solve --sample --dot town.dot
//!
//! # Solve a graph from stdin, JSON output
//! cat roads.txt | siting solve - --format json
//!
//! # One site per disconnected network
//! siting solve roads.txt --per-component
//!
//! # Enter a graph by hand, save it and solve it
//! siting input --output roads.txt && siting solve roads.txt
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod loader;
mod report;
mod sample;

use commands::{input, inspect, solve};
use config::{ReportFormat, SitingConfig};

/// Siting CLI - graph-center facility placement
#[derive(Parser)]
#[command(name = "siting")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file (default: ./siting.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the location(s) minimizing the worst-case travel distance
    Solve {
        /// Graph file, or `-` for stdin
        #[arg(required_unless_present = "sample")]
        file: Option<String>,

        /// Use the built-in demo town instead of a file
        #[arg(long, conflicts_with = "file")]
        sample: bool,

        /// Distance within which two eccentricities count as equal
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a Graphviz diagram
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Decimal places for distances in text reports
        #[arg(short, long)]
        precision: Option<usize>,

        /// Report a center for every connected network
        #[arg(long)]
        per_component: bool,
    },

    /// Summarize a graph file
    Inspect {
        /// Graph file, or `-` for stdin
        #[arg(required_unless_present = "sample")]
        file: Option<String>,

        /// Use the built-in demo town instead of a file
        #[arg(long, conflicts_with = "file")]
        sample: bool,
    },

    /// Enter a graph by hand and write it in graph file format
    Input {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the built-in demo town in graph file format
    Sample {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn print_banner() {
    eprintln!(
        "{} {}\n",
        "siting".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}

fn run(cli: Cli) -> error::CliResult<()> {
    match cli.command {
        Commands::Solve {
            file,
            sample,
            tolerance,
            format,
            output,
            dot,
            precision,
            per_component,
        } => {
            let config = SitingConfig::load(cli.config.as_deref())?;
            let options = solve::SolveOptions {
                tolerance,
                format,
                output,
                dot,
                precision,
                per_component,
            };
            solve::execute(file.as_deref(), sample, options, &config)
        }

        Commands::Inspect { file, sample } => inspect::execute(file.as_deref(), sample),

        Commands::Input { output } => input::execute(output.as_deref()),

        Commands::Sample { output } => commands::sample::execute(output.as_deref()),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "siting",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if !cli.quiet {
        print_banner();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_requires_input() {
        assert!(Cli::try_parse_from(["siting", "solve"]).is_err());
        assert!(Cli::try_parse_from(["siting", "solve", "--sample"]).is_ok());
        assert!(Cli::try_parse_from(["siting", "solve", "town.txt", "--sample"]).is_err());
    }

    #[test]
    fn test_solve_flags() {
        let args = "siting -v solve - --format json -t 0.01 --per-component";
        let cli = Cli::try_parse_from(args.split_whitespace()).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Solve {
                file,
                format,
                tolerance,
                per_component,
                ..
            } => {
                assert_eq!(file.as_deref(), Some("-"));
                assert_eq!(format, Some(ReportFormat::Json));
                assert_eq!(tolerance, Some(0.01));
                assert!(per_component);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_input_output_flag() {
        let cli = Cli::try_parse_from(["siting", "input", "-o", "roads.txt"]).unwrap();
        match cli.command {
            Commands::Input { output } => {
                assert_eq!(output, Some(PathBuf::from("roads.txt")));
            }
            _ => panic!("expected input"),
        }
    }
}
