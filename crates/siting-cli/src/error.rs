//! Error types for the siting CLI.

use siting_graph::GraphError;
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be read.
    #[error("Cannot read graph from {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Neither an input file nor the sample graph was requested.
    #[error("No input graph: pass a FILE, `-` for stdin, or --sample")]
    MissingInput,

    /// Malformed graph input.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Graph input was well-formed but describes an invalid road.
    #[error("Rejected road at line {line}: {source}")]
    Edge {
        line: usize,
        #[source]
        source: GraphError,
    },

    /// Graph operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report rendering error.
    #[error("Report error: {0}")]
    Report(String),

    /// Node name cannot be written in the text exchange format.
    #[error("Node name {0:?} cannot be written in the graph file format")]
    UnwritableName(String),
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Report(e.to_string())
    }
}
