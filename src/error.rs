//! Error types for loading crawl input.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for reading and decoding a crawl input file.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be read.
    #[error("Failed to read input file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file was not valid crawl JSON.
    #[error("Failed to parse input file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input file parsed but contained no pages.
    #[error("Input file {path} contains no pages")]
    EmptyInput { path: PathBuf },
}
