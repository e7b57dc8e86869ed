// testcat-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(testcat::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Failed to write output file '{}'", .path.display())]
    #[diagnostic(
        code(testcat::infra::write),
        help("Make sure the output directory exists and is writable.")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- GLOB PATTERNS ---
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(testcat::infra::pattern))]
    InvalidPattern { pattern: String, reason: String },
}
