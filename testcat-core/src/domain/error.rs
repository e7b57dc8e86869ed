// testcat-core/src/domain/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Catalog '{}' is not valid YAML: {message}", .path.display())]
    #[diagnostic(
        code(testcat::domain::yaml),
        help("Check your YAML syntax (indentation, quoting).")
    )]
    InvalidYaml { path: PathBuf, message: String },

    #[error("Catalog '{}' is malformed: {reason}", .path.display())]
    #[diagnostic(
        code(testcat::domain::shape),
        help("A catalog maps each class name to a list of method names.")
    )]
    MalformedCatalog { path: PathBuf, reason: String },

    #[error("Catalog '{}' could not be read", .path.display())]
    #[diagnostic(
        code(testcat::domain::unreadable),
        help("Check file permissions or path validity.")
    )]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
