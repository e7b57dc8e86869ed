// testcat-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TestcatError {
    // --- DOMAIN ERRORS (catalog shape, YAML syntax) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, patterns) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Keeps `?` usable on raw io calls without a duplicate enum variant
impl From<std::io::Error> for TestcatError {
    fn from(err: std::io::Error) -> Self {
        TestcatError::Infrastructure(InfrastructureError::Io(err))
    }
}
