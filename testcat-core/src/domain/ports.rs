// testcat-core/src/domain/ports.rs

use crate::domain::catalog::TestCatalog;
use crate::domain::error::DomainError;
use std::path::Path;

/// Source of parsed catalogs, one file at a time.
pub trait CatalogLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<TestCatalog, DomainError>;
}
