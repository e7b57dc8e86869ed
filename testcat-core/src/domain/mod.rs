pub mod catalog;
pub mod error;
pub mod ports;

// Handy re-exports to simplify imports elsewhere
pub use catalog::{CatalogEntry, TestCatalog, TestRecord};
pub use error::DomainError;
pub use ports::CatalogLoader;
