// testcat-core/src/lib.rs

// 1. Memory safety
#![deny(unsafe_code)]
// 2. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 3. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain (catalog model, loader port)
// Depends on nothing else in the crate.
pub mod domain;

// 2. Infrastructure (Adapters)
// Glob resolution, YAML loading, atomic output, configuration.
pub mod infrastructure;

// 3. Application (Use Cases)
// Orchestrates resolve -> load -> flatten -> write.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{FlattenReport, run_flatten};
pub use error::TestcatError;
pub use infrastructure::config::FlattenConfig;
