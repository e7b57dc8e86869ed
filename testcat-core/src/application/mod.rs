// testcat-core/src/application/mod.rs

pub mod flatten;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use testcat_core::application::run_flatten;`
// without knowing the internal file layout.

pub use flatten::{FlattenCounts, FlattenReport, flatten_catalogs, run_flatten};
