// testcat-core/src/application/flatten.rs
//
// USE CASE: Flatten catalog files into a `Class#method` list.

use crate::domain::ports::CatalogLoader;
use crate::error::TestcatError;
use crate::infrastructure::config::FlattenConfig;
use crate::infrastructure::fs::OutputFile;
use crate::infrastructure::glob::resolve_patterns;
use crate::infrastructure::yaml::YamlCatalogLoader;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Running totals of a flatten pass.
///
/// `classes` counts every class key of every file, so a class listed in two
/// files counts twice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlattenCounts {
    pub files: usize,
    pub classes: usize,
    pub methods: usize,
}

/// Outcome of a complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenReport {
    pub output: PathBuf,
    pub counts: FlattenCounts,
}

/// Writes one `class#method` line per method of every catalog, in file order.
///
/// The first failing file aborts the pass; lines already written stay in `sink`.
pub fn flatten_catalogs<L, W>(
    loader: &L,
    files: &[PathBuf],
    sink: &mut W,
) -> Result<FlattenCounts, TestcatError>
where
    L: CatalogLoader + ?Sized,
    W: Write,
{
    let mut counts = FlattenCounts::default();

    for path in files {
        let catalog = loader.load(path)?;
        counts.files += 1;
        counts.classes += catalog.class_count();

        for record in catalog.records() {
            writeln!(sink, "{}", record)?;
            counts.methods += 1;
        }
    }

    Ok(counts)
}

/// Resolves the configured patterns and flattens every match into the output
/// file.
///
/// The output is truncated before any catalog is read, so an unwritable
/// destination fails first. A failing catalog leaves a partial file behind.
#[instrument(skip_all, fields(output = %config.output_file.display()))]
pub fn run_flatten(config: &FlattenConfig) -> Result<FlattenReport, TestcatError> {
    debug!(patterns = ?config.patterns, "Received paths");

    let files = resolve_patterns(&config.root, &config.patterns)?;
    debug!("Found {} YAML files", files.len());

    let mut output = OutputFile::create(config.output_path())?;
    let counts = flatten_catalogs(&YamlCatalogLoader, &files, &mut output)?;
    let output = output.finish()?;

    debug!(
        "Wrote {} test methods from {} classes to {}",
        counts.methods,
        counts.classes,
        output.display()
    );

    Ok(FlattenReport { output, counts })
}
