// testcat/src/cli.rs
//
// Single source of truth for the CLI definition (Clap structs).

use clap::Parser;
use std::path::PathBuf;
use testcat_core::FlattenConfig;
use testcat_core::infrastructure::config::DEFAULT_OUTPUT_FILE;

#[derive(Parser, Debug)]
#[command(name = "testcat")]
#[command(about = "Convert the test catalog to a single text file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to module YAML files. Glob patterns are supported (repeatable)
    #[arg(long = "path", value_name = "PATTERN")]
    pub paths: Vec<String>,

    /// Output file location
    #[arg(long, env = "TESTCAT_OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,
}

impl Cli {
    /// Patterns and output are resolved against the working directory.
    pub fn into_config(self) -> FlattenConfig {
        FlattenConfig::new(".", self.paths, self.output_file)
    }
}
