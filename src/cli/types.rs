use clap::Parser;
use std::path::PathBuf;

use mdtoc::config::ConfigOverrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(about = "Generate a table of contents for an existing markdown document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown file to add contents to
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Replace an existing table of contents
    #[arg(short, long, default_value_t = false)]
    pub force: bool,

    /// Print the generated contents, but do not write to file
    #[arg(short, long, default_value_t = false)]
    pub dry_run: bool,

    /// Write the result here instead of overwriting FILE
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Add a heading line above the contents
    #[arg(long, default_value_t = false)]
    pub with_heading: bool,

    /// Text of the contents heading (defaults to "Contents")
    #[arg(long, value_name = "TEXT")]
    pub heading_text: Option<String>,

    /// Configuration file (defaults to .mdtoc.yml next to FILE)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Flags given on the command line; unset flags leave file values alone
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            force: self.force.then_some(true),
            with_heading: self.with_heading.then_some(true),
            heading_text: self.heading_text.clone(),
        }
    }
}
