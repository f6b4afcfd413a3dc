use log::{debug, info};
use std::io::Write;
use std::path::Path;

use mdtoc::config;
use mdtoc::markdown;
use mdtoc::utils::error::{MdtocError, Result};
use mdtoc::utils::fs;

use crate::cli::types::Cli;

/// Handle the generate command: read, extract, then preview or rewrite
pub fn handle_generate_command(cli: &Cli) -> Result<()> {
    let search_dir = cli
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = config::load_config(search_dir, cli.config.as_deref(), &cli.overrides())?;

    let document = fs::read_file(&cli.file)?;
    let toc = markdown::extract(&document, &config)?;
    debug!("Found {} headings in {}", toc.len(), cli.file.display());

    if cli.dry_run {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(toc.render().as_bytes()).map_err(MdtocError::Io)?;
        return Ok(());
    }

    // Nothing is written unless the whole document was rewritten
    let output = markdown::insert(&document, &toc, &config)?;

    let target = cli.output.as_deref().unwrap_or(cli.file.as_path());
    fs::write_file(target, &output)?;
    info!("Table of contents written to {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mdtoc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_generate_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("README.md");
        std::fs::write(&file, "# Title\n\n## Install\n\n## Usage\n").unwrap();

        handle_generate_command(&cli(&[file.to_str().unwrap()])).unwrap();

        let written = std::fs::read_to_string(&file).unwrap();
        assert_eq!(
            written,
            "# Title\n\n<!---mdtoc begin--->\n* [Install](#install)\n* [Usage](#usage)\n<!---mdtoc end--->\n## Install\n\n## Usage\n"
        );
    }

    #[test]
    fn test_existing_toc_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("README.md");
        let original = "<!---mdtoc begin--->\n* [Old](#old)\n<!---mdtoc end--->\n## New\n";
        std::fs::write(&file, original).unwrap();

        let err = handle_generate_command(&cli(&[file.to_str().unwrap()])).unwrap_err();
        assert!(err.is_existing_toc());
        assert_eq!(std::fs::read_to_string(&file).unwrap(), original);

        handle_generate_command(&cli(&[file.to_str().unwrap(), "--force"])).unwrap();
        assert!(std::fs::read_to_string(&file).unwrap().contains("* [New](#new)"));
    }

    #[test]
    fn test_output_override_and_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        let out = dir.path().join("out").join("doc.md");
        std::fs::write(&file, "## One\n").unwrap();

        handle_generate_command(&cli(&[file.to_str().unwrap(), "--dry-run"])).unwrap();
        assert!(!out.exists());

        handle_generate_command(&cli(&[
            file.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ]))
        .unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "## One\n");
        assert!(std::fs::read_to_string(&out).unwrap().starts_with("<!---mdtoc begin--->\n"));
    }

    #[test]
    fn test_config_file_next_to_document() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        std::fs::write(dir.path().join(".mdtoc.yml"), "with_heading: true\nheading_text: Index\n").unwrap();
        std::fs::write(&file, "## One\n").unwrap();

        handle_generate_command(&cli(&[file.to_str().unwrap()])).unwrap();
        let written = std::fs::read_to_string(&file).unwrap();
        assert!(written.contains("## Index <!---mdtoc ignore--->\n* [One](#one)\n"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing.md");
        let err = handle_generate_command(&cli(&[file.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, MdtocError::Io(_)));
    }
}
