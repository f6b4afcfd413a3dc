pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(logging::log_level(cli.debug, cli.quiet));

    match commands::handle_generate_command(&cli) {
        Ok(()) => 0,
        Err(e) if e.is_existing_toc() => {
            log::error!("{}: {}", cli.file.display(), e);
            log::error!("Use --force to overwrite it");
            1
        }
        Err(e) => {
            log::error!("{}: {}", cli.file.display(), e);
            1
        }
    }
}
