// Module declarations
mod cli;

fn main() {
    // Run the CLI
    std::process::exit(cli::run());
}
