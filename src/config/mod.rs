mod loader;
mod types;
mod validation;

pub use loader::{find_config_file, load_config};
pub use types::*;
pub use validation::validate_config;
