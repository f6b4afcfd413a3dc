use crate::config::Config;
use crate::utils::error::{MdtocError, Result};

/// Validate the configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.with_heading {
        validate_heading_text(&config.heading_text)?;
    }
    Ok(())
}

/// The heading is written as a single `##` line
fn validate_heading_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(MdtocError::Config("heading text must not be empty".to_string()));
    }

    if text.contains('\n') || text.contains('\r') {
        return Err(MdtocError::Config(format!(
            "heading text must be a single line: {:?}", text
        )));
    }

    Ok(())
}
