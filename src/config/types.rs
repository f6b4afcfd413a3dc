use serde::{Deserialize, Serialize};

/// Heading text used when none is configured
pub const DEFAULT_HEADING_TEXT: &str = "Contents";

/// Rendering and insertion options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replace an existing table of contents instead of failing
    pub force: bool,
    /// Emit a heading line at the top of the generated block
    pub with_heading: bool,
    /// Text of that heading line
    pub heading_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            force: false,
            with_heading: false,
            heading_text: DEFAULT_HEADING_TEXT.to_string(),
        }
    }
}

/// Values that may override a loaded configuration, typically from the
/// command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub force: Option<bool>,
    pub with_heading: Option<bool>,
    pub heading_text: Option<String>,
}

impl Config {
    /// Apply overrides on top of this configuration
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(force) = overrides.force {
            self.force = force;
        }
        if let Some(with_heading) = overrides.with_heading {
            self.with_heading = with_heading;
        }
        if let Some(text) = &overrides.heading_text {
            self.heading_text = text.clone();
        }
    }
}
