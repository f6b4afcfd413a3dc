//! Table of contents extraction and insertion for markdown documents.
//!
//! A generated block is fenced by two HTML comment lines so a later run can
//! find and replace it:
//!
//! ```text
//! <!---mdtoc begin--->
//! * [Heading 1](#heading-1)
//!   * [Heading 2](#heading-2)
//! <!---mdtoc end--->
//! ```

mod generator;
mod parser;
mod slug;

use lazy_static::lazy_static;
use regex::Regex;

pub use generator::insert;
pub use parser::{extract, extract_from_reader};
pub use slug::slugify;

/// First line of a generated block
pub const TOC_BEGIN: &str = "<!---mdtoc begin--->";
/// Last line of a generated block
pub const TOC_END: &str = "<!---mdtoc end--->";
/// Appending this to a heading line keeps it out of the contents
pub const TOC_IGNORE: &str = "<!---mdtoc ignore--->";
/// Lines starting with this open or close a fenced code block
pub const CODE_FENCE: &str = "```";

lazy_static! {
    /// Non-title heading: two or more `#`, spaces, then the text
    static ref HEADING_REGEX: Regex = Regex::new(r"^(#{2,})[ ]+(.+)").unwrap();
}

/// Split a heading line into its `#` count and text
fn match_heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_REGEX.captures(line)?;
    let hashes = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str();
    Some((hashes, text))
}

/// Whether a line is one of the sentinel comments
fn is_sentinel(line: &str, sentinel: &str) -> bool {
    line.eq_ignore_ascii_case(sentinel)
}

/// Whether heading text carries the ignore marker, in any ASCII case
fn has_ignore_marker(text: &str) -> bool {
    text.to_ascii_lowercase().contains(TOC_IGNORE)
}

/// A single line in the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Nesting depth, `0` for `##` headings
    pub indent: usize,
    pub text: String,
    pub link: String,
}

impl Item {
    pub fn new(indent: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let link = slugify(&text);
        Self { indent, text, link }
    }

    /// Render as a markdown bullet, without line terminator
    pub fn to_markdown(&self) -> String {
        format!("{}* [{}](#{})", "  ".repeat(self.indent), self.text, self.link)
    }
}

/// Table of contents for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toc {
    pub items: Vec<Item>,
    pub config: crate::config::Config,
}

impl Toc {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            items: Vec::new(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Display for Toc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
