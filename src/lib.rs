//! Generate a table of contents for an existing markdown document and
//! insert it back between marker comments.
//!
//! ```
//! use mdtoc::{config::Config, markdown};
//!
//! let document = b"# Title\n\n## Heading 1\n\n### Heading 2\n";
//! let config = Config::default();
//! let toc = markdown::extract(document, &config).unwrap();
//! let output = markdown::insert(document, &toc, &config).unwrap();
//!
//! assert!(String::from_utf8(output).unwrap().contains("  * [Heading 2](#heading-2)"));
//! ```

pub mod config;
pub mod markdown;
pub mod utils;

pub use utils::error::{MdtocError, Result};
