use std::io::Cursor;

use log::{debug, warn};

use super::parser::Lines;
use super::{is_sentinel, match_heading, Toc, CODE_FENCE, TOC_BEGIN, TOC_END, TOC_IGNORE};
use crate::config::Config;
use crate::utils::error::{MdtocError, Result};

impl Toc {
    /// Render the complete block with the options it was extracted with
    pub fn render(&self) -> String {
        self.render_with(&self.config)
    }

    /// Render the complete block, sentinels included, one `\n` per line.
    /// The heading line follows `config`, not the extraction options.
    pub fn render_with(&self, config: &Config) -> String {
        let mut md = String::new();

        md.push_str(TOC_BEGIN);
        md.push('\n');

        if config.with_heading {
            md.push_str(&format!("## {} {}\n", config.heading_text, TOC_IGNORE));
        }

        for item in &self.items {
            md.push_str(&item.to_markdown());
            md.push('\n');
        }

        md.push_str(TOC_END);
        md.push('\n');
        md
    }
}

/// Rewriter state for the line being looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RewriteState {
    Normal,
    InFence,
    InOldToc,
}

/// Return a copy of `document` with the rendered table of contents inserted.
///
/// A previous block is replaced in place when `config.force` is set and
/// reported as [`MdtocError::ExistingToc`] otherwise. Without a previous
/// block, the new one goes right before the first non-title heading. A
/// document with no such heading comes back unchanged.
pub fn insert(document: &[u8], toc: &Toc, config: &Config) -> Result<Vec<u8>> {
    let block = toc.render_with(config).into_bytes();
    let mut out = Vec::with_capacity(document.len() + block.len());
    let mut state = RewriteState::Normal;
    let mut added = false;

    for (number, line) in Lines::new(Cursor::new(document)).enumerate() {
        let line = line.map_err(MdtocError::Scan)?;
        let text = line.text.as_str();

        state = match state {
            RewriteState::InOldToc => {
                if is_sentinel(text, TOC_END) {
                    if !added {
                        debug!("Replacing existing table of contents");
                        out.extend_from_slice(&block);
                        added = true;
                    } else {
                        debug!("Removed stale table of contents ending at line {}", number + 1);
                    }
                    RewriteState::Normal
                } else {
                    RewriteState::InOldToc
                }
            }
            RewriteState::InFence => {
                out.extend_from_slice(&line.raw);
                if text.starts_with(CODE_FENCE) {
                    RewriteState::Normal
                } else {
                    RewriteState::InFence
                }
            }
            RewriteState::Normal if is_sentinel(text, TOC_BEGIN) => {
                if !config.force {
                    return Err(MdtocError::ExistingToc);
                }
                debug!("Existing table of contents at line {}", number + 1);
                RewriteState::InOldToc
            }
            RewriteState::Normal if text.starts_with(CODE_FENCE) => {
                out.extend_from_slice(&line.raw);
                RewriteState::InFence
            }
            RewriteState::Normal => {
                if !added && match_heading(text).is_some() {
                    debug!("Inserting table of contents before line {}", number + 1);
                    out.extend_from_slice(&block);
                    added = true;
                }
                out.extend_from_slice(&line.raw);
                RewriteState::Normal
            }
        };
    }

    if state == RewriteState::InOldToc {
        return Err(MdtocError::UnterminatedToc);
    }

    if !added {
        warn!("No heading below the title found, table of contents not inserted");
    }

    Ok(out)
}
