use std::collections::HashMap;
use std::io::{self, BufRead, Cursor};

use log::debug;

use super::{has_ignore_marker, match_heading, Item, Toc, CODE_FENCE};
use crate::config::Config;
use crate::utils::error::{MdtocError, Result};

/// Minimum number of `#` for a heading to be listed; `#` is the title
const MIN_LEVEL: usize = 2;

/// One line of a document, with and without its terminator
pub(super) struct Line {
    pub raw: Vec<u8>,
    pub text: String,
}

/// Iterator over the lines of a buffered source.
///
/// Unlike `BufRead::lines` it keeps the original bytes so copied lines can
/// be written back exactly, `\r\n` and missing final newline included.
pub(super) struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = Vec::new();
        match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => None,
            Ok(_) => {
                let mut end = raw.len();
                if raw[..end].ends_with(b"\n") {
                    end -= 1;
                }
                if raw[..end].ends_with(b"\r") {
                    end -= 1;
                }
                Some(match std::str::from_utf8(&raw[..end]) {
                    Ok(text) => {
                        let text = text.to_string();
                        Ok(Line { raw, text })
                    }
                    Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
                })
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Scanner state while looking for headings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InFence,
}

/// Extract table of contents items from an in-memory document
pub fn extract(document: &[u8], config: &Config) -> Result<Toc> {
    extract_from_reader(Cursor::new(document), config)
}

/// Extract table of contents items from any buffered line source.
///
/// Lines inside fenced code blocks are never headings, so shell comments in
/// code samples stay out of the contents. Headings carrying the ignore
/// marker are skipped.
pub fn extract_from_reader<R: BufRead>(reader: R, config: &Config) -> Result<Toc> {
    let mut toc = Toc::new(config.clone());
    let mut state = ScanState::Normal;

    for (number, line) in Lines::new(reader).enumerate() {
        let line = line.map_err(MdtocError::Scan)?;
        let text = line.text.as_str();

        state = match state {
            ScanState::Normal if text.starts_with(CODE_FENCE) => {
                debug!("Code block opens at line {}", number + 1);
                ScanState::InFence
            }
            ScanState::InFence if text.starts_with(CODE_FENCE) => {
                debug!("Code block closes at line {}", number + 1);
                ScanState::Normal
            }
            ScanState::InFence => ScanState::InFence,
            ScanState::Normal => {
                if let Some((hashes, heading)) = match_heading(text) {
                    if has_ignore_marker(heading) {
                        debug!("Ignoring heading at line {}: {}", number + 1, heading);
                    } else {
                        debug!("Heading at line {}: {}", number + 1, heading);
                        toc.items.push(Item::new(hashes - MIN_LEVEL, heading));
                    }
                }
                ScanState::Normal
            }
        };
    }

    update_repeat_links(&mut toc.items);
    Ok(toc)
}

/// Make repeated links unique.
///
/// The first occurrence keeps its link; later ones get `-1`, `-2`, ...
/// counted per original link, so a third `heading` becomes `heading-2`
/// rather than `heading-1-1`.
fn update_repeat_links(items: &mut [Item]) {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(items.len());

    for item in items.iter_mut() {
        match seen.get_mut(&item.link) {
            Some(count) => {
                let original = std::mem::take(&mut item.link);
                item.link = format!("{}-{}", original, count);
                *count += 1;
            }
            None => {
                seen.insert(item.link.clone(), 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(toc: &Toc) -> Vec<&str> {
        toc.items.iter().map(|i| i.link.as_str()).collect()
    }

    #[test]
    fn test_extract_headings() {
        let markdown = b"# Title\n\n## Heading 1\n\n### Heading 2";
        let toc = extract(markdown, &Config::default()).unwrap();

        assert_eq!(toc.len(), 2);
        assert_eq!(toc.items[0], Item {
            indent: 0,
            text: "Heading 1".to_string(),
            link: "heading-1".to_string(),
        });
        assert_eq!(toc.items[1], Item {
            indent: 1,
            text: "Heading 2".to_string(),
            link: "heading-2".to_string(),
        });
    }

    #[test]
    fn test_title_is_not_collected() {
        let toc = extract(b"# Only a title\n\nBody text.\n", &Config::default()).unwrap();
        assert!(toc.is_empty());
    }

    #[test]
    fn test_repeated_headings_are_numbered() {
        let markdown = b"## Heading\n## Heading\n### Heading\n## Other\n## Heading\n";
        let toc = extract(markdown, &Config::default()).unwrap();

        assert_eq!(
            links(&toc),
            vec!["heading", "heading-1", "heading-2", "other", "heading-3"]
        );
    }

    #[test]
    fn test_three_identical_headings() {
        let toc = extract(b"## Heading\n## Heading\n## Heading\n", &Config::default()).unwrap();
        assert_eq!(links(&toc), vec!["heading", "heading-1", "heading-2"]);
    }

    #[test]
    fn test_code_block_suppresses_headings() {
        let markdown = b"## Usage\n\n```sh\n# not a heading\n## also not a heading\n```\n\n## After\n";
        let toc = extract(markdown, &Config::default()).unwrap();

        assert_eq!(links(&toc), vec!["usage", "after"]);
    }

    #[test]
    fn test_fence_with_language_tag_closes() {
        let markdown = b"```rust\nfn main() {}\n```\n## Real\n";
        let toc = extract(markdown, &Config::default()).unwrap();
        assert_eq!(links(&toc), vec!["real"]);
    }

    #[test]
    fn test_ignored_heading_is_skipped() {
        let markdown = format!("## Contents {}\n## Kept\n", crate::markdown::toc::TOC_IGNORE);
        let toc = extract(markdown.as_bytes(), &Config::default()).unwrap();
        assert_eq!(links(&toc), vec!["kept"]);
    }

    #[test]
    fn test_ignore_marker_in_upper_case() {
        let markdown = b"## Contents <!---MDTOC IGNORE--->\n## Kept\n";
        let toc = extract(markdown, &Config::default()).unwrap();
        assert_eq!(links(&toc), vec!["kept"]);
    }

    #[test]
    fn test_crlf_is_not_part_of_text() {
        let toc = extract(b"## Windows\r\n### Line Endings\r\n", &Config::default()).unwrap();
        assert_eq!(toc.items[0].text, "Windows");
        assert_eq!(toc.items[1].link, "line-endings");
    }

    #[test]
    fn test_invalid_utf8_is_scan_error() {
        let err = extract(b"## Good\n## \xff\xfe\n", &Config::default()).unwrap_err();
        assert!(matches!(err, MdtocError::Scan(_)));
    }

    /// Yields one good line, then fails like a broken pipe or disk
    struct FailingReader {
        served: bool,
    }

    impl io::Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection lost"));
            }
            self.served = true;
            let line = b"## First\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn test_read_failure_is_scan_error() {
        let reader = io::BufReader::new(FailingReader { served: false });
        let err = extract_from_reader(reader, &Config::default()).unwrap_err();

        match err {
            MdtocError::Scan(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected scan error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_keeps_config() {
        let config = Config {
            with_heading: true,
            ..Config::default()
        };
        let toc = extract(b"## One\n", &config).unwrap();
        assert_eq!(toc.config, config);
    }
}
