/// Characters dropped from heading text when building a link
const STRIPPED: [char; 13] = [
    '/', ',', '.', '+', ':', ';', '`', '"', '\'', '{', '}', '(', ')',
];

/// Return the header link formatted version of heading text.
///
/// Lowercases ASCII letters, turns spaces into hyphens and drops
/// punctuation that renderers leave out of anchors. Underscores and
/// non-ASCII characters pass through unchanged.
///
/// ex. `Header One Two` = `header-one-two`
pub fn slugify(text: &str) -> String {
    text.chars()
        .filter(|c| !STRIPPED.contains(c))
        .map(|c| if c == ' ' { '-' } else { c.to_ascii_lowercase() })
        .collect()
}
