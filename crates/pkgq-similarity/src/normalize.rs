//! Text preprocessing shared by every similarity algorithm.
//!
//! The scorer normalizes both inputs exactly once before dispatching, so all
//! algorithms compare identically prepared text.

/// Normalizes text for comparison.
///
/// Trims the input, lowercases it (full Unicode case mapping) and collapses
/// every run of whitespace into a single ASCII space.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::normalize;
///
/// assert_eq!(normalize("  Zen   Theme\tDARK "), "zen theme dark");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }

    out
}

/// Splits text into word tokens on whitespace, hyphens and underscores.
///
/// Empty tokens (from leading, trailing or repeated separators) are dropped.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::tokenize;
///
/// let tokens: Vec<&str> = tokenize("zen-theme dark__mode").collect();
/// assert_eq!(tokens, ["zen", "theme", "dark", "mode"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|token| !token.is_empty())
}
