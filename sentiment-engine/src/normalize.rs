/// Longest text, in characters, sent for classification.
pub const MAX_TEXT_CHARS: usize = 500;

/// Shortest normalized text worth classifying.
pub const MIN_TEXT_CHARS: usize = 10;

/// Replace everything except ASCII word characters and whitespace with spaces, trim, and
/// truncate to [`MAX_TEXT_CHARS`].
///
/// A replaced character becomes one space per UTF-16 code unit, so characters outside the
/// Basic Multilingual Plane (most emoji) count twice toward both length limits.
pub fn normalize_text(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .flat_map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                std::iter::repeat(c).take(1)
            } else {
                std::iter::repeat(' ').take(c.len_utf16())
            }
        })
        .collect();

    replaced.trim().chars().take(MAX_TEXT_CHARS).collect()
}

/// Whether normalized text is too short to classify at all.
pub fn is_too_short(normalized: &str) -> bool {
    normalized.chars().count() < MIN_TEXT_CHARS
}
