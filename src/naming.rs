//! File names derived from post titles.

const TITLE_PREFIX_CHARS: usize = 32;

/// First 32 characters of `title`, spaces turned into underscores, lowercased.
///
/// Nothing else is escaped: a `/` in the title stays a `/` and ends up as a
/// path separator on most filesystems.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .take(TITLE_PREFIX_CHARS)
        .collect::<String>()
        .replace(' ', "_")
        .to_lowercase()
}
