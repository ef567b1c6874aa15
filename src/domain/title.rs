//! Title derivation from note content.

/// Longest derived title, in characters, before the ellipsis is added.
pub const MAX_TITLE_CHARS: usize = 50;

/// Appended to a derived title that was cut short.
pub const ELLIPSIS: &str = "...";

/// Used when the first line of the content is blank.
pub const UNTITLED: &str = "Untitled Note";

/// Derives a title from the first line of `content`.
///
/// The first line is trimmed. A blank line yields [`UNTITLED`]; a line longer
/// than [`MAX_TITLE_CHARS`] characters is cut to that length and suffixed with
/// [`ELLIPSIS`].
///
/// # Examples
///
/// ```
/// use zettl::domain::derive_title;
///
/// assert_eq!(derive_title("Buy milk\nand eggs"), "Buy milk");
/// assert_eq!(derive_title("\nsecond line"), "Untitled Note");
/// ```
pub fn derive_title(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("").trim();

    if first_line.is_empty() {
        return UNTITLED.to_string();
    }

    match first_line.char_indices().nth(MAX_TITLE_CHARS) {
        Some((cut, _)) => format!("{}{}", &first_line[..cut], ELLIPSIS),
        None => first_line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_first_line() {
        assert_eq!(derive_title("Buy milk\nand eggs"), "Buy milk");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(derive_title("   Meeting notes  \nagenda"), "Meeting notes");
    }

    #[test]
    fn blank_first_line_is_untitled() {
        assert_eq!(derive_title("\nbody"), UNTITLED);
        assert_eq!(derive_title("    \nbody"), UNTITLED);
    }

    #[test]
    fn long_line_is_truncated_with_ellipsis() {
        let line = "x".repeat(80);
        let title = derive_title(&line);

        assert_eq!(title, format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn exactly_fifty_chars_is_untouched() {
        let line = "y".repeat(50);
        assert_eq!(derive_title(&line), line);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let line = "é".repeat(60);
        let title = derive_title(&line);

        assert_eq!(title.chars().count(), 53);
        assert!(title.starts_with(&"é".repeat(50)));
        assert!(title.ends_with(ELLIPSIS));
    }

    #[test]
    fn carriage_return_is_trimmed() {
        assert_eq!(derive_title("Windows line\r\nnext"), "Windows line");
    }
}
