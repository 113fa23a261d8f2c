//! Padding helpers for fixed-width output.
//!
//! Lengths are counted in characters. A text longer than the target length is
//! cut to its first `length` characters on both sides, so a padded field never
//! overflows its span.

/// Pads `text` on the left with `fill` up to `length` characters.
///
/// # Examples
///
/// ```rust
/// use line_record::padding::pad_left;
///
/// assert_eq!(pad_left("25", 3, '0'), "025");
/// assert_eq!(pad_left("2025", 3, '0'), "202");
/// ```
#[must_use]
pub fn pad_left(text: &str, length: usize, fill: char) -> String {
    let count = text.chars().count();
    if count >= length {
        return truncate(text, length);
    }
    let mut out = String::with_capacity(text.len() + (length - count) * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(length - count));
    out.push_str(text);
    out
}

/// Pads `text` on the right with `fill` up to `length` characters.
///
/// # Examples
///
/// ```rust
/// use line_record::padding::pad_right;
///
/// assert_eq!(pad_right("Ann", 6, ' '), "Ann   ");
/// assert_eq!(pad_right("Annabelle", 6, ' '), "Annabe");
/// ```
#[must_use]
pub fn pad_right(text: &str, length: usize, fill: char) -> String {
    let count = text.chars().count();
    if count >= length {
        return truncate(text, length);
    }
    let mut out = String::with_capacity(text.len() + (length - count) * fill.len_utf8());
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(length - count));
    out
}

fn truncate(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_is_unchanged() {
        assert_eq!(pad_left("abc", 3, '0'), "abc");
        assert_eq!(pad_right("abc", 3, ' '), "abc");
    }

    #[test]
    fn test_empty_text_is_all_fill() {
        assert_eq!(pad_left("", 4, '0'), "0000");
        assert_eq!(pad_right("", 2, '.'), "..");
    }

    #[test]
    fn test_truncation_counts_characters() {
        assert_eq!(pad_right("héllo", 2, ' '), "hé");
        assert_eq!(pad_left("ñ", 3, 'ü'), "üüñ");
    }
}
