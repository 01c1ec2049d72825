// Word splitting for verse text.

// Information separators U+001C..=U+001F. `char::is_whitespace` leaves them
// out, but plain-text corpora exported from older tools use them between
// words, so they split words here as well.
#[inline(always)]
pub const fn is_information_separator(c: char) -> bool {
    matches!(c as u32, 0x1C..=0x1F)
}

#[inline(always)]
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || is_information_separator(c)
}

/// Tokens of `text` separated by runs of word separators.
#[inline]
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|w| !w.is_empty())
}

#[inline]
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_arabic_words() {
        assert_eq!(word_count("قَالَ يَا بُنَيَّ"), 3);
    }

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(word_count("  a \t b\n\nc  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \u{3000} "), 0);
    }

    #[test]
    fn unicode_spaces_split() {
        assert_eq!(word_count("a\u{00A0}b\u{2009}c"), 3);
        assert_eq!(word_count("a\u{001F}b"), 2);
    }

    #[test]
    fn zero_width_chars_do_not_split() {
        assert_eq!(word_count("a\u{200C}b"), 1);
    }
}
