//! src/verse.rs
//!
//! A verse is one `chapter|number|text` record of the corpus file. The
//! original line is kept verbatim because reports echo it unchanged; the
//! fields are byte spans into it.

use memchr::memchr;
use serde::{Serialize, Serializer};
use std::{fmt, ops::Range};
use thiserror::Error;

pub const FIELD_DELIMITER: u8 = b'|';

/// Position-dependent fields of a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Chapter,
    Number,
    Text,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Chapter => "chapter",
            Field::Number => "verse number",
            Field::Text => "verse text",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerseError {
    #[error("line {line_no}: missing {field} field in `{line}`")]
    MissingField {
        line_no: usize,
        field: Field,
        line: String,
    },
}

/// An immutable verse record.
///
/// The text field is the third `|`-separated segment only. Anything after a
/// third delimiter is ignored by the analysis but stays in [`Verse::line`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verse {
    line: String,
    number: Range<usize>,
    text: Range<usize>,
}

impl Verse {
    /// Parse a record line. `line_no` is 1-based and only used in errors.
    pub fn parse(line: impl Into<String>, line_no: usize) -> Result<Self, VerseError> {
        let line = line.into();
        let bytes = line.as_bytes();

        let missing = |field| VerseError::MissingField {
            line_no,
            field,
            line: line.clone(),
        };

        let first = memchr(FIELD_DELIMITER, bytes).ok_or_else(|| missing(Field::Number))?;
        let number_start = first + 1;
        let second = memchr(FIELD_DELIMITER, &bytes[number_start..])
            .map(|i| number_start + i)
            .ok_or_else(|| missing(Field::Text))?;
        let text_start = second + 1;
        let text_end = memchr(FIELD_DELIMITER, &bytes[text_start..])
            .map_or(bytes.len(), |i| text_start + i);

        Ok(Self {
            number: number_start..second,
            text: text_start..text_end,
            line,
        })
    }

    #[inline]
    pub fn chapter(&self) -> &str {
        &self.line[..self.number.start - 1]
    }

    #[inline]
    pub fn number(&self) -> &str {
        &self.line[self.number.clone()]
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.line[self.text.clone()]
    }

    /// The full record as it appeared in the input, trailing whitespace removed.
    #[inline]
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

impl Serialize for Verse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.line)
    }
}
