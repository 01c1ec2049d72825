//! src/alphabet.rs
//!
//! Owned letter classification used by every weight computation.
//!
//! The static [`SCRIPT_TABLE`](crate::script::SCRIPT_TABLE) covers the
//! built-in scripts; an [`Alphabet`] can also be assembled at runtime (from a
//! config file, for instance) so a different script is a matter of
//! substitution rather than code change.

use crate::script::ScriptEntry;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("letter `{0}` is listed as both a vowel and a consonant")]
    Overlap(char),

    #[error("diacritic range U+{0:04X}..=U+{1:04X} is empty")]
    EmptyRange(u32, u32),

    #[error("U+{0:04X} is not a valid Unicode scalar value")]
    InvalidCodePoint(u32),

    #[error("no static alphabet for script `{0}`")]
    UnknownScript(String),
}

/// How a single character counts towards a verse's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
    Other,
}

/// Inclusive block of combining marks that make up a diacritic pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiacriticRange {
    start: char,
    end: char,
}

impl DiacriticRange {
    pub fn new(start: char, end: char) -> Result<Self, AlphabetError> {
        if start > end {
            return Err(AlphabetError::EmptyRange(start as u32, end as u32));
        }
        Ok(Self { start, end })
    }

    /// Build a range from raw code points, as they appear in configuration.
    pub fn from_code_points(start: u32, end: u32) -> Result<Self, AlphabetError> {
        let s = char::from_u32(start).ok_or(AlphabetError::InvalidCodePoint(start))?;
        let e = char::from_u32(end).ok_or(AlphabetError::InvalidCodePoint(end))?;
        Self::new(s, e)
    }

    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    #[inline(always)]
    pub const fn start(&self) -> char {
        self.start
    }

    #[inline(always)]
    pub const fn end(&self) -> char {
        self.end
    }
}

/// Vowel and consonant letter sets plus the diacritic block.
///
/// Invariant: the two letter sets share no character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    vowels: Cow<'static, [char]>,
    consonants: Cow<'static, [char]>,
    diacritics: DiacriticRange,
}

impl Alphabet {
    pub fn new(
        vowels: impl Into<Cow<'static, [char]>>,
        consonants: impl Into<Cow<'static, [char]>>,
        diacritics: DiacriticRange,
    ) -> Result<Self, AlphabetError> {
        let vowels = vowels.into();
        let consonants = consonants.into();
        if let Some(&c) = vowels.iter().find(|v| consonants.contains(v)) {
            return Err(AlphabetError::Overlap(c));
        }
        Ok(Self {
            vowels,
            consonants,
            diacritics,
        })
    }

    /// Borrow the letter sets of a static table row.
    pub fn from_entry(entry: &'static ScriptEntry) -> Result<Self, AlphabetError> {
        Self::new(
            entry.vowels,
            entry.consonants,
            DiacriticRange::new(entry.diacritic_start, entry.diacritic_end)?,
        )
    }

    #[inline(always)]
    pub fn classify(&self, c: char) -> LetterClass {
        if self.vowels.contains(&c) {
            LetterClass::Vowel
        } else if self.consonants.contains(&c) {
            LetterClass::Consonant
        } else {
            LetterClass::Other
        }
    }

    #[inline(always)]
    pub fn is_diacritic(&self, c: char) -> bool {
        self.diacritics.contains(c)
    }

    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    pub fn diacritics(&self) -> DiacriticRange {
        self.diacritics
    }

    /// Replace the vowel set, re-checking disjointness.
    pub fn with_vowels(self, vowels: impl Into<Cow<'static, [char]>>) -> Result<Self, AlphabetError> {
        Self::new(vowels, self.consonants, self.diacritics)
    }

    /// Replace the consonant set, re-checking disjointness.
    pub fn with_consonants(
        self,
        consonants: impl Into<Cow<'static, [char]>>,
    ) -> Result<Self, AlphabetError> {
        Self::new(self.vowels, consonants, self.diacritics)
    }

    pub fn with_diacritics(mut self, diacritics: DiacriticRange) -> Self {
        self.diacritics = diacritics;
        self
    }
}
