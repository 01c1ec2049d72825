//! src/classify.rs
//!
//! Per-verse weight features: letter-class counts and the diacritic pattern.

use crate::{
    alphabet::{Alphabet, LetterClass},
    unicode::word_count,
};
use smallvec::SmallVec;
use std::{fmt, ops::Deref};

/// Number of vowel and consonant letters in a text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterCounts {
    pub vowels: usize,
    pub consonants: usize,
}

/// Count vowel and consonant letters. Characters in neither set are ignored.
pub fn count_letters(text: &str, alphabet: &Alphabet) -> LetterCounts {
    text.chars()
        .fold(LetterCounts::default(), |mut acc, c| {
            match alphabet.classify(c) {
                LetterClass::Vowel => acc.vowels += 1,
                LetterClass::Consonant => acc.consonants += 1,
                LetterClass::Other => {}
            }
            acc
        })
}

/// Ordered diacritic marks of a text, duplicates included.
///
/// A fully vocalised verse carries roughly one mark per letter, so the inline
/// capacity covers short verses without touching the heap.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DiacriticPattern(SmallVec<[char; 32]>);

impl DiacriticPattern {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl Deref for DiacriticPattern {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl FromIterator<char> for DiacriticPattern {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for DiacriticPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "U+{:04X}", *c as u32)?;
        }
        Ok(())
    }
}

/// Collect every character inside the alphabet's diacritic block, left to right.
pub fn extract_diacritics(text: &str, alphabet: &Alphabet) -> DiacriticPattern {
    text.chars().filter(|&c| alphabet.is_diacritic(c)).collect()
}

/// The three features whose joint equality defines "same metrical weight".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseWeight {
    pub word_count: usize,
    pub letters: LetterCounts,
    pub diacritics: DiacriticPattern,
}

impl VerseWeight {
    pub fn of(text: &str, alphabet: &Alphabet) -> Self {
        Self {
            word_count: word_count(text),
            letters: count_letters(text, alphabet),
            diacritics: extract_diacritics(text, alphabet),
        }
    }
}
