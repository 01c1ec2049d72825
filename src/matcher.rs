//! Twin-matching policies applied inside one word-count group.
//!
//! Two policies exist because the historical filter is vacuous: it checks a
//! verse's letter counts and diacritic pattern against lists that already
//! contain the verse itself, so every member of a group passes.
//!
//! * [`LiteralMatch`] reproduces that filter and is the default, keeping
//!   output identical to earlier reports.
//! * [`TwinMatch`] keeps a verse only when some *other* verse of the group has
//!   the same letter counts **and** the same diacritic pattern.

use crate::classify::VerseWeight;
use serde::Deserialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Decide which members of a word-count group qualify.
pub trait Matcher: Send + Sync {
    /// Human-readable name – used in logs.
    fn name(&self) -> &'static str;

    /// Indices (ascending) of the qualifying entries of `weights`.
    ///
    /// All entries share the same word count. Indices outside `weights` are
    /// dropped by the grouping engine.
    fn retain(&self, weights: &[VerseWeight]) -> Vec<usize>;
}

/// Containment of a verse's own features in the group-wide feature lists.
pub struct LiteralMatch;

impl Matcher for LiteralMatch {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn retain(&self, weights: &[VerseWeight]) -> Vec<usize> {
        let pairs: Vec<_> = weights.iter().map(|w| w.letters).collect();
        let patterns: Vec<_> = weights.iter().map(|w| &w.diacritics).collect();

        weights
            .iter()
            .enumerate()
            .filter(|(_, w)| pairs.contains(&w.letters) && patterns.contains(&&w.diacritics))
            .map(|(i, _)| i)
            .collect()
    }
}

/// At least one other verse shares both the letter counts and the pattern.
pub struct TwinMatch;

impl Matcher for TwinMatch {
    fn name(&self) -> &'static str {
        "twin"
    }

    fn retain(&self, weights: &[VerseWeight]) -> Vec<usize> {
        weights
            .iter()
            .enumerate()
            .filter(|&(i, w)| {
                weights.iter().enumerate().any(|(j, other)| {
                    i != j && other.letters == w.letters && other.diacritics == w.diacritics
                })
            })
            .map(|(i, _)| i)
            .collect()
    }
}

/// Config/CLI selector for the built-in matchers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Literal,
    Twin,
}

impl MatchMode {
    pub fn matcher(self) -> &'static dyn Matcher {
        match self {
            MatchMode::Literal => &LiteralMatch,
            MatchMode::Twin => &TwinMatch,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown match mode `{0}` (expected `literal` or `twin`)")]
pub struct ParseMatchModeError(String);

impl FromStr for MatchMode {
    type Err = ParseMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(MatchMode::Literal),
            "twin" => Ok(MatchMode::Twin),
            _ => Err(ParseMatchModeError(s.to_owned())),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.matcher().name())
    }
}
