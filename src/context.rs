// src/context.rs
// Script configuration threaded through loading, classification and grouping.

use crate::{
    alphabet::{Alphabet, AlphabetError},
    script::{DEFAULT_SCRIPT, Script},
};

/// Runtime context passed to every weight computation.
///
/// Contains:
/// - `script`: human identifier (for logging and reports)
/// - `alphabet`: the letter sets and diacritic block actually used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub script: Script,
    pub alphabet: Alphabet,
}

impl Context {
    /// Create a context using the canonical static data for a script.
    pub fn new(script: Script) -> Result<Self, AlphabetError> {
        let entry = script
            .entry()
            .ok_or_else(|| AlphabetError::UnknownScript(script.code().to_owned()))?;
        Ok(Self {
            script,
            alphabet: Alphabet::from_entry(entry)?,
        })
    }

    /// Create a context with an injected alphabet. `script` only labels it.
    pub fn with_alphabet(script: Script, alphabet: Alphabet) -> Self {
        Self { script, alphabet }
    }

    pub fn default_script() -> Result<Self, AlphabetError> {
        Self::new(DEFAULT_SCRIPT)
    }
}
