//! src/config.rs
//!
//! TOML configuration. Every field is optional; an empty file reproduces the
//! reference run over chapter 12 of `quran.txt`.
//!
//! ```toml
//! input = "quran.txt"
//! output = "similar_weight_verses_yusuf.txt"
//! chapter = "12"
//! script = "ARA"
//! match_mode = "twin"
//! format = "text"
//!
//! [labels]
//! majority_header = "Majority:"
//! other_header = "Word count {count}:"
//!
//! [alphabet]
//! vowels = "اوي"
//! diacritic_start = 0x064B
//! diacritic_end = 0x0652
//! ```

use crate::{
    alphabet::{AlphabetError, DiacriticRange},
    context::Context,
    matcher::MatchMode,
    report::{ReportFormat, ReportLabels},
    script,
    vazn::VaznBuilder,
};
use serde::Deserialize;
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_INPUT: &str = "quran.txt";
pub const DEFAULT_OUTPUT: &str = "similar_weight_verses_yusuf.txt";
pub const DEFAULT_CHAPTER: &str = "12";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown script `{0}`")]
    UnknownScript(String),

    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),
}

/// Replacement letter sets and diacritic block. Omitted fields keep the
/// selected script's values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlphabetConfig {
    pub vowels: Option<String>,
    pub consonants: Option<String>,
    pub diacritic_start: Option<u32>,
    pub diacritic_end: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub chapter: String,
    pub script: String,
    pub match_mode: MatchMode,
    pub format: ReportFormat,
    pub labels: ReportLabels,
    pub alphabet: Option<AlphabetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            chapter: DEFAULT_CHAPTER.to_owned(),
            script: script::DEFAULT_SCRIPT.code().to_owned(),
            match_mode: MatchMode::default(),
            format: ReportFormat::default(),
            labels: ReportLabels::default(),
            alphabet: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Resolve the script and apply any alphabet override.
    pub fn context(&self) -> Result<Context, ConfigError> {
        let script = script::from_code(&self.script)
            .ok_or_else(|| ConfigError::UnknownScript(self.script.clone()))?;
        let ctx = Context::new(script)?;
        let Some(over) = &self.alphabet else {
            return Ok(ctx);
        };

        let mut alphabet = ctx.alphabet;
        if let Some(vowels) = &over.vowels {
            alphabet = alphabet.with_vowels(vowels.chars().collect::<Vec<_>>())?;
        }
        if let Some(consonants) = &over.consonants {
            alphabet = alphabet.with_consonants(consonants.chars().collect::<Vec<_>>())?;
        }
        if over.diacritic_start.is_some() || over.diacritic_end.is_some() {
            let current = alphabet.diacritics();
            let range = DiacriticRange::from_code_points(
                over.diacritic_start.unwrap_or(current.start() as u32),
                over.diacritic_end.unwrap_or(current.end() as u32),
            )?;
            alphabet = alphabet.with_diacritics(range);
        }
        Ok(Context::with_alphabet(script, alphabet))
    }

    /// A [`VaznBuilder`] carrying this configuration's analysis settings.
    pub fn builder(&self) -> Result<VaznBuilder, ConfigError> {
        Ok(VaznBuilder::default()
            .context(self.context()?)
            .match_mode(self.match_mode)
            .labels(self.labels.clone())
            .format(self.format))
    }
}
