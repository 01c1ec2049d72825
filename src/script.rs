pub mod data;

pub use data::{ARA, FAS, SCRIPT_TABLE, all_scripts, from_code};

/// Identifier of a writing system with a known letter classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Script {
    pub code: &'static str,
    pub name: &'static str,
}

impl Script {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Static letter data for this script.
    ///
    /// Every `Script` constant is generated together with its table row, so
    /// the lookup only misses for a hand-built `Script` value.
    #[inline]
    pub fn entry(&self) -> Option<&'static ScriptEntry> {
        SCRIPT_TABLE.get(self.code)
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

pub const DEFAULT_SCRIPT: Script = ARA;

/// Static per-script letter data.
///
/// `vowels` and `consonants` are disjoint; `diacritic_start..=diacritic_end`
/// is the block of combining marks recorded in a verse's diacritic pattern.
#[derive(Clone, Copy, Debug)]
pub struct ScriptEntry {
    pub vowels: &'static [char],
    pub consonants: &'static [char],
    pub diacritic_start: char,
    pub diacritic_end: char,
}

impl ScriptEntry {
    #[inline(always)]
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    #[inline(always)]
    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    #[inline(always)]
    pub fn is_diacritic(&self, c: char) -> bool {
        (self.diacritic_start..=self.diacritic_end).contains(&c)
    }
}
