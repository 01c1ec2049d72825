pub mod alphabet;
pub mod classify;
pub mod config;
pub mod context;
pub mod group;
pub mod loader;
pub mod matcher;
pub mod report;
pub mod script;
pub mod unicode;
pub mod vazn;
pub mod verse;

#[cfg(test)]
pub mod testing;

pub use alphabet::{Alphabet, DiacriticRange, LetterClass};
pub use classify::{DiacriticPattern, LetterCounts, VerseWeight, count_letters, extract_diacritics};
pub use config::Config;
pub use context::Context;
pub use group::{GroupStats, GroupedVerses, group_by_weight};
pub use loader::{load_verses, load_verses_from_path};
pub use matcher::{LiteralMatch, MatchMode, Matcher, TwinMatch};
pub use report::{ReportFormat, ReportLabels, write_report};
pub use script::{ARA, FAS, Script};
pub use vazn::{Vazn, VaznError};
pub use verse::Verse;
