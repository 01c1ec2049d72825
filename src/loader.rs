//! src/loader.rs
//!
//! Reads the pipe-delimited corpus and keeps the records of one chapter.

use crate::{
    unicode::is_word_separator,
    verse::{Verse, VerseError},
};
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("input is not valid UTF-8 (first invalid byte at offset {0})")]
    Utf8(usize),

    #[error(transparent)]
    Verse(#[from] VerseError),
}

/// Load every verse of `chapter` from a file.
pub fn load_verses_from_path(path: &Path, chapter: &str) -> Result<Vec<Verse>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_verses(file, chapter)
}

/// Load every verse of `chapter` from any reader, in input order.
///
/// A line belongs to the chapter when it starts with `"<chapter>|"`; other
/// lines are skipped. A matching line without a text field is an error.
/// No matching line at all yields an empty list.
#[tracing::instrument(skip_all, fields(chapter = %chapter))]
pub fn load_verses<R: Read>(mut reader: R, chapter: &str) -> Result<Vec<Verse>, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = decode(&bytes)?;
    let verses = parse_chapter(text, chapter)?;
    if verses.is_empty() {
        warn!("no verses found for chapter {chapter}");
    } else {
        debug!(count = verses.len(), "loaded verses");
    }
    Ok(verses)
}

/// Select and parse the lines of `chapter` from already-decoded text.
pub fn parse_chapter(text: &str, chapter: &str) -> Result<Vec<Verse>, VerseError> {
    let prefix = format!("{chapter}|");
    text.lines()
        .enumerate()
        .filter(|(_, line)| line.starts_with(&prefix))
        .map(|(i, line)| Verse::parse(line.trim_end_matches(is_word_separator), i + 1))
        .collect()
}

#[cfg(feature = "simd")]
#[inline]
fn decode(bytes: &[u8]) -> Result<&str, LoadError> {
    simdutf8::compat::from_utf8(bytes).map_err(|e| LoadError::Utf8(e.valid_up_to()))
}

#[cfg(not(feature = "simd"))]
#[inline]
fn decode(bytes: &[u8]) -> Result<&str, LoadError> {
    std::str::from_utf8(bytes).map_err(|e| LoadError::Utf8(e.valid_up_to()))
}
