//! src/report.rs
//!
//! Serialises a [`GroupedVerses`] result. Verse lines are written verbatim,
//! so a report can be grepped against the input corpus.

use crate::{group::GroupedVerses, verse::Verse};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;
use tracing::debug;

/// Placeholder replaced by the bucket's word count in [`ReportLabels::other_header`].
pub const COUNT_PLACEHOLDER: &str = "{count}";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create `{path}`: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown report format `{0}` (expected `text` or `json`)")]
pub struct ParseReportFormatError(String);

impl FromStr for ReportFormat {
    type Err = ParseReportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ParseReportFormatError(s.to_owned())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        })
    }
}

/// Section headings of the text report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportLabels {
    pub majority_header: String,
    /// May contain `{count}`.
    pub other_header: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            majority_header: "مجموعه آیات اکثریت:".to_owned(),
            other_header: "مجموعه آیات با تعداد کلمات برابر {count}:".to_owned(),
        }
    }
}

impl ReportLabels {
    pub fn other_header_for(&self, word_count: usize) -> String {
        self.other_header
            .replace(COUNT_PLACEHOLDER, &word_count.to_string())
    }
}

#[derive(Serialize)]
struct JsonReport<'r> {
    majority_word_count: Option<usize>,
    majority: &'r [&'r Verse],
    other: Vec<JsonBucket<'r>>,
}

#[derive(Serialize)]
struct JsonBucket<'r> {
    word_count: usize,
    verses: &'r [&'r Verse],
}

/// Other buckets that make it into a report: two or more verses.
fn reportable<'g, 'a>(
    grouped: &'g GroupedVerses<'a>,
) -> impl Iterator<Item = (usize, &'g [&'a Verse])> {
    grouped
        .other
        .iter()
        .filter(|(_, verses)| verses.len() >= 2)
        .map(|(&count, verses)| (count, verses.as_slice()))
}

/// Write `grouped` to `sink` in the requested format.
#[tracing::instrument(skip_all, fields(format = %format))]
pub fn write_report<W: Write>(
    sink: &mut W,
    grouped: &GroupedVerses<'_>,
    labels: &ReportLabels,
    format: ReportFormat,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => write_text(sink, grouped, labels)?,
        ReportFormat::Json => write_json(sink, grouped)?,
    }
    debug!(verses = grouped.len(), "report written");
    Ok(())
}

fn write_text<W: Write>(
    sink: &mut W,
    grouped: &GroupedVerses<'_>,
    labels: &ReportLabels,
) -> io::Result<()> {
    writeln!(sink, "{}", labels.majority_header)?;
    for verse in &grouped.majority {
        writeln!(sink, "{verse}")?;
    }
    for (count, verses) in reportable(grouped) {
        writeln!(sink)?;
        writeln!(sink, "{}", labels.other_header_for(count))?;
        for verse in verses {
            writeln!(sink, "{verse}")?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(sink: &mut W, grouped: &GroupedVerses<'_>) -> Result<(), ReportError> {
    let report = JsonReport {
        majority_word_count: grouped.majority_word_count,
        majority: &grouped.majority,
        other: reportable(grouped)
            .map(|(word_count, verses)| JsonBucket { word_count, verses })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *sink, &report)?;
    writeln!(sink)?;
    Ok(())
}

/// Create (or truncate) `path` and write the report to it.
pub fn write_report_to_path(
    path: &Path,
    grouped: &GroupedVerses<'_>,
    labels: &ReportLabels,
    format: ReportFormat,
) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, grouped, labels, format)?;
    out.flush()?;
    Ok(())
}
