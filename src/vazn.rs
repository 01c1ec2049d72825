use thiserror::Error;

use crate::{
    alphabet::AlphabetError,
    config::ConfigError,
    context::Context,
    group::{GroupStats, GroupedVerses, group_by_weight},
    loader::{LoadError, load_verses_from_path},
    matcher::{MatchMode, Matcher},
    report::{ReportError, ReportFormat, ReportLabels, write_report, write_report_to_path},
    script::{DEFAULT_SCRIPT, Script},
    verse::Verse,
};
use std::{io::Write, path::Path, sync::Arc};
use tracing::info;

#[derive(Debug, Error)]
pub enum VaznError {
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),
}

/// Load a chapter, group it by metrical weight, and report the result.
pub struct Vazn {
    ctx: Context,
    matcher: Arc<dyn Matcher>,
    labels: ReportLabels,
    format: ReportFormat,
}

impl Vazn {
    pub fn builder() -> VaznBuilder {
        VaznBuilder::default()
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    pub fn load_chapter(&self, input: &Path, chapter: &str) -> Result<Vec<Verse>, VaznError> {
        Ok(load_verses_from_path(input, chapter)?)
    }

    pub fn group<'a>(&self, verses: &'a [Verse]) -> GroupedVerses<'a> {
        group_by_weight(verses, &self.ctx, self.matcher.as_ref())
    }

    pub fn write<W: Write>(
        &self,
        sink: &mut W,
        grouped: &GroupedVerses<'_>,
    ) -> Result<(), VaznError> {
        write_report(sink, grouped, &self.labels, self.format)?;
        Ok(())
    }

    /// Full pipeline: `input` → chapter verses → groups → `output`.
    pub fn run(&self, input: &Path, chapter: &str, output: &Path) -> Result<GroupStats, VaznError> {
        let verses = self.load_chapter(input, chapter)?;
        let grouped = self.group(&verses);
        write_report_to_path(output, &grouped, &self.labels, self.format)?;
        info!(
            chapter,
            verses = grouped.stats.verses,
            retained = grouped.stats.retained,
            output = %output.display(),
            "analysis complete"
        );
        Ok(grouped.stats)
    }
}

pub struct VaznBuilder {
    script: Script,
    ctx: Option<Context>,
    matcher: Arc<dyn Matcher>,
    labels: ReportLabels,
    format: ReportFormat,
}

impl Default for VaznBuilder {
    fn default() -> Self {
        Self {
            script: DEFAULT_SCRIPT,
            ctx: None,
            matcher: Arc::new(crate::matcher::LiteralMatch),
            labels: ReportLabels::default(),
            format: ReportFormat::default(),
        }
    }
}

impl VaznBuilder {
    /// Use the static alphabet of `script`.
    pub fn script(mut self, script: Script) -> Self {
        self.script = script;
        self.ctx = None;
        self
    }

    /// Use a fully resolved context, including an injected alphabet.
    pub fn context(mut self, ctx: Context) -> Self {
        self.script = ctx.script;
        self.ctx = Some(ctx);
        self
    }

    pub fn matcher<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.matcher = Arc::new(matcher);
        self
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.matcher = match mode {
            MatchMode::Literal => Arc::new(crate::matcher::LiteralMatch),
            MatchMode::Twin => Arc::new(crate::matcher::TwinMatch),
        };
        self
    }

    pub fn labels(mut self, labels: ReportLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn build(self) -> Result<Vazn, VaznError> {
        let ctx = match self.ctx {
            Some(ctx) => ctx,
            None => Context::new(self.script)?,
        };
        Ok(Vazn {
            ctx,
            matcher: self.matcher,
            labels: self.labels,
            format: self.format,
        })
    }
}
