use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vazn::{Config, MatchMode, ReportFormat};

/// Find verses of a chapter that share word count, vowel/consonant letter
/// counts and diacritic pattern.
#[derive(Parser, Debug)]
#[command(name = "vazn", version)]
struct Args {
    /// TOML config file; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pipe-delimited corpus (`chapter|verse|text` per line)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report destination, overwritten
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Chapter identifier, matched against the first field
    #[arg(short, long)]
    chapter: Option<String>,

    /// Script code for the letter tables (ARA, FAS)
    #[arg(long)]
    script: Option<String>,

    /// `literal` keeps every verse of a multi-verse group, `twin` requires a
    /// true twin
    #[arg(long)]
    match_mode: Option<MatchMode>,

    /// Report format: text or json
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(chapter) = self.chapter {
            config.chapter = chapter;
        }
        if let Some(script) = self.script {
            config.script = script;
        }
        if let Some(mode) = self.match_mode {
            config.match_mode = mode;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    args.apply(&mut config);

    let vazn = config
        .builder()
        .context("resolving alphabet")?
        .build()
        .context("building analyzer")?;
    tracing::debug!(
        script = %vazn.context().script,
        matcher = vazn.matcher_name(),
        "configured"
    );

    vazn.run(&config.input, &config.chapter, &config.output)
        .with_context(|| {
            format!(
                "analysing chapter {} of {}",
                config.chapter,
                config.input.display()
            )
        })?;
    Ok(())
}
