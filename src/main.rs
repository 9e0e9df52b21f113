use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use doc_critic::report::to_json;
use doc_critic::signals::FixedTopics;
use doc_critic::{Config, CriticalAnalyzer, Document, Pipeline};

#[derive(Parser)]
#[command(
    name = "doc-critic",
    about = "Critical reading report for research documents",
    version
)]
struct Cli {
    /// Text files to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Title used for stdin input
    #[arg(long, default_value = "Untitled")]
    title: String,

    /// Source label used for stdin input
    #[arg(long, default_value = "stdin")]
    source: String,

    /// Topic label to use instead of classification (repeatable)
    #[arg(long = "topic")]
    topics: Vec<String>,

    /// YAML config file; overrides DOC_CRITIC_CONFIG_PATH
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print only the critical analysis
    #[arg(long)]
    critique_only: bool,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // stdout carries the JSON reports
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env_overrides();
            config
        }
        None => Config::from_env(),
    };
    let min_chars = config.min_text_chars;
    let pipeline = Pipeline::new(config)?.with_classifier(FixedTopics::new(cli.topics.clone()));

    let documents = if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        vec![Document::with_min_chars(
            &cli.title,
            &cli.source,
            &input,
            min_chars,
        )?]
    } else {
        cli.files
            .iter()
            .map(|path| {
                Document::from_path(path, min_chars)
                    .with_context(|| format!("failed to load {}", path.display()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let pretty = !cli.compact;
    for document in &documents {
        let json = if cli.critique_only {
            let report = CriticalAnalyzer::new(pipeline.patterns())
                .analyze(document.text(), &cli.topics);
            to_json(&report, pretty)?
        } else {
            to_json(&pipeline.analyze(document), pretty)?
        };
        println!("{json}");
    }

    Ok(())
}
