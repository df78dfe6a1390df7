use clap::Parser;
use geo_report::{CrawlData, GeoScore, PipelineBuilder, PipelineError};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "geo-report",
    version,
    about = "Generate an AI citation readiness audit report as PDF"
)]
struct Cli {
    /// JSON array of crawled pages
    #[arg(long)]
    crawl: PathBuf,

    /// JSON score object from the scoring model
    #[arg(long)]
    score: PathBuf,

    /// Domain being audited, e.g. example.com
    #[arg(long)]
    domain: String,

    /// Output PDF path
    #[arg(long, short, default_value = "report.pdf")]
    output: PathBuf,

    /// Optional render configuration JSON (page size, margins, font sizes)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the synthesized report as JSON to this path
    #[arg(long)]
    report_json: Option<PathBuf>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PipelineError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    log::info!("Loading crawl data from {}", cli.crawl.display());
    let crawl: Vec<CrawlData> = read_json(&cli.crawl)?;
    log::info!("Loading scores from {}", cli.score.display());
    let score: GeoScore = read_json(&cli.score)?;

    let mut builder = PipelineBuilder::new();
    if let Some(config) = &cli.config {
        builder = builder.with_config_file(config)?;
    }
    let pipeline = builder.build()?;

    let report = pipeline.generate_to_file(&crawl, &score, &cli.domain, &cli.output)?;
    if let Some(path) = &cli.report_json {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        log::info!("Wrote report JSON to {}", path.display());
    }

    println!(
        "Generated {} for {} (score {}/100)",
        cli.output.display(),
        report.domain,
        report.executive_summary.score
    );
    Ok(())
}
