use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use onpage_score::{ContentDocument, Result, ScoringConfig};
use tracing::{error, info, Level};

#[derive(Parser)]
#[command(
    name = "onpage-score",
    about = "Score the on-page SEO and answer-engine readiness of an HTML article",
    version
)]
struct Cli {
    /// HTML files to analyze (reads stdin if none provided)
    files: Vec<String>,

    /// Focus keyword
    #[arg(short, long)]
    keyword: Option<String>,

    /// Meta description
    #[arg(short, long)]
    meta: Option<String>,

    /// URL slug
    #[arg(short, long)]
    slug: Option<String>,

    /// First-party hostname for link classification (repeatable)
    #[arg(long = "host")]
    hosts: Vec<String>,

    /// JSON scoring config (site hosts, schema types, weights)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat each input as a JSON document with html/keyword/metaDescription/slug
    #[arg(long, default_value_t = false)]
    document: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ScoringConfig::from_json_file(path)?,
        None => ScoringConfig::default(),
    };
    for host in &cli.hosts {
        config = config.with_site_host(host.as_str());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        score(cli, &config, "<stdin>", &input)?;
    } else {
        for path in &cli.files {
            let input = std::fs::read_to_string(path)?;
            score(cli, &config, path, &input)?;
        }
    }
    Ok(())
}

fn score(cli: &Cli, config: &ScoringConfig, source: &str, input: &str) -> Result<()> {
    info!("Scoring {}", source);
    let doc = build_document(cli, input)?;
    let analysis = onpage_score::analyze(&doc, config);
    info!(
        seo = analysis.seo.total_score,
        llm = analysis.llm.total_score,
        "Scored {}",
        source
    );
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn build_document(cli: &Cli, input: &str) -> Result<ContentDocument> {
    if !cli.document {
        return Ok(ContentDocument::new(
            input,
            cli.keyword.clone().unwrap_or_default(),
            cli.meta.clone().unwrap_or_default(),
            cli.slug.clone().unwrap_or_default(),
        ));
    }
    let mut doc: ContentDocument = serde_json::from_str(input)?;
    if let Some(keyword) = &cli.keyword {
        doc.keyword = keyword.clone();
    }
    if let Some(meta) = &cli.meta {
        doc.meta_description = meta.clone();
    }
    if let Some(slug) = &cli.slug {
        doc.slug = slug.clone();
    }
    Ok(doc)
}
