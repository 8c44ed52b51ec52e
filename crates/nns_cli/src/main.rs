use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use nns_core::{Error, Result, SearchParameters};
use nns_search::input::{parse_entities, parse_extra_keywords};
use nns_search::{NewsApiClient, ScreeningPipeline};
use tracing::info;

mod export;
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Negative news screening for e-mail addresses and business names", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Screen a list of entities for negative news coverage
    Screen {
        /// File with one entity per line (e-mail or business name), "-" for stdin
        #[arg(long, default_value = "-")]
        entities: String,
        /// NewsAPI.org key; falls back to the NEWSAPI_KEY environment variable
        #[arg(long)]
        api_key: Option<String>,
        /// Additional negative keywords, comma-separated
        #[arg(long, default_value = "")]
        keywords: String,
        /// Look-back period in years
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=10))]
        lookback_years: u32,
        /// Max articles per entity
        #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..=100))]
        max_results: u32,
        /// Write the report as CSV to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the built-in negative keywords
    Keywords,
}

fn read_entities(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

async fn screen(
    entities_source: String,
    api_key: Option<String>,
    keywords: String,
    lookback_years: u32,
    max_results: u32,
    output: Option<PathBuf>,
) -> Result<()> {
    let api_key = api_key
        .or_else(|| std::env::var("NEWSAPI_KEY").ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            Error::InvalidInput(
                "a NewsAPI key is required (pass --api-key or set NEWSAPI_KEY)".to_string(),
            )
        })?;

    let entities = parse_entities(&read_entities(&entities_source)?);
    if entities.is_empty() {
        return Err(Error::InvalidInput(
            "at least one e-mail or business name is required".to_string(),
        ));
    }

    let extra_keywords = parse_extra_keywords(&keywords);
    let client = Arc::new(NewsApiClient::new(api_key)?);
    let pipeline = ScreeningPipeline::new(client, &extra_keywords);
    let params = SearchParameters::new(lookback_years, max_results);

    info!(
        "🕵️ Screening {} entit{} over the last {} year(s), {} keywords",
        entities.len(),
        if entities.len() == 1 { "y" } else { "ies" },
        lookback_years,
        pipeline.keywords().len()
    );

    let report = pipeline.run(&entities, &params).await?;

    for failure in &report.failures {
        eprintln!("⚠️ {}: {}", failure.entity, failure.message);
    }

    if report.rows.is_empty() {
        println!("🎉 No negative news found for any entries in the specified time window.");
    } else {
        println!("⚠️ {} negative match(es) found\n", report.rows.len());
        render::print_table(&report.rows);
    }

    if let Some(path) = output {
        export::write_csv(&path, &report.rows)?;
        info!("💾 Report written to {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            entities,
            api_key,
            keywords,
            lookback_years,
            max_results,
            output,
        } => screen(entities, api_key, keywords, lookback_years, max_results, output).await,
        Commands::Keywords => {
            for keyword in nns_search::keywords::DEFAULT_NEGATIVE_KEYWORDS {
                println!("{}", keyword);
            }
            Ok(())
        }
    }
}
