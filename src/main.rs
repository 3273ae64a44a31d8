mod analysis;
mod config;
mod export;
mod menu;
mod normalize;
mod ollama;
mod scraper;

use std::path::PathBuf;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::analysis::AnalysisOptions;
use crate::config::Config;
use crate::menu::MenuAction;
use crate::ollama::OllamaClient;
use crate::scraper::{CollectOptions, HttpFetcher, Property};

#[derive(Parser)]
#[command(author, version, about = "Scrape portalinmobiliario listings and analyze UF/m² ratios")]
struct Args {
    /// Listing search URL to paginate over
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum number of pages to fetch
    #[arg(long)]
    max_pages: Option<u32>,

    /// Maximum number of records to keep
    #[arg(long)]
    max_records: Option<usize>,

    /// Path for the CSV export (defaults to a timestamped name)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut cfg = Config::from_env()?;
    if let Some(base_url) = args.base_url {
        cfg.base_url = base_url;
    }
    if let Some(max_pages) = args.max_pages {
        cfg.max_pages = max_pages;
    }
    if let Some(max_records) = args.max_records {
        cfg.max_records = max_records;
    }

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    info!(
        base_url = %cfg.base_url,
        max_pages = cfg.max_pages,
        max_records = cfg.max_records,
        "Starting scrape"
    );

    let fetcher = HttpFetcher::new();
    let opts = CollectOptions {
        max_pages: cfg.max_pages,
        max_records: cfg.max_records,
        delay: cfg.delay(),
    };
    let properties = scraper::collect(&fetcher, &cfg.base_url, &opts, &cancel).await;

    if properties.is_empty() {
        warn!("No properties collected");
        return Ok(());
    }

    print_summary(&properties);

    loop {
        menu::print_menu();
        match menu::read_action()? {
            MenuAction::Analyze => {
                let client =
                    OllamaClient::new(&cfg.ollama_endpoint, &cfg.ollama_model, cfg.max_prompt_chars);
                match analysis::analyze(&client, &properties, &AnalysisOptions::default()).await {
                    Ok(answer) => println!("\nAnalysis:\n{answer}"),
                    Err(e) => warn!(error = %e, "Analysis failed"),
                }
            }
            MenuAction::Export => {
                let path = export::write_csv(&properties, args.output.as_deref())?;
                println!("\nWrote {}", path.display());
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn print_summary(properties: &[Property]) {
    println!("\n{} properties collected:", properties.len());
    for (i, prop) in properties.iter().enumerate() {
        println!("\n{}. {}", i + 1, prop.title);
        println!("   price:    {}", prop.price);
        println!("   area:     {}", prop.area);
        println!("   location: {}", prop.location);
        println!("   link:     {}", prop.link);
    }
}
