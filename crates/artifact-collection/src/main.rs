use std::{path::PathBuf, time::Duration};

use anyhow::{Context as _, Result};
use artifact_api::{
    models::{Lang, SearchQuery},
    Api, ApiConfig, FetchLimits,
};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod collection;
use collection::{dollars, CollectionTotals};

mod config;
use config::Config;

/// Prices a full Artifact card collection on the Steam Community Market.
#[derive(Parser, Debug)]
struct Args {
    /// Path to a json file overriding the built-in localization and deck settings
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(PathBuf),
        default_value = "collection.json"
    )]
    config: PathBuf,

    /// Market language, used both for fetching and for matching card names
    #[arg(short, long, default_value_t = Lang::default())]
    lang: Lang,

    /// Stop with an error after this many pages
    #[arg(long, default_value_t = 1000)]
    max_pages: u32,

    /// Stop with an error if fetching takes longer than this
    #[arg(long)]
    deadline_secs: Option<u64>,

    /// Timeout for a single page request
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;
    let table = config.locales.table(args.lang)?;

    let api = Api::with_config(ApiConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        ..Default::default()
    })?;
    let limits = FetchLimits {
        max_pages: Some(args.max_pages),
        deadline: args.deadline_secs.map(Duration::from_secs),
    };

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling fetch");
            interrupt.cancel();
        }
    });

    let query = SearchQuery {
        lang: args.lang,
        ..Default::default()
    };
    let items = api
        .fetch_all_with(&query, &limits, &cancel)
        .await
        .context("Failed to fetch items")?;
    info!("Number of all items: {}", items.len());

    let totals = CollectionTotals::tally(&items, table, &config);
    for (label, rarity) in [
        ("commons", &totals.common),
        ("uncommons", &totals.uncommon),
        ("rares", &totals.rare),
    ] {
        info!(
            "Price for all {} {} ({} cards): ${:.2}",
            rarity.items,
            label,
            rarity.cards,
            dollars(rarity.price)
        );
    }
    if !totals.unknown.is_empty() {
        warn!(
            count = totals.unknown.len(),
            items = ?totals.unknown,
            "Skipped items of unknown rarity"
        );
    }

    let total = dollars(totals.price());
    let tax = total * config.tax_rate;
    info!(
        "Price for full collection: ${:.2} (+ tax ${:.2} = ${:.2})",
        total,
        tax,
        total + tax
    );

    Ok(())
}
