use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use shoprank::{
    clean_query, extract_keywords, load_catalog, sort_by_price, top_rated, Jitter,
    LexiconTagger, PriceOrder, Product, RankOutcome, Ranker, RankerConfig,
};
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, pad_left, pad_right, truncate_text};
use cli::{Cli, Commands};

/// One output line: a product and, when it was ranked, its score.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(flatten)]
    product: &'a Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

impl AsRef<Product> for Row<'_> {
    fn as_ref(&self) -> &Product {
        self.product
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "shoprank=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            catalog,
            query,
            limit,
            sort,
            seed,
            no_jitter,
            config,
            json,
        } => {
            let mut config = match config {
                Some(path) => RankerConfig::from_json_file(&path)?,
                None => RankerConfig::default(),
            };
            if let Some(limit) = limit {
                config.max_results = limit;
            }
            if let Some(seed) = seed {
                config.jitter = Jitter::Seeded(seed);
            }
            if no_jitter {
                config.jitter = Jitter::Disabled;
            }
            run_search(&catalog, &query, config, sort, json)
        }
        Commands::Suggest {
            catalog,
            count,
            json,
        } => run_suggest(&catalog, count, json),
        Commands::Explain { query } => {
            run_explain(&query);
            Ok(())
        }
    }
}

fn run_search(
    catalog_path: &Path,
    query: &str,
    config: RankerConfig,
    sort: PriceOrder,
    json: bool,
) -> Result<()> {
    let ranker = Ranker::with_config(config).context("invalid ranker configuration")?;
    let catalog = load_catalog(catalog_path)?;

    let mut rows: Vec<Row> = match ranker.try_rank(query, &catalog) {
        Ok(RankOutcome::Ranked(scored)) => scored
            .into_iter()
            .map(|s| Row {
                product: s.product,
                score: Some(s.score),
            })
            .collect(),
        Ok(RankOutcome::Passthrough) => unranked(&catalog),
        Err(err) => {
            warn!(error = %err, "ranking failed, showing unranked catalog");
            unranked(&catalog)
        }
    };
    sort_by_price(&mut rows, sort);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let cleaned = clean_query(query);
    display::heading(&format!("{} results for \"{}\"", rows.len(), query));
    display::section_top(&format!("cleaned: \"{}\"  sort: {}", cleaned, sort));
    print_rows(&rows);
    display::section_bot();
    Ok(())
}

fn run_suggest(catalog_path: &Path, count: usize, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let suggested = top_rated(&catalog, count);
    let rows = unranked(&suggested);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    display::section_top("Suggested just for you");
    print_rows(&rows);
    display::section_bot();
    Ok(())
}

fn run_explain(query: &str) {
    let cleaned = clean_query(query);
    let keywords = extract_keywords(&LexiconTagger::new(), &cleaned);

    display::section_top("Query");
    display::row(&format!(" raw:      {}", query));
    display::row(&format!(" cleaned:  {}", cleaned));
    display::row(&format!(" keywords: {}", keywords.join(", ")));
    if cleaned.is_empty() {
        display::row(" (nothing left to rank: the full catalog would be returned)");
    }
    display::section_bot();
}

fn unranked(catalog: &[Product]) -> Vec<Row<'_>> {
    catalog
        .iter()
        .map(|product| Row {
            product,
            score: None,
        })
        .collect()
}

fn print_rows(rows: &[Row]) {
    if rows.is_empty() {
        display::row(" No results found.");
        return;
    }
    for (position, row) in rows.iter().enumerate() {
        let name = truncate_text(row.product.display_name(), 38);
        display::row(&format!(
            " {} {} {} {} {}",
            pad_left(&(position + 1).to_string(), 3),
            display::score_value(row.score),
            pad_right(&name, 38),
            pad_left(&display::price(row.product.price), 10),
            display::rating(row.product.rating, row.product.rating_count),
        ));
    }
}
