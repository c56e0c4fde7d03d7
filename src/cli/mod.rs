// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shoprank command-line interface.
//!
//! Three subcommands: `search` ranks a catalog dump against a query, `suggest`
//! prints the top-rated shelf, and `explain` shows what the ranker makes of a
//! query before any product is scored.

pub mod display;

use clap::{Parser, Subcommand};
use shoprank::{PriceOrder, SUGGESTION_COUNT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shoprank",
    about = "TF-IDF relevance ranking for storefront product search",
    version
)]
pub struct Cli {
    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a catalog JSON file against a query
    Search {
        /// Path to a JSON array of products
        catalog: PathBuf,

        /// Search query, filler phrases and all
        query: String,

        /// Maximum number of results (overrides the config file)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Secondary price ordering applied to the ranked page
        #[arg(long, value_enum, default_value_t = PriceOrder::Default)]
        sort: PriceOrder,

        /// Seed the re-ranking noise for repeatable output
        #[arg(long, conflicts_with = "no_jitter")]
        seed: Option<u64>,

        /// Disable the re-ranking noise entirely
        #[arg(long)]
        no_jitter: bool,

        /// JSON ranker config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the top-rated products of a catalog
    Suggest {
        /// Path to a JSON array of products
        catalog: PathBuf,

        /// Number of products to show
        #[arg(short, long, default_value_t = SUGGESTION_COUNT)]
        count: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the cleaned query and its extracted keywords
    Explain {
        /// Search query
        query: String,
    },
}
