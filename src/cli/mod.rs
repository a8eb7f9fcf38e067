// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hitmark command-line interface.
//!
//! Four subcommands: `match` to highlight a query in a document, `tokenize`
//! to show how a query is split, `similarity` to compare two strings with
//! every metric, and `config` to print the effective configuration after an
//! override file is applied.

pub mod display;

use clap::{Parser, Subcommand};
use hitmark::SimilarityAlgorithm;

#[derive(Parser)]
#[command(
    name = "hitmark",
    about = "Fuzzy phrase matching and highlight scoring for search hits",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Highlight a query in a document
    Match {
        /// Search query
        query: String,

        /// Document text (reads --file or stdin when omitted)
        document: Option<String>,

        /// Read the document from a file
        #[arg(short, long, conflicts_with = "document")]
        file: Option<String>,

        /// JSON file with configuration overrides
        #[arg(short, long)]
        config: Option<String>,

        /// Words that only count inside a combination (comma-separated)
        #[arg(long, value_delimiter = ',')]
        combination_only: Vec<String>,

        /// Print raw combination matches instead of classified spans
        #[arg(long)]
        raw: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how a query is tokenized
    Tokenize {
        /// Text to tokenize
        text: String,

        /// JSON file with configuration overrides
        #[arg(short, long)]
        config: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare two strings with the similarity metrics
    Similarity {
        /// Search string
        a: String,

        /// Target string
        b: String,

        /// Only run this metric (all three by default)
        #[arg(short, long, value_enum)]
        algorithm: Option<SimilarityAlgorithm>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as JSON
    Config {
        /// JSON file with configuration overrides
        #[arg(short, long)]
        config: Option<String>,
    },
}
