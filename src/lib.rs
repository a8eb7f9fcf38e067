//! Fuzzy phrase matching and combination scoring for search-hit highlighting.
//!
//! Given a document and a user query, this crate finds where the query's
//! tokens occur, prefers long contiguous combinations over scattered single
//! words, and hands back non-overlapping, classified spans a renderer can
//! paint.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │  tokenize    │────▶│  scoring          │────▶│  highlight   │
//! │ (smart_      │     │ (combination,     │     │ (spans,      │
//! │  tokenize)   │     │  continuity,      │     │  levels)     │
//! └──────────────┘     │  overlap)         │     └──────────────┘
//!                      └───────────────────┘            │
//!        ┌──────────────────────┬───────────────────────┘
//!        ▼                      ▼
//! ┌──────────────┐     ┌───────────────────┐
//! │  fuzzy       │     │  config           │
//! │ (levenshtein,│     │ (defaults, merge, │
//! │  jaro, ngram)│     │  thresholds)      │
//! └──────────────┘     └───────────────────┘
//! ```
//!
//! # Offsets
//!
//! Every `start_index`/`end_index` is a **char** offset into the document,
//! never a byte offset.
//!
//! # Usage
//!
//! ```
//! use hitmark::{default_config, find_combination_matches, smart_tokenize, ScoringConfig};
//!
//! let tokens = smart_tokenize("가계CSS대출");
//! let matches = find_combination_matches("가계 CSS 대출 지원", &tokens, &ScoringConfig::DEFAULT);
//! assert_eq!(matches[0].matched_text, "가계 CSS 대출");
//!
//! let spans = hitmark::highlight_document("가계 CSS 대출 지원", "가계 대출", default_config());
//! assert!(!spans.is_empty());
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod scoring;
pub mod tokenize;
mod utils;

// Re-exports for public API
pub use config::{
    default_config, determine_highlight_level, FuzzyMatchConfig, HighlightConfig,
    HighlightConfigOverride, HighlightLevel, HighlightThresholds, LevelColors, MatchType,
};
pub use error::{ConfigError, Result};
pub use fuzzy::{
    fuzzy_match, fuzzy_text_match, jaro_similarity, levenshtein_distance, levenshtein_similarity,
    ngram_similarity, FuzzyMatchResult, MatchAlgorithm, SimilarityAlgorithm,
};
pub use highlight::{highlight_document, highlight_spans, HighlightSpan};
pub use scoring::{
    calculate_continuity, find_combination_matches, find_combination_matches_batch,
    find_combination_matches_with, is_word_boundary, resolve_overlaps, CombinationMatch,
    CombinationOnly, ContinuityInfo, NoCombinationOnly, ScoringConfig,
};
pub use tokenize::{smart_tokenize, smart_tokenize_with, Token, TokenType};
