use clap::Parser;
use std::fs;
use std::io::Read;

use hitmark::{
    default_config, find_combination_matches_with, fuzzy_text_match, highlight_document,
    smart_tokenize_with, CombinationMatch, FuzzyMatchConfig, HighlightConfig, HighlightSpan,
    Result, SimilarityAlgorithm,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{
    hint, level_label, pad_right, paint_document, row, score_value, section_bot, section_top,
    truncate,
};
use cli::{Cli, Commands};

/// Log filter variable, e.g. `HITMARK_LOG=hitmark=debug`.
const LOG_ENV: &str = "HITMARK_LOG";

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Match {
            query,
            document,
            file,
            config,
            combination_only,
            raw,
            json,
        } => run_match(
            &query,
            document,
            file.as_deref(),
            config.as_deref(),
            combination_only,
            raw,
            json,
        ),
        Commands::Tokenize { text, config, json } => run_tokenize(&text, config.as_deref(), json),
        Commands::Similarity {
            a,
            b,
            algorithm,
            json,
        } => run_similarity(&a, &b, algorithm, json),
        Commands::Config { config } => run_config(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<HighlightConfig> {
    match path {
        Some(path) => {
            tracing::info!(path, "loading config overrides");
            HighlightConfig::from_json_file(path)
        }
        None => Ok(default_config().clone()),
    }
}

fn read_document(document: Option<String>, file: Option<&str>) -> Result<String> {
    if let Some(document) = document {
        return Ok(document);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

// ============================================================================
// MATCH
// ============================================================================

fn run_match(
    query: &str,
    document: Option<String>,
    file: Option<&str>,
    config_path: Option<&str>,
    combination_only: Vec<String>,
    raw: bool,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    config.priority.combination_only_words.extend(combination_only);
    let document = read_document(document, file)?;

    if raw {
        let tokens = smart_tokenize_with(query, &config.text_processing);
        let mut matches = find_combination_matches_with(
            &document,
            &tokens,
            &config.priority.scoring,
            &config.priority.combination_only_words,
        );
        matches.sort_by_key(|m| m.start_index);

        if json {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        } else {
            print_matches(&matches, &config);
        }
        return Ok(());
    }

    let spans = highlight_document(&document, query, &config);
    if json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
    } else {
        print_spans(&document, &spans, &config);
    }
    Ok(())
}

fn print_spans(document: &str, spans: &[HighlightSpan], config: &HighlightConfig) {
    let palette = &config.visual.colors;
    println!("{}", paint_document(document, spans, palette));
    println!();

    section_top("HIGHLIGHTS");
    if spans.is_empty() {
        row(&hint(" no matches"));
    }
    for span in spans {
        row(&format!(
            " {} {} {:>5}..{:<5} {}",
            pad_right(&level_label(span.level, palette), 8),
            score_value(span.score, config.priority.scoring.max_score),
            span.start,
            span.end,
            truncate(&span.text, 40)
        ));
    }
    section_bot();
}

fn print_matches(matches: &[CombinationMatch], config: &HighlightConfig) {
    section_top("COMBINATION MATCHES");
    if matches.is_empty() {
        row(&hint(" no matches"));
    }
    for m in matches {
        let continuity = if m.continuity.has_document_continuity {
            "continuous"
        } else {
            ""
        };
        row(&format!(
            " {} {:>5}..{:<5} {:>2} tok {} {}",
            score_value(m.score, config.priority.scoring.max_score),
            m.start_index,
            m.end_index,
            m.tokens.len(),
            pad_right(&truncate(&m.matched_text, 30), 30),
            hint(continuity)
        ));
    }
    section_bot();
}

// ============================================================================
// TOKENIZE
// ============================================================================

fn run_tokenize(text: &str, config_path: Option<&str>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let tokens = smart_tokenize_with(text, &config.text_processing);

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    section_top("TOKENS");
    if tokens.is_empty() {
        row(&hint(" nothing left after stop-words"));
    }
    for token in &tokens {
        row(&format!(
            " {} {} {}",
            pad_right(&token.text, 20),
            pad_right(&token.token_type.to_string(), 8),
            hint(&token.original)
        ));
    }
    section_bot();
    Ok(())
}

// ============================================================================
// SIMILARITY
// ============================================================================

fn run_similarity(a: &str, b: &str, only: Option<SimilarityAlgorithm>, json: bool) -> Result<()> {
    let algorithms = match only {
        Some(algorithm) => vec![algorithm],
        None => vec![
            SimilarityAlgorithm::Levenshtein,
            SimilarityAlgorithm::Jaro,
            SimilarityAlgorithm::Ngram,
        ],
    };

    let rows: Vec<serde_json::Value> = algorithms
        .iter()
        .map(|&algorithm| {
            let options = FuzzyMatchConfig {
                algorithm,
                ..FuzzyMatchConfig::default()
            };
            let result = fuzzy_text_match(a, b, &options);
            serde_json::json!({
                "algorithm": algorithm.name(),
                "similarity": algorithm.similarity(&a.to_lowercase(), &b.to_lowercase()),
                "isMatch": result.is_match,
                "matchedBy": result.algorithm.to_string(),
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    section_top("SIMILARITY");
    for value in &rows {
        let similarity = value["similarity"].as_f64().unwrap_or_default();
        let verdict = if value["isMatch"].as_bool().unwrap_or_default() {
            "match"
        } else {
            "no match"
        };
        row(&format!(
            " {} {} {}",
            pad_right(value["algorithm"].as_str().unwrap_or_default(), 12),
            score_value(similarity, 1.0),
            hint(&format!("{} via {}", verdict, value["matchedBy"].as_str().unwrap_or_default()))
        ));
    }
    section_bot();
    Ok(())
}

// ============================================================================
// CONFIG
// ============================================================================

fn run_config(config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
