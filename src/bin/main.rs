use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use log_odds_core::config::Config;
use log_odds_core::preprocess::{load_clean_documents, remove_infrequent_words};
use log_odds_core::{top_tokens, Granularity, Label, LogOddsEngine, ResultStore, Token};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log-odd ratios of words and word pairs between hyperpartisan and
/// non-hyperpartisan news articles.
#[derive(Parser, Debug)]
#[command(name = "log_odds", version)]
struct Cli {
    /// TOML config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Token granularity: unigram or bigram
    #[arg(long, short, global = true)]
    granularity: Option<Granularity>,

    /// Directory holding the stored results
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every token of the two article dumps and store the result
    Compute {
        /// Hyperpartisan article dump
        hyperpartisan: Option<PathBuf>,
        /// Non-hyperpartisan article dump
        non_hyperpartisan: Option<PathBuf>,
        /// Drop tokens seen fewer times than this across both dumps
        #[arg(long)]
        threshold: Option<usize>,
    },
    /// Print the tokens most typical of one label
    Top {
        /// hyperpartisan or non-hyperpartisan
        #[arg(long, short, default_value = "hyperpartisan")]
        label: Label,
        #[arg(long, short)]
        amount: Option<usize>,
        /// Leave out infinite scores
        #[arg(long)]
        exclude_infinite: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::load_or_default(cli.config.as_deref())
        .context("Could not load configuration")?;
    if let Some(granularity) = cli.granularity {
        config.granularity = granularity;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    match cli.command {
        Command::Compute {
            hyperpartisan,
            non_hyperpartisan,
            threshold,
        } => {
            if let Some(path) = hyperpartisan {
                config.hyperpartisan_path = path;
            }
            if let Some(path) = non_hyperpartisan {
                config.non_hyperpartisan_path = path;
            }
            if let Some(threshold) = threshold {
                config.infrequent_threshold = threshold;
            }
            compute(&config)
        }
        Command::Top {
            label,
            amount,
            exclude_infinite,
            json,
        } => {
            if let Some(amount) = amount {
                config.amount = amount;
            }
            if exclude_infinite {
                config.include_infinite = false;
            }
            config.validate()?;
            top(&config, label, json)
        }
    }
}

fn compute(config: &Config) -> Result<()> {
    let hyperpartisan = load_clean_documents(&config.hyperpartisan_path, &config.article_end_marker)
        .with_context(|| format!("Could not read {}", config.hyperpartisan_path.display()))?;
    let non_hyperpartisan =
        load_clean_documents(&config.non_hyperpartisan_path, &config.article_end_marker)
            .with_context(|| {
                format!("Could not read {}", config.non_hyperpartisan_path.display())
            })?;

    println!("Number of documents ({}): {}", Label::Hyperpartisan, hyperpartisan.len());
    println!("Number of documents ({}): {}", Label::NonHyperpartisan, non_hyperpartisan.len());

    let (hyperpartisan, non_hyperpartisan) = if config.infrequent_threshold > 0 {
        remove_infrequent_words(hyperpartisan, non_hyperpartisan, config.infrequent_threshold)
    } else {
        (hyperpartisan, non_hyperpartisan)
    };

    let engine = LogOddsEngine::new(config.granularity).with_progress(true);
    let run = engine.compute(hyperpartisan, non_hyperpartisan)?;

    let store = ResultStore::new(&config.output_dir);
    let path = store.save(&run.result)?;
    println!(
        "Saved {} {} log-odd ratios ({} not finite) to '{}'",
        run.result.len(),
        config.granularity,
        run.degenerate.degenerate_scores(),
        path.display()
    );
    Ok(())
}

fn top(config: &Config, label: Label, as_json: bool) -> Result<()> {
    let store = ResultStore::new(&config.output_dir);
    let result = store
        .load(config.granularity)
        .with_context(|| format!("No stored {} results in '{}'", config.granularity, store.dir().display()))?;
    if result.is_empty() {
        tracing::warn!("Stored {} result holds no scores", config.granularity);
    }
    let ranked = top_tokens(&result, label, config.amount, config.include_infinite);

    if as_json {
        let entries: Vec<Value> = ranked
            .iter()
            .map(|(token, score)| json!({ "token": token_json(token), "score": score_json(*score) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut header = format!("Top {} {}s for {}", config.amount, config.granularity, label);
    if !config.include_infinite {
        header.push_str(" (without infinite values)");
    }
    print_section_header(&header);
    for (rank, (token, score)) in ranked.iter().enumerate() {
        println!("  {:>3}. {:<40} {:>10.4}", rank + 1, token.to_string(), score);
    }
    Ok(())
}

fn token_json(token: &Token) -> Value {
    match token {
        Token::Unigram(word) => json!(word),
        Token::Bigram(first, second) => json!([first, second]),
    }
}

// JSON has no infinities
fn score_json(score: f64) -> Value {
    if score == f64::INFINITY {
        json!("inf")
    } else if score == f64::NEG_INFINITY {
        json!("-inf")
    } else {
        json!(score)
    }
}

fn print_section_header(title: &str) {
    let padding = 5;
    let width = title.chars().count() + padding * 2 + 2;
    let border = "#".repeat(width);
    let blank = format!("#{}#", " ".repeat(width - 2));
    let text = format!("#{pad}{}{pad}#", title.to_uppercase(), pad = " ".repeat(padding));

    println!("{}", border.as_str().cyan());
    println!("{}", blank.as_str().cyan());
    println!("{}", text.as_str().bold().cyan());
    println!("{}", blank.as_str().cyan());
    println!("{}", border.as_str().cyan());
    println!();
}
