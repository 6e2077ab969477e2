//! TruthLens Core - Main Entry Point
//!
//! Minimal operational surface over the analysis pipeline: analyze pasted
//! or fetched text, score a source URL, list past analyses. Results are
//! printed as JSON.

mod constants;
mod logic;

use std::io::Read;
use std::process::ExitCode;

use logic::analysis::Analyzer;
use logic::fetch;
use logic::history::HistoryStore;
use logic::model::{FakeNewsModel, ModelError};
use logic::source_check::SourceChecker;

const USAGE: &str = "usage: truthlens-core <command>

commands:
  analyze [file|-]      analyze article text from a file or stdin
  analyze-url <url>     fetch an article, analyze it and score its source
  check-source <url>    score the credibility of a source URL
  history [limit]       list past analyses, most recent first";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    match args.first().map(String::as_str) {
        Some("analyze") => analyze_text(args.get(1).map(String::as_str)),
        Some("analyze-url") => {
            let url = args.get(1).ok_or("usage: analyze-url <url>")?;
            analyze_url(url)
        }
        Some("check-source") => {
            let url = args.get(1).ok_or("usage: check-source <url>")?;
            let result = SourceChecker::new().check(url);
            print_json(&result)
        }
        Some("history") => show_history(args.get(1).map(String::as_str)),
        _ => {
            eprintln!("{}", USAGE);
            Err("missing or unknown command".into())
        }
    }
}

/// Load the classifier. A missing or unreadable artifact is fatal: there
/// is no meaningful fallback classifier.
fn load_analyzer() -> Result<Analyzer, ModelError> {
    let model = FakeNewsModel::load(&constants::get_model_path())?;
    Ok(Analyzer::new(model))
}

fn analyze_text(source: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(source)?;
    let analyzer = load_analyzer()?;
    let result = analyzer.analyze(&text)?;

    save_history(&text, "", result.is_fake, result.confidence, None);
    print_json(&result)
}

fn analyze_url(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = fetch::fetch_article_text(url);
    if fetch::is_fetch_error(&text) {
        return Err(text.into());
    }

    let credibility = SourceChecker::new().check(url);
    let analyzer = load_analyzer()?;
    let result = analyzer.analyze(&text)?;

    save_history(
        &text,
        url,
        result.is_fake,
        result.confidence,
        Some(credibility.credibility_score as f64),
    );

    print_json(&serde_json::json!({
        "analysis": result,
        "source_credibility": credibility,
    }))
}

/// Persist an analysis. History failures are logged, not fatal: the
/// analysis result itself must still reach the user.
fn save_history(text: &str, url: &str, is_fake: bool, confidence: f32, credibility: Option<f64>) {
    let title: String = text.lines().next().unwrap_or("").chars().take(100).collect();

    let stored = HistoryStore::open_default().and_then(|store| {
        store.add_entry(&title, text, url, is_fake, confidence as f64, credibility)
    });

    if let Err(e) = stored {
        log::warn!("failed to record analysis in history: {}", e);
    }
}

fn show_history(limit: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let limit = match limit {
        Some(raw) => raw.parse()?,
        None => constants::DEFAULT_HISTORY_LIMIT,
    };

    let store = HistoryStore::open_default()?;
    print_json(&store.get_history(limit)?)
}

fn read_input(source: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match source {
        Some("-") | None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
