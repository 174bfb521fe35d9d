//! Analysis run orchestration.
//!
//! Reads the submitted code, consults the suggestion collaborator when one
//! is configured, runs the engine, and hands the report to a formatter.

use crate::formatters;
use crate::OutputFormat;
use anyhow::{Context, Result};
use lintra_core::{AnalysisEngine, RawSuggestion};
use lintra_llm::{LlmConfig, SuggestionClient, SuggestionProvider};
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct RunOptions {
    pub path: Option<PathBuf>,
    pub language: Option<String>,
    pub format: OutputFormat,
    pub no_llm: bool,
    pub model: Option<String>,
    pub llm_timeout: Option<u64>,
    pub list_rules: bool,
}

pub async fn run(options: RunOptions) -> Result<()> {
    let engine = AnalysisEngine::with_built_in_rules()?;

    if options.list_rules {
        formatters::print_rules(engine.registry());
        return Ok(());
    }

    let code = read_code(options.path.as_deref())?;
    let language = options
        .language
        .clone()
        .or_else(|| options.path.as_deref().and_then(infer_language))
        .unwrap_or_else(|| "javascript".to_string());

    // The external suggestion list: Some(..) when the collaborator was
    // consulted (possibly empty on failure), None for the pattern fallback.
    let external = gather_suggestions(&options, &language, &code).await;

    let report = engine.analyze(&code, &language, external.as_deref());

    match options.format {
        OutputFormat::Human => formatters::print_human(&report, &language),
        OutputFormat::Json => formatters::print_json(&report)?,
    }

    Ok(())
}

async fn gather_suggestions(
    options: &RunOptions,
    language: &str,
    code: &str,
) -> Option<Vec<RawSuggestion>> {
    if options.no_llm {
        return None;
    }

    let api_key = std::env::var("LINTRA_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()?;

    let mut config = LlmConfig {
        api_key: Some(api_key),
        ..Default::default()
    };
    if let Some(model) = &options.model {
        config.model = model.clone();
    }
    if let Some(secs) = options.llm_timeout {
        config.timeout_secs = secs;
    }

    match SuggestionClient::new(config) {
        Ok(client) => Some(client.suggest(language, code).await),
        Err(err) => {
            tracing::warn!(error = %err, "could not build suggestion client");
            Some(Vec::new())
        }
    }
}

fn read_code(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("failed to read code from stdin")?;
            Ok(code)
        }
    }
}

/// Infer the language tag from a file extension.
fn infer_language(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    let language = match extension {
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "rb" => "ruby",
        "go" => "go",
        "rs" => "rust",
        "java" => "java",
        "php" => "php",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        _ => return None,
    };
    Some(language.to_string())
}
