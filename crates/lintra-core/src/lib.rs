//! Lintra core - pattern-based code scanning and report aggregation.
//!
//! The core takes a code snippet plus a declared language tag and produces
//! an [`AnalysisReport`]: security issues, performance issues, style
//! suggestions, best-practice notes, and one aggregate quality score.
//!
//! Findings come from the line scanner applying the read-only rule registry
//! ([`lintra_rules::RuleRegistry`]); the suggestion and best-practice
//! categories can alternatively be fed from an external suggestion service
//! through the [`RawSuggestion`] merge contract.

pub mod engine;
pub mod performance;
pub mod quality;
pub mod report;
pub mod scanner;
pub mod security;
pub mod types;

// Re-export core types
pub use engine::AnalysisEngine;
pub use performance::PerformanceAnalyzer;
pub use quality::CodeAnalyzer;
pub use report::overall_score;
pub use scanner::{scan_lines, RawMatch};
pub use security::SecurityScanner;
pub use types::{
    AnalysisReport, BestPractice, PerformanceIssue, RawSuggestion, SecurityIssue, Suggestion,
    SuggestionKind, PLACEHOLDER_COLUMN,
};

// Shared category and severity vocabulary lives with the rules.
pub use lintra_rules::{Category, Impact, Severity, StyleSeverity};

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building an analysis engine.
///
/// Scanning and aggregation themselves have no error path: a scanner
/// returns an empty list for its category rather than aborting the report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rule set failed to load or compile.
    #[error("Rule error: {0}")]
    Rule(#[from] lintra_rules::RuleError),
}
