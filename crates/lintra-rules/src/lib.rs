//! Lintra rule sets - declarative, TOML-defined detection rules
//!
//! This crate provides the rule side of Lintra's scanning engine: the TOML
//! rule schema, guarded regex compilation, and the read-only registry that
//! scanners iterate.
//!
//! # Architecture
//!
//! - **TOML Rules**: declarative line patterns plus finding templates
//! - **Compiled Matching**: regex patterns compiled once with size limits
//! - **Built-in Sets**: default rules per category embedded via `include_str!()`
//!
//! # Example
//!
//! ```toml
//! # built_in/security.toml
//! [[rules]]
//! name = "unsafe-eval"
//! category = "security"
//! pattern = 'eval\('
//! message = "Unsafe use of eval() detected"
//! fix = "Avoid using eval(). Use safer alternatives"
//! severity = "high"
//! cwe = "CWE-95"
//! ```

pub mod built_in;
pub mod constants;
pub mod matcher;
pub mod registry;
pub mod spec;

// Re-export core types
pub use built_in::load_built_in_specs;
pub use matcher::CompiledRule;
pub use registry::RuleRegistry;
pub use spec::{Category, Impact, RuleFile, RuleSpec, Severity, StyleSeverity};

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Error types for rule loading and compilation
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Rule file too large: {size} bytes (max {max})")]
    RuleFileTooLarge { size: usize, max: usize },
}
