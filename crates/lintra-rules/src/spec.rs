//! TOML rule definitions and shared category/severity types
//!
//! This module defines the structure of rules as they appear in TOML files.
//! Rules are pure data: a matching pattern plus the templates used to
//! materialize a finding when the pattern fires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Finding category — a partition of the finding space scanned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Security vulnerabilities (SQL injection, XSS, unsafe eval, ...)
    Security,
    /// Performance anti-patterns (nested loops, allocation in loops, ...)
    Performance,
    /// Style suggestions
    Style,
    /// Best-practice notes with documentation references
    BestPractice,
}

impl Category {
    /// Returns all categories in a consistent order
    pub fn all() -> &'static [Category] {
        &[
            Category::Security,
            Category::Performance,
            Category::Style,
            Category::BestPractice,
        ]
    }

    /// Returns the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Security => "Security",
            Category::Performance => "Performance",
            Category::Style => "Style",
            Category::BestPractice => "Best Practices",
        }
    }

    /// Finding id prefix for this category (`sec1`, `perf2`, ...)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Category::Security => "sec",
            Category::Performance => "perf",
            Category::Style => "s",
            Category::BestPractice => "bp",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Severity scale for security findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        };
        f.write_str(s)
    }
}

/// Impact scale for performance findings — a distinct, coarser scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        };
        f.write_str(s)
    }
}

/// Severity scale for style suggestions (distinct from the security scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSeverity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for StyleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StyleSeverity::Info => "info",
            StyleSeverity::Warning => "warning",
            StyleSeverity::Error => "error",
        };
        f.write_str(s)
    }
}

/// A complete TOML rule file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleFile {
    /// List of rules, in registration order
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// A single rule as declared in TOML
///
/// Which optional fields are meaningful depends on the category:
/// security rules carry `severity`/`issue_type`/`cwe`/`owasp`, performance
/// rules carry `impact`/`estimated_improvement`, style rules carry
/// `style_severity`, and best-practice rules carry `reference`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleSpec {
    /// Rule name (for debugging/logging)
    pub name: String,

    /// Category this rule belongs to
    pub category: Category,

    /// Regex pattern evaluated against each line
    pub pattern: String,

    /// Message emitted when the rule fires
    pub message: String,

    /// Remediation text attached to the finding
    pub fix: String,

    /// Vulnerability class name (security rules)
    #[serde(default)]
    pub issue_type: Option<String>,

    /// Severity (security rules)
    #[serde(default)]
    pub severity: Option<Severity>,

    /// CWE identifier, e.g. "CWE-89" (security rules)
    #[serde(default)]
    pub cwe: Option<String>,

    /// OWASP category, e.g. "A1:2017" (security rules)
    #[serde(default)]
    pub owasp: Option<String>,

    /// Impact (performance rules)
    #[serde(default)]
    pub impact: Option<Impact>,

    /// Free-text improvement estimate (performance rules)
    #[serde(default)]
    pub estimated_improvement: Option<String>,

    /// Severity on the style scale (style rules)
    #[serde(default)]
    pub style_severity: Option<StyleSeverity>,

    /// Documentation URL (best-practice rules)
    #[serde(default)]
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_security_rule() {
        let toml_str = r#"
            [[rules]]
            name = "sql-injection"
            category = "security"
            pattern = 'SELECT.*\+.*\+'
            message = "Potential SQL injection vulnerability detected"
            fix = "Use parameterized queries instead of string concatenation"
            issue_type = "SQL Injection"
            severity = "critical"
            cwe = "CWE-89"
            owasp = "A1:2017"
        "#;

        let file: RuleFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.rules.len(), 1);

        let rule = &file.rules[0];
        assert_eq!(rule.category, Category::Security);
        assert_eq!(rule.severity, Some(Severity::Critical));
        assert_eq!(rule.cwe.as_deref(), Some("CWE-89"));
        assert!(rule.impact.is_none());
    }

    #[test]
    fn test_parse_performance_rule() {
        let toml_str = r#"
            [[rules]]
            name = "nested-loops"
            category = "performance"
            pattern = 'for.*for'
            message = "Nested loops detected"
            fix = "Consider using a more efficient data structure or algorithm"
            impact = "high"
            estimated_improvement = "Up to 50% performance improvement"
        "#;

        let file: RuleFile = toml::from_str(toml_str).unwrap();
        let rule = &file.rules[0];
        assert_eq!(rule.category, Category::Performance);
        assert_eq!(rule.impact, Some(Impact::High));
        assert!(rule.severity.is_none());
    }

    #[test]
    fn test_category_id_prefixes() {
        assert_eq!(Category::Security.id_prefix(), "sec");
        assert_eq!(Category::Performance.id_prefix(), "perf");
        assert_eq!(Category::Style.id_prefix(), "s");
        assert_eq!(Category::BestPractice.id_prefix(), "bp");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&StyleSeverity::Warning).unwrap(),
            "\"warning\""
        );
    }
}
