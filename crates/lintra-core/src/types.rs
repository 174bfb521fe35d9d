//! Finding model and report shapes.
//!
//! One struct per category variant, serialized with the exact field names of
//! the analysis output contract. Positions are 1-based; `column` is the
//! fixed placeholder `1` (the match offset is not computed).

use lintra_rules::{Impact, Severity, StyleSeverity};
use serde::{Deserialize, Serialize};

/// Placeholder column reported for every match.
///
/// The line scanner does not derive the real substring offset; findings all
/// report column 1.
pub const PLACEHOLDER_COLUMN: usize = 1;

/// A detected security vulnerability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityIssue {
    /// Deterministic id, `sec<n>` in discovery order
    pub id: String,

    /// Vulnerability class name (e.g. "SQL Injection")
    #[serde(rename = "type")]
    pub issue_type: String,

    pub line: usize,
    pub column: usize,
    pub message: String,
    pub severity: Severity,

    /// Trimmed source line that triggered the match
    pub code_snippet: String,

    pub suggested_fix: String,

    /// CWE identifier, e.g. "CWE-89"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwe: Option<String>,

    /// OWASP category, e.g. "A1:2017"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owasp: Option<String>,
}

/// A detected performance anti-pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceIssue {
    /// Deterministic id, `perf<n>` in discovery order
    pub id: String,

    pub line: usize,
    pub column: usize,
    pub message: String,
    pub impact: Impact,
    pub code_snippet: String,
    pub suggested_fix: String,

    /// Free-text improvement estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_improvement: Option<String>,
}

/// A style suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Deterministic id, `s<n>` in discovery order
    pub id: String,

    pub line: usize,
    pub column: usize,
    pub message: String,
    pub severity: StyleSeverity,
    pub code_snippet: String,
    pub suggested_fix: String,
}

/// A best-practice note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPractice {
    /// Deterministic id, `bp<n>` in discovery order
    pub id: String,

    pub line: usize,
    pub column: usize,
    pub message: String,
    pub code_snippet: String,
    pub suggested_fix: String,

    /// Documentation URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// The complete analysis report returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub suggestions: Vec<Suggestion>,
    pub security_issues: Vec<SecurityIssue>,
    pub performance_issues: Vec<PerformanceIssue>,
    pub best_practices: Vec<BestPractice>,

    /// Aggregate quality score in [0, 100]
    pub overall_score: u8,
}

/// Which finding shape an external suggestion normalizes into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    #[default]
    Suggestion,
    BestPractice,
}

/// An unnormalized suggestion as produced by the external suggestion
/// service.
///
/// This is the narrow merge contract with the collaborator: every field
/// except `message` is optional, and normalization fills defaults (line 1,
/// column 1, severity `info`, empty fix).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSuggestion {
    #[serde(default)]
    pub kind: SuggestionKind,

    #[serde(default)]
    pub line: Option<usize>,

    pub message: String,

    #[serde(default)]
    pub severity: Option<StyleSeverity>,

    #[serde(default)]
    pub code_snippet: Option<String>,

    #[serde(default)]
    pub suggested_fix: Option<String>,

    #[serde(default)]
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_issue_wire_shape() {
        let issue = SecurityIssue {
            id: "sec1".to_string(),
            issue_type: "Unsafe Eval".to_string(),
            line: 3,
            column: PLACEHOLDER_COLUMN,
            message: "Unsafe use of eval() detected".to_string(),
            severity: Severity::High,
            code_snippet: "eval(userInput)".to_string(),
            suggested_fix: "Avoid using eval(). Use safer alternatives".to_string(),
            cwe: Some("CWE-95".to_string()),
            owasp: None,
        };

        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "Unsafe Eval");
        assert_eq!(json["severity"], "high");
        assert_eq!(json["cwe"], "CWE-95");
        // Absent optional fields are omitted, not null
        assert!(json.get("owasp").is_none());
    }

    #[test]
    fn test_raw_suggestion_defaults() {
        let raw: RawSuggestion =
            serde_json::from_str(r#"{"message": "Use descriptive names"}"#).unwrap();
        assert_eq!(raw.kind, SuggestionKind::Suggestion);
        assert!(raw.line.is_none());
        assert!(raw.severity.is_none());
    }
}
