//! Analysis engine façade.
//!
//! Owns the rule registry and runs the three category scanners over the same
//! text, then aggregates their output with the external suggestion list into
//! one report.

use crate::performance::PerformanceAnalyzer;
use crate::quality::CodeAnalyzer;
use crate::security::SecurityScanner;
use crate::types::{AnalysisReport, RawSuggestion};
use crate::Result;
use lintra_rules::RuleRegistry;

/// Stateless per-request analysis over an immutable rule registry.
///
/// Scanning is side-effect-free: each run reads only the registry and the
/// caller's code string and allocates fresh findings, so one engine can be
/// shared across threads or tasks without locking.
pub struct AnalysisEngine {
    registry: RuleRegistry,
}

impl AnalysisEngine {
    /// Create an engine over an already-built registry.
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Create an engine over the built-in rule sets.
    pub fn with_built_in_rules() -> Result<Self> {
        Ok(Self::new(RuleRegistry::built_in()?))
    }

    /// The registry this engine scans with.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run a full analysis over one code submission.
    ///
    /// `external_suggestions` carries the external suggestion service's
    /// output when the collaborator was consulted: its list (possibly empty
    /// on collaborator failure) replaces the pattern-rule style scan. Pass
    /// `None` when no collaborator is configured to use the pattern
    /// fallback for the suggestion and best-practice categories.
    pub fn analyze(
        &self,
        code: &str,
        language: &str,
        external_suggestions: Option<&[RawSuggestion]>,
    ) -> AnalysisReport {
        let security_issues = SecurityScanner::new(&self.registry).scan(code, language);
        let performance_issues = PerformanceAnalyzer::new(&self.registry).analyze(code, language);

        let analyzer = CodeAnalyzer::new(&self.registry);
        let (suggestions, best_practices) = match external_suggestions {
            Some(raw) => analyzer.normalize(raw),
            None => analyzer.analyze(code, language),
        };

        let report = AnalysisReport::assemble(
            suggestions,
            security_issues,
            performance_issues,
            best_practices,
        );
        tracing::debug!(
            security = report.security_issues.len(),
            performance = report.performance_issues.len(),
            suggestions = report.suggestions.len(),
            best_practices = report.best_practices.len(),
            score = report.overall_score,
            "analysis complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_scores_100() {
        let engine = AnalysisEngine::with_built_in_rules().unwrap();
        let report = engine.analyze("", "javascript", None);

        assert!(report.security_issues.is_empty());
        assert!(report.performance_issues.is_empty());
        assert!(report.suggestions.is_empty());
        assert!(report.best_practices.is_empty());
        assert_eq!(report.overall_score, 100);
    }

    #[test]
    fn test_external_empty_list_suppresses_fallback() {
        let engine = AnalysisEngine::with_built_in_rules().unwrap();
        // Code the style fallback would flag
        let code = "var x = 1;";

        let with_collaborator = engine.analyze(code, "javascript", Some(&[]));
        assert!(with_collaborator.suggestions.is_empty());

        let without_collaborator = engine.analyze(code, "javascript", None);
        assert_eq!(without_collaborator.suggestions.len(), 1);
    }

    #[test]
    fn test_rescans_are_deterministic() {
        let engine = AnalysisEngine::with_built_in_rules().unwrap();
        let code = "eval(a)\nfor (i) { for (j) {} }\nvar z = 3;";

        let first = engine.analyze(code, "javascript", None);
        let second = engine.analyze(code, "javascript", None);
        assert_eq!(first, second);
    }
}
