//! Performance category scanner.

use crate::scanner::scan_lines;
use crate::types::{PerformanceIssue, PLACEHOLDER_COLUMN};
use lintra_rules::{Category, Impact, RuleRegistry};

/// Scans code for performance anti-patterns using the registry's
/// performance rules.
pub struct PerformanceAnalyzer<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> PerformanceAnalyzer<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Analyze code and return performance findings in discovery order.
    pub fn analyze(&self, code: &str, language: &str) -> Vec<PerformanceIssue> {
        let rules: Vec<_> = self.registry.rules_for(Category::Performance).collect();
        tracing::debug!(language, rule_count = rules.len(), "performance scan");

        scan_lines(code, &rules)
            .into_iter()
            .enumerate()
            .map(|(idx, m)| {
                let spec = m.rule.spec();
                PerformanceIssue {
                    id: format!("{}{}", Category::Performance.id_prefix(), idx + 1),
                    line: m.line,
                    column: PLACEHOLDER_COLUMN,
                    message: spec.message.clone(),
                    impact: spec.impact.unwrap_or(Impact::Medium),
                    code_snippet: m.content.trim().to_string(),
                    suggested_fix: spec.fix.clone(),
                    estimated_improvement: spec.estimated_improvement.clone(),
                }
            })
            .collect()
    }
}
