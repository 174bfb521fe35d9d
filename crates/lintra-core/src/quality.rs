//! Style and best-practice scanner, plus normalization of externally
//! produced suggestions.
//!
//! The suggestion/best-practice categories have two sources: the external
//! suggestion service (preferred, merged through [`CodeAnalyzer::normalize`])
//! and the pattern-rule fallback ([`CodeAnalyzer::analyze`]) used when the
//! service is not configured. Either way the output shapes and id scheme are
//! identical.

use crate::scanner::scan_lines;
use crate::types::{BestPractice, RawSuggestion, Suggestion, SuggestionKind, PLACEHOLDER_COLUMN};
use lintra_rules::{Category, RuleRegistry, StyleSeverity};

/// Produces style suggestions and best-practice notes.
pub struct CodeAnalyzer<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> CodeAnalyzer<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Pattern-rule fallback path: scan code with the style and
    /// best-practice rule sets.
    pub fn analyze(&self, code: &str, language: &str) -> (Vec<Suggestion>, Vec<BestPractice>) {
        tracing::debug!(language, "style scan (pattern fallback)");

        let style_rules: Vec<_> = self.registry.rules_for(Category::Style).collect();
        let suggestions = scan_lines(code, &style_rules)
            .into_iter()
            .enumerate()
            .map(|(idx, m)| {
                let spec = m.rule.spec();
                Suggestion {
                    id: format!("{}{}", Category::Style.id_prefix(), idx + 1),
                    line: m.line,
                    column: PLACEHOLDER_COLUMN,
                    message: spec.message.clone(),
                    severity: spec.style_severity.unwrap_or(StyleSeverity::Info),
                    code_snippet: m.content.trim().to_string(),
                    suggested_fix: spec.fix.clone(),
                }
            })
            .collect();

        let practice_rules: Vec<_> = self.registry.rules_for(Category::BestPractice).collect();
        let best_practices = scan_lines(code, &practice_rules)
            .into_iter()
            .enumerate()
            .map(|(idx, m)| {
                let spec = m.rule.spec();
                BestPractice {
                    id: format!("{}{}", Category::BestPractice.id_prefix(), idx + 1),
                    line: m.line,
                    column: PLACEHOLDER_COLUMN,
                    message: spec.message.clone(),
                    code_snippet: m.content.trim().to_string(),
                    suggested_fix: spec.fix.clone(),
                    reference: spec.reference.clone(),
                }
            })
            .collect();

        (suggestions, best_practices)
    }

    /// Normalize an externally produced suggestion list into the finding
    /// shapes.
    ///
    /// Missing fields get defaults: line 1, column 1, severity `info`,
    /// empty snippet and fix. Ids follow the same per-category running
    /// counter as the scanners.
    pub fn normalize(&self, raw: &[RawSuggestion]) -> (Vec<Suggestion>, Vec<BestPractice>) {
        let mut suggestions = Vec::new();
        let mut best_practices = Vec::new();

        for item in raw {
            match item.kind {
                SuggestionKind::Suggestion => {
                    suggestions.push(Suggestion {
                        id: format!(
                            "{}{}",
                            Category::Style.id_prefix(),
                            suggestions.len() + 1
                        ),
                        line: item.line.unwrap_or(1),
                        column: PLACEHOLDER_COLUMN,
                        message: item.message.clone(),
                        severity: item.severity.unwrap_or(StyleSeverity::Info),
                        code_snippet: item.code_snippet.clone().unwrap_or_default(),
                        suggested_fix: item.suggested_fix.clone().unwrap_or_default(),
                    });
                }
                SuggestionKind::BestPractice => {
                    best_practices.push(BestPractice {
                        id: format!(
                            "{}{}",
                            Category::BestPractice.id_prefix(),
                            best_practices.len() + 1
                        ),
                        line: item.line.unwrap_or(1),
                        column: PLACEHOLDER_COLUMN,
                        message: item.message.clone(),
                        code_snippet: item.code_snippet.clone().unwrap_or_default(),
                        suggested_fix: item.suggested_fix.clone().unwrap_or_default(),
                        reference: item.reference.clone(),
                    });
                }
            }
        }

        (suggestions, best_practices)
    }
}
