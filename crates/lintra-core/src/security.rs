//! Security category scanner.

use crate::scanner::scan_lines;
use crate::types::{SecurityIssue, PLACEHOLDER_COLUMN};
use lintra_rules::{Category, RuleRegistry, Severity};

/// Scans code for security vulnerabilities using the registry's security
/// rules.
pub struct SecurityScanner<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> SecurityScanner<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Scan code and return security findings in discovery order.
    ///
    /// Never errors: malformed input simply matches whatever the patterns
    /// match. `language` is logged for future per-language rule selection;
    /// the built-in set is language-agnostic.
    pub fn scan(&self, code: &str, language: &str) -> Vec<SecurityIssue> {
        let rules: Vec<_> = self.registry.rules_for(Category::Security).collect();
        tracing::debug!(language, rule_count = rules.len(), "security scan");

        scan_lines(code, &rules)
            .into_iter()
            .enumerate()
            .map(|(idx, m)| {
                let spec = m.rule.spec();
                SecurityIssue {
                    id: format!("{}{}", Category::Security.id_prefix(), idx + 1),
                    issue_type: spec
                        .issue_type
                        .clone()
                        .unwrap_or_else(|| spec.name.clone()),
                    line: m.line,
                    column: PLACEHOLDER_COLUMN,
                    message: spec.message.clone(),
                    severity: spec.severity.unwrap_or(Severity::Medium),
                    code_snippet: m.content.trim().to_string(),
                    suggested_fix: spec.fix.clone(),
                    cwe: spec.cwe.clone(),
                    owasp: spec.owasp.clone(),
                }
            })
            .collect()
    }
}
