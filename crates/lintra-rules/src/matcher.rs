//! Compiled rules with guarded regex compilation
//!
//! Rule patterns are compiled once at registry construction and reused for
//! the process lifetime. Compilation applies size limits so a pathological
//! pattern is rejected up front instead of faulting mid-scan.

use crate::constants::{MAX_REGEX_LENGTH, REGEX_DFA_SIZE_LIMIT, REGEX_SIZE_LIMIT};
use crate::{Result, RuleError, RuleSpec};
use regex::{Regex, RegexBuilder};

/// Compile a regex with size limits to prevent ReDoS attacks
///
/// Limits applied:
/// - Pattern length limit (500 chars)
/// - Compiled regex size limit (10MB)
/// - DFA size limit (2MB)
fn compile_regex_safe(pattern: &str) -> Result<Regex> {
    if pattern.len() > MAX_REGEX_LENGTH {
        return Err(RuleError::InvalidPattern(format!(
            "Pattern exceeds maximum length of {} characters",
            MAX_REGEX_LENGTH
        )));
    }

    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_DFA_SIZE_LIMIT)
        .build()
        .map_err(|e| RuleError::InvalidPattern(e.to_string()))
}

/// A rule compiled and ready for line matching
#[derive(Debug, Clone)]
pub struct CompiledRule {
    spec: RuleSpec,
    regex: Regex,
}

impl CompiledRule {
    /// Compile a RuleSpec into an executable form
    pub fn from_spec(spec: RuleSpec) -> Result<Self> {
        let regex = compile_regex_safe(&spec.pattern)?;
        Ok(Self { spec, regex })
    }

    /// Check whether this rule fires on a single line
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// The rule's declared data (name, category, templates)
    pub fn spec(&self) -> &RuleSpec {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn test_spec(pattern: &str) -> RuleSpec {
        RuleSpec {
            name: "test-rule".to_string(),
            category: Category::Security,
            pattern: pattern.to_string(),
            message: "test message".to_string(),
            fix: "test fix".to_string(),
            issue_type: None,
            severity: None,
            cwe: None,
            owasp: None,
            impact: None,
            estimated_improvement: None,
            style_severity: None,
            reference: None,
        }
    }

    #[test]
    fn test_basic_matching() {
        let rule = CompiledRule::from_spec(test_spec(r"eval\(")).unwrap();

        assert!(rule.is_match("eval(userInput)"));
        assert!(rule.is_match("  result = eval(expr);"));
        assert!(!rule.is_match("evaluate(x)"));
        assert!(!rule.is_match(""));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = CompiledRule::from_spec(test_spec(r"(unclosed"));
        assert!(matches!(result, Err(RuleError::InvalidPattern(_))));
    }

    #[test]
    fn test_oversized_pattern_rejected() {
        let long_pattern = "a".repeat(MAX_REGEX_LENGTH + 1);
        let result = CompiledRule::from_spec(test_spec(&long_pattern));
        assert!(matches!(result, Err(RuleError::InvalidPattern(_))));
    }

    #[test]
    fn test_clone_preserves_matching() {
        let rule = CompiledRule::from_spec(test_spec(r"innerHTML.*=")).unwrap();
        let cloned = rule.clone();

        assert!(cloned.is_match("element.innerHTML = value"));
        assert!(!cloned.is_match("element.textContent = value"));
    }
}
