//! Read-only rule registry
//!
//! The registry holds the fixed set of compiled detection rules and exposes
//! them per category for iteration by a scanner. It is constructed once at
//! startup and never mutated mid-run, which keeps identical scans over
//! identical input reproducible.

use crate::constants::MAX_TOML_FILE_SIZE;
use crate::{built_in, Category, CompiledRule, Result, RuleError, RuleFile, RuleSpec};

/// Ordered collection of compiled detection rules
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<CompiledRule>,
}

impl RuleRegistry {
    /// Build a registry from rule specs, compiling every pattern
    ///
    /// Fails fast on the first invalid pattern so a broken rule can never
    /// fault mid-scan.
    pub fn from_specs(specs: Vec<RuleSpec>) -> Result<Self> {
        let rules = specs
            .into_iter()
            .map(CompiledRule::from_spec)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(rule_count = rules.len(), "compiled rule registry");
        Ok(Self { rules })
    }

    /// Build a registry from a TOML rule file string (same schema as the
    /// built-in rule sets)
    pub fn from_toml_str(source: &str) -> Result<Self> {
        if source.len() > MAX_TOML_FILE_SIZE {
            return Err(RuleError::RuleFileTooLarge {
                size: source.len(),
                max: MAX_TOML_FILE_SIZE,
            });
        }
        let file: RuleFile = toml::from_str(source)?;
        Self::from_specs(file.rules)
    }

    /// Build the registry of built-in rules
    pub fn built_in() -> Result<Self> {
        Self::from_specs(built_in::load_built_in_specs()?)
    }

    /// Rules for one category, in registration order
    ///
    /// A category with no rules yields an empty iterator, not an error, so
    /// a scanner over it is a no-op.
    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &CompiledRule> {
        self.rules
            .iter()
            .filter(move |rule| rule.spec().category == category)
    }

    /// All rules across categories, in registration order
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Total number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_registry_compiles() {
        let registry = RuleRegistry::built_in().unwrap();
        assert!(registry.rules_for(Category::Security).count() >= 3);
        assert!(registry.rules_for(Category::Performance).count() >= 3);
    }

    #[test]
    fn test_empty_category_is_noop() {
        let registry = RuleRegistry::from_toml_str(
            r#"
            [[rules]]
            name = "only-security"
            category = "security"
            pattern = 'eval\('
            message = "m"
            fix = "f"
            "#,
        )
        .unwrap();

        assert_eq!(registry.rules_for(Category::Performance).count(), 0);
        assert_eq!(registry.rules_for(Category::Security).count(), 1);
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = RuleRegistry::from_toml_str(
            r#"
            [[rules]]
            name = "first"
            category = "style"
            pattern = 'a'
            message = "m"
            fix = "f"

            [[rules]]
            name = "second"
            category = "style"
            pattern = 'b'
            message = "m"
            fix = "f"
            "#,
        )
        .unwrap();

        let names: Vec<&str> = registry
            .rules_for(Category::Style)
            .map(|r| r.spec().name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_invalid_pattern_fails_construction() {
        let result = RuleRegistry::from_toml_str(
            r#"
            [[rules]]
            name = "broken"
            category = "style"
            pattern = '(unclosed'
            message = "m"
            fix = "f"
            "#,
        );
        assert!(result.is_err());
    }
}
