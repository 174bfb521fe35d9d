//! Built-in rule sets embedded in the binary
//!
//! The default detection rules for each category are embedded at compile
//! time via `include_str!()` for zero-config defaults. Rule sets are fixed,
//! in-process data: there is no runtime plugin loading.

use crate::{Result, RuleFile, RuleSpec};

/// Security vulnerability rules (SQL injection, XSS, unsafe eval)
pub const SECURITY_RULES: &str = include_str!("built_in/security.toml");

/// Performance anti-pattern rules (nested loops, allocation in loops)
pub const PERFORMANCE_RULES: &str = include_str!("built_in/performance.toml");

/// Style suggestion rules (fallback for the external suggestion service)
pub const STYLE_RULES: &str = include_str!("built_in/style.toml");

/// Best-practice rules with documentation references
pub const BEST_PRACTICE_RULES: &str = include_str!("built_in/best_practice.toml");

/// Load all built-in rule specs in registration order
///
/// Order within each file is preserved; files are concatenated in category
/// order (security, performance, style, best practice). Finding order on a
/// shared line follows this order.
pub fn load_built_in_specs() -> Result<Vec<RuleSpec>> {
    let sources = [
        SECURITY_RULES,
        PERFORMANCE_RULES,
        STYLE_RULES,
        BEST_PRACTICE_RULES,
    ];

    let mut specs = Vec::new();
    for source in sources {
        let file: RuleFile = toml::from_str(source)?;
        specs.extend(file.rules);
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn test_built_in_specs_parse() {
        let specs = load_built_in_specs().unwrap();
        assert!(!specs.is_empty());

        // Every category ships at least one rule
        for category in Category::all() {
            assert!(
                specs.iter().any(|s| s.category == *category),
                "no built-in rules for {category}"
            );
        }
    }

    #[test]
    fn test_built_in_security_rules_in_order() {
        let specs = load_built_in_specs().unwrap();
        let security: Vec<&str> = specs
            .iter()
            .filter(|s| s.category == Category::Security)
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(security, vec!["sql-injection", "xss-inner-html", "unsafe-eval"]);
    }
}
