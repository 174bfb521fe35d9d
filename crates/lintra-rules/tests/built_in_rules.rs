//! Integration tests for the built-in rule sets against realistic lines.

use lintra_rules::{Category, RuleRegistry};

fn firing_rules(registry: &RuleRegistry, category: Category, line: &str) -> Vec<String> {
    registry
        .rules_for(category)
        .filter(|rule| rule.is_match(line))
        .map(|rule| rule.spec().name.clone())
        .collect()
}

#[test]
fn security_rules_fire_on_known_vulnerabilities() {
    let registry = RuleRegistry::built_in().unwrap();

    assert_eq!(
        firing_rules(
            &registry,
            Category::Security,
            r#"query = "SELECT * FROM users WHERE id=" + a + b"#
        ),
        vec!["sql-injection"]
    );
    assert_eq!(
        firing_rules(&registry, Category::Security, "element.innerHTML = foo"),
        vec!["xss-inner-html"]
    );
    assert_eq!(
        firing_rules(&registry, Category::Security, "eval(userInput)"),
        vec!["unsafe-eval"]
    );
}

#[test]
fn security_rules_stay_quiet_on_clean_lines() {
    let registry = RuleRegistry::built_in().unwrap();

    let clean = [
        "const x = 1;",
        "element.textContent = foo;",
        "db.query(sql, params);",
        "",
    ];
    for line in clean {
        assert!(
            firing_rules(&registry, Category::Security, line).is_empty(),
            "unexpected match on {line:?}"
        );
    }
}

#[test]
fn performance_rules_fire_on_known_patterns() {
    let registry = RuleRegistry::built_in().unwrap();

    assert_eq!(
        firing_rules(&registry, Category::Performance, "for (i) { for (j) {} }"),
        vec!["nested-loops"]
    );
    assert_eq!(
        firing_rules(
            &registry,
            Category::Performance,
            "document.getElementsByClassName('item')"
        ),
        vec!["inefficient-dom-selectors"]
    );
    assert_eq!(
        firing_rules(
            &registry,
            Category::Performance,
            "while (x) { let buf = [1, 2]; for (y of buf) {} }"
        ),
        vec!["array-in-loop"]
    );
}

#[test]
fn multiple_rules_can_fire_on_one_line() {
    let registry = RuleRegistry::built_in().unwrap();

    // Both eval and innerHTML appear on the same line; both rules report.
    let names = firing_rules(
        &registry,
        Category::Security,
        "el.innerHTML = eval(payload)",
    );
    assert_eq!(names, vec!["xss-inner-html", "unsafe-eval"]);
}
