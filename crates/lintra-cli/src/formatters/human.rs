//! Human-readable formatter for analysis reports.

use colored::Colorize;
use lintra_core::{AnalysisReport, Impact, Severity, StyleSeverity};
use lintra_rules::RuleRegistry;

pub fn print_human(report: &AnalysisReport, language: &str) {
    println!("\nLintra Analysis Results ({language})");
    println!("=======================\n");

    let score = report.overall_score;
    let score_str = format!("{score}/100");
    let score_colored = if score >= 80 {
        score_str.green()
    } else if score >= 50 {
        score_str.yellow()
    } else {
        score_str.red()
    };
    println!("Overall score: {score_colored}\n");

    if !report.security_issues.is_empty() {
        println!("Security ({}):", report.security_issues.len());
        for issue in &report.security_issues {
            println!(
                "  [{}] {} {} (line {})",
                severity_colored(issue.severity),
                issue.id.dimmed(),
                issue.message,
                issue.line
            );
            print_detail(&issue.code_snippet, &issue.suggested_fix);
            if let Some(cwe) = &issue.cwe {
                println!("      {}", cwe.dimmed());
            }
        }
        println!();
    }

    if !report.performance_issues.is_empty() {
        println!("Performance ({}):", report.performance_issues.len());
        for issue in &report.performance_issues {
            println!(
                "  [{}] {} {} (line {})",
                impact_colored(issue.impact),
                issue.id.dimmed(),
                issue.message,
                issue.line
            );
            print_detail(&issue.code_snippet, &issue.suggested_fix);
            if let Some(estimate) = &issue.estimated_improvement {
                println!("      {}", estimate.dimmed());
            }
        }
        println!();
    }

    if !report.suggestions.is_empty() {
        println!("Suggestions ({}):", report.suggestions.len());
        for suggestion in &report.suggestions {
            println!(
                "  [{}] {} {} (line {})",
                style_severity_colored(suggestion.severity),
                suggestion.id.dimmed(),
                suggestion.message,
                suggestion.line
            );
            print_detail(&suggestion.code_snippet, &suggestion.suggested_fix);
        }
        println!();
    }

    if !report.best_practices.is_empty() {
        println!("Best Practices ({}):", report.best_practices.len());
        for practice in &report.best_practices {
            println!(
                "  {} {} (line {})",
                practice.id.dimmed(),
                practice.message,
                practice.line
            );
            print_detail(&practice.code_snippet, &practice.suggested_fix);
            if let Some(reference) = &practice.reference {
                println!("      {}", reference.underline().dimmed());
            }
        }
        println!();
    }

    let total = report.security_issues.len()
        + report.performance_issues.len()
        + report.suggestions.len()
        + report.best_practices.len();
    if total == 0 {
        println!("{}", "No issues found.".green());
    }
}

pub fn print_rules(registry: &RuleRegistry) {
    println!("Registered rules ({}):", registry.len());
    for rule in registry.rules() {
        let spec = rule.spec();
        println!(
            "  {:<14} {:<28} {}",
            spec.category.display_name(),
            spec.name,
            spec.pattern.dimmed()
        );
    }
}

fn print_detail(snippet: &str, fix: &str) {
    if !snippet.is_empty() {
        println!("      {}", snippet.dimmed());
    }
    if !fix.is_empty() {
        println!("      fix: {fix}");
    }
}

fn severity_colored(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Critical => "critical".red().bold(),
        Severity::High => "high".red(),
        Severity::Medium => "medium".yellow(),
        Severity::Low => "low".normal(),
        Severity::Info => "info".dimmed(),
    }
}

fn impact_colored(impact: Impact) -> colored::ColoredString {
    match impact {
        Impact::High => "high".red(),
        Impact::Medium => "medium".yellow(),
        Impact::Low => "low".normal(),
    }
}

fn style_severity_colored(severity: StyleSeverity) -> colored::ColoredString {
    match severity {
        StyleSeverity::Error => "error".red(),
        StyleSeverity::Warning => "warning".yellow(),
        StyleSeverity::Info => "info".dimmed(),
    }
}
