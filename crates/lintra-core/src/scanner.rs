//! Line-oriented rule application.
//!
//! The scanner splits the submitted text on `\n`, numbers lines from 1
//! (blank lines included), and evaluates every rule against every line
//! independently. Matching is line-local: no cross-line context, which
//! bounds cost to O(lines × rules) and keeps categories independently
//! runnable.

use lintra_rules::CompiledRule;

/// A single rule firing on a single line.
#[derive(Debug, Clone, Copy)]
pub struct RawMatch<'c, 'r> {
    /// The rule that fired
    pub rule: &'r CompiledRule,
    /// 1-based line number in the original text
    pub line: usize,
    /// The untouched line content (callers trim for snippets)
    pub content: &'c str,
}

/// Apply a rule set to source text line by line.
///
/// All matches are reported: a line can fire zero, one, or several rules,
/// and rules fire in the order given (registration order), with no
/// first-match-wins suppression.
pub fn scan_lines<'c, 'r>(code: &'c str, rules: &[&'r CompiledRule]) -> Vec<RawMatch<'c, 'r>> {
    let mut matches = Vec::new();

    for (idx, content) in code.split('\n').enumerate() {
        for rule in rules {
            if rule.is_match(content) {
                matches.push(RawMatch {
                    rule,
                    line: idx + 1,
                    content,
                });
            }
        }
    }

    matches
}
