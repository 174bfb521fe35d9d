//! Report aggregation and scoring.
//!
//! Pure data transformation: combine the four finding lists and reduce them
//! to one score. No error path.

use crate::types::{AnalysisReport, BestPractice, PerformanceIssue, SecurityIssue, Suggestion};

const MAX_SCORE: i64 = 100;
const PENALTY_PER_ISSUE: i64 = 5;

/// Compute the aggregate quality score for a total finding count.
///
/// A flat 5-point deduction per finding, uniform across severities, clamped
/// to [0, 100].
pub fn overall_score(total_issues: usize) -> u8 {
    let deductions =
        PENALTY_PER_ISSUE.saturating_mul(i64::try_from(total_issues).unwrap_or(i64::MAX));
    (MAX_SCORE.saturating_sub(deductions)).clamp(0, MAX_SCORE) as u8
}

impl AnalysisReport {
    /// Combine the four finding lists into a report with its score.
    pub fn assemble(
        suggestions: Vec<Suggestion>,
        security_issues: Vec<SecurityIssue>,
        performance_issues: Vec<PerformanceIssue>,
        best_practices: Vec<BestPractice>,
    ) -> Self {
        let total_issues = suggestions.len()
            + security_issues.len()
            + performance_issues.len()
            + best_practices.len();

        Self {
            suggestions,
            security_issues,
            performance_issues,
            best_practices,
            overall_score: overall_score(total_issues),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_score_formula() {
        assert_eq!(overall_score(0), 100);
        assert_eq!(overall_score(1), 95);
        assert_eq!(overall_score(20), 0);
        // Floor: 21 findings would be -5, clamped to 0
        assert_eq!(overall_score(21), 0);
    }

    #[test]
    fn test_assemble_counts_all_lists() {
        let report = AnalysisReport::assemble(vec![], vec![], vec![], vec![]);
        assert_eq!(report.overall_score, 100);
        assert!(report.suggestions.is_empty());
    }

    proptest! {
        #[test]
        fn score_always_in_range(total in any::<usize>()) {
            let score = overall_score(total);
            prop_assert!(score <= 100);
        }

        #[test]
        fn score_matches_linear_penalty(total in 0usize..1000) {
            let expected = (100i64 - 5 * total as i64).max(0) as u8;
            prop_assert_eq!(overall_score(total), expected);
        }
    }
}
