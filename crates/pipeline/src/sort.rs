//! Ordering of the benchmark results table.

use data_loader::BenchmarkResult;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column the results table is sorted by (always descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    NeedleInHaystack,
    PrReview,
    TruePositiveRate,
    Remediated,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::NeedleInHaystack,
        SortField::PrReview,
        SortField::TruePositiveRate,
        SortField::Remediated,
    ];

    /// Numeric key of `result` for this column.
    ///
    /// The URL-list columns sort by how many issues the list holds.
    pub fn key(self, result: &BenchmarkResult) -> f64 {
        match self {
            SortField::NeedleInHaystack => result.needle_in_haystack.len() as f64,
            SortField::PrReview => result.pr_review.len() as f64,
            SortField::TruePositiveRate => result.true_positive_rate,
            SortField::Remediated => result.remediated.len() as f64,
        }
    }

    /// Kebab-case name, as accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::NeedleInHaystack => "needle-in-haystack",
            SortField::PrReview => "pr-review",
            SortField::TruePositiveRate => "true-positive-rate",
            SortField::Remediated => "remediated",
        }
    }

    /// Column heading in the results table
    pub fn title(self) -> &'static str {
        match self {
            SortField::NeedleInHaystack => "Needle in Haystack",
            SortField::PrReview => "PR Review",
            SortField::TruePositiveRate => "True Positive Rate",
            SortField::Remediated => "Remediated",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| {
                let expected: Vec<&str> = SortField::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown sort field '{}' (expected one of: {})", s, expected.join(", "))
            })
    }
}

/// Sort results by `field`, highest first.
///
/// The sort is stable: results with equal keys keep their input order, so
/// repeated sorts of the same data always agree. `-0.0` and `0.0` are equal
/// keys.
pub fn sort_results(results: &[BenchmarkResult], field: SortField) -> Vec<&BenchmarkResult> {
    let mut sorted: Vec<&BenchmarkResult> = results.iter().collect();
    sorted.sort_by(|a, b| {
        field
            .key(b)
            .partial_cmp(&field.key(a))
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(agent: &str, needles: usize, pr: usize, tpr: f64, fixed: usize) -> BenchmarkResult {
        let urls = |n: usize| -> Vec<String> {
            (0..n).map(|i| format!("https://github.com/o/r/issues/{i}")).collect()
        };
        BenchmarkResult {
            agent: agent.to_string(),
            needle_in_haystack: urls(needles),
            pr_review: urls(pr),
            true_positive_rate: tpr,
            remediated: urls(fixed),
            ..Default::default()
        }
    }

    fn agents<'a>(sorted: &[&'a BenchmarkResult]) -> Vec<&'a str> {
        sorted.iter().map(|r| r.agent.as_str()).collect()
    }

    #[test]
    fn test_sort_by_each_field() {
        let results = vec![
            result("a", 1, 5, 0.10, 0),
            result("b", 3, 1, 0.50, 2),
            result("c", 2, 3, 0.25, 1),
        ];

        assert_eq!(agents(&sort_results(&results, SortField::NeedleInHaystack)), ["b", "c", "a"]);
        assert_eq!(agents(&sort_results(&results, SortField::PrReview)), ["a", "c", "b"]);
        assert_eq!(agents(&sort_results(&results, SortField::TruePositiveRate)), ["b", "c", "a"]);
        assert_eq!(agents(&sort_results(&results, SortField::Remediated)), ["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let results = vec![
            result("first", 2, 0, 0.0, 0),
            result("top", 4, 0, 0.0, 0),
            result("second", 2, 0, 0.0, 0),
            result("third", 2, 0, 0.0, 0),
        ];

        let once = agents(&sort_results(&results, SortField::NeedleInHaystack));
        assert_eq!(once, ["top", "first", "second", "third"]);

        for _ in 0..5 {
            assert_eq!(agents(&sort_results(&results, SortField::NeedleInHaystack)), once);
        }
    }

    #[test]
    fn test_signed_zero_rates_tie() {
        let results = vec![
            result("negative-zero", 0, 0, -0.0, 0),
            result("zero", 0, 0, 0.0, 0),
            result("best", 0, 0, 0.3, 0),
        ];

        assert_eq!(
            agents(&sort_results(&results, SortField::TruePositiveRate)),
            ["best", "negative-zero", "zero"]
        );
    }

    #[test]
    fn test_parse_sort_field() {
        assert_eq!("pr-review".parse::<SortField>(), Ok(SortField::PrReview));
        assert_eq!("true_positive_rate".parse::<SortField>(), Ok(SortField::TruePositiveRate));
        assert!("agent".parse::<SortField>().is_err());
        assert_eq!(SortField::default(), SortField::NeedleInHaystack);
    }
}
