//! Leaderboard ordering.
//!
//! Sorts scored tickers descending by composite score with an ascending
//! symbol tie-break, guaranteeing a total order and reproducible output
//! regardless of input order.

use crate::compose::ScoreResult;
use std::cmp::Ordering;

/// Rank results descending by composite score, assigning 1-based ranks.
///
/// Equal scores order by ascending ticker symbol.
///
/// # Examples
///
/// ```
/// use quantsnap_score::{ScoreResult, rank};
///
/// let make = |symbol: &str, score: f64| ScoreResult {
///     symbol: symbol.to_string(),
///     traditional_score: score,
///     quality_score: 0.0,
///     composite_score: score,
///     rank: None,
/// };
///
/// let ranked = rank(vec![make("MSFT", 2.0), make("AAPL", 5.0)]);
/// assert_eq!(ranked[0].symbol, "AAPL");
/// assert_eq!(ranked[0].rank, Some(1));
/// ```
pub fn rank(mut results: Vec<ScoreResult>) -> Vec<ScoreResult> {
    results.sort_by(|a, b| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    for (index, result) in results.iter_mut().enumerate() {
        result.rank = Some(index + 1);
    }

    results
}

/// Rank results and keep the first `n`.
///
/// An `n` larger than the universe returns the full ranked sequence.
pub fn top_n(results: Vec<ScoreResult>, n: usize) -> Vec<ScoreResult> {
    let mut ranked = rank(results);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(symbol: &str, score: f64) -> ScoreResult {
        ScoreResult {
            symbol: symbol.to_string(),
            traditional_score: 0.0,
            quality_score: 0.0,
            composite_score: score,
            rank: None,
        }
    }

    #[test]
    fn test_descending_order() {
        let ranked = rank(vec![
            result("LOW", 1.0),
            result("HIGH", 9.0),
            result("MID", 5.0),
        ]);

        let symbols: Vec<&str> = ranked.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["HIGH", "MID", "LOW"]);
        assert_eq!(ranked[0].rank, Some(1));
        assert_eq!(ranked[2].rank, Some(3));
    }

    #[test]
    fn test_tie_break_by_symbol() {
        let ranked = rank(vec![
            result("ZZZ", 5.0),
            result("AAA", 5.0),
            result("MMM", 5.0),
        ]);

        let symbols: Vec<&str> = ranked.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAA", "MMM", "ZZZ"]);
    }

    #[test]
    fn test_order_invariant_under_input_permutation() {
        let a = rank(vec![
            result("B", 3.0),
            result("A", 3.0),
            result("C", 7.0),
        ]);
        let b = rank(vec![
            result("C", 7.0),
            result("B", 3.0),
            result("A", 3.0),
        ]);

        assert_eq!(a, b);
    }

    #[test]
    fn test_top_n() {
        let results = vec![result("A", 1.0), result("B", 2.0), result("C", 3.0)];

        let top = top_n(results, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].symbol, "C");
        assert_eq!(top[1].symbol, "B");
    }

    #[test]
    fn test_top_n_larger_than_universe() {
        let results = vec![result("A", 1.0), result("B", 2.0)];

        let top = top_n(results, 50);

        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_empty_universe() {
        assert!(rank(vec![]).is_empty());
        assert!(top_n(vec![], 10).is_empty());
    }
}
