//! Ranked leaderboard structures and terminal/Markdown rendering.

use chrono::{DateTime, Utc};
use quantsnap_factors::{FactorName, FactorVector};
use quantsnap_score::ScoreResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ranked ticker with its score, factor breakdown and display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Scores and rank for the ticker.
    pub result: ScoreResult,
    /// Raw factor values behind the score.
    pub factors: FactorVector,
    /// Cross-sectional z-scores aligned with [`FactorName::ALL`].
    pub z_scores: Vec<Option<f64>>,
    /// Company name, when known.
    pub name: Option<String>,
    /// Sector classification, when known.
    pub sector: Option<String>,
    /// Most recent closing price.
    pub last_price: Option<f64>,
    /// Percentage change between the last two closes.
    pub daily_change_pct: Option<f64>,
}

impl LeaderboardEntry {
    /// Fraction of the factor set defined for this ticker, in [0, 1].
    pub fn coverage(&self) -> f64 {
        self.factors.coverage()
    }

    /// Whether every factor is defined for this ticker.
    pub fn has_complete_data(&self) -> bool {
        self.factors.is_complete()
    }

    /// Symbol with a `*` marker appended when factor coverage is partial.
    pub fn marked_symbol(&self) -> String {
        if self.has_complete_data() {
            self.result.symbol.clone()
        } else {
            format!("{}*", self.result.symbol)
        }
    }

    /// Per-factor `(name, raw, z-score)` breakdown, aligned with
    /// [`FactorName::ALL`].
    pub fn factor_breakdown(&self) -> Vec<(FactorName, Option<f64>, Option<f64>)> {
        FactorName::ALL
            .iter()
            .enumerate()
            .map(|(i, name)| {
                (
                    *name,
                    self.factors.get(*name),
                    self.z_scores.get(i).copied().flatten(),
                )
            })
            .collect()
    }
}

/// A ranked universe snapshot ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Universe the ranking was built from.
    pub universe: String,
    /// When the leaderboard was generated.
    pub generated_at: DateTime<Utc>,
    /// Entries in rank order.
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create a leaderboard stamped with the current time.
    ///
    /// Entries are expected to already be in rank order.
    pub fn new(universe: impl Into<String>, entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            universe: universe.into(),
            generated_at: Utc::now(),
            entries,
        }
    }

    /// Number of ranked tickers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the leaderboard is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry was scored on partial factor coverage.
    pub fn has_partial_entries(&self) -> bool {
        self.entries.iter().any(|e| !e.has_complete_data())
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nLeaderboard: {}\n", self.universe));
        output.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&"=".repeat(98));
        output.push('\n');
        output.push_str(&format!(
            "{:>4} {:<8} {:<26} {:>8} {:>8} {:>8} {:>9} {:>9} {:>9}\n",
            "Rank", "Symbol", "Name", "Score", "Trad", "Quality", "Mom 1M", "Mom 3M", "Price"
        ));
        output.push_str(&"-".repeat(98));
        output.push('\n');

        for entry in &self.entries {
            let name: String = entry
                .name
                .as_deref()
                .unwrap_or("-")
                .chars()
                .take(26)
                .collect();

            output.push_str(&format!(
                "{:>4} {:<8} {:<26} {:>8.3} {:>8.3} {:>8.3} {:>9} {:>9} {:>9}\n",
                entry.result.rank.map_or_else(|| "-".to_string(), |r| r.to_string()),
                entry.marked_symbol(),
                name,
                entry.result.composite_score,
                entry.result.traditional_score,
                entry.result.quality_score,
                format_pct(entry.factors.momentum_1m),
                format_pct(entry.factors.momentum_3m),
                format_price(entry.last_price),
            ));
        }

        output.push_str(&"=".repeat(98));
        output.push('\n');

        if self.has_partial_entries() {
            output.push_str("* scored on partial factor coverage\n");
        }

        output
    }

    /// Format as Markdown for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Leaderboard: {}\n\n", self.universe));
        output.push_str(&format!(
            "**Generated:** {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        output.push_str(
            "| Rank | Symbol | Name | Score | Traditional | Quality | Coverage |\n",
        );
        output.push_str(
            "|------|--------|------|-------|-------------|---------|----------|\n",
        );

        for entry in &self.entries {
            output.push_str(&format!(
                "| {} | {} | {} | {:.3} | {:.3} | {:.3} | {:.0}% |\n",
                entry.result.rank.map_or_else(|| "-".to_string(), |r| r.to_string()),
                entry.marked_symbol(),
                entry.name.as_deref().unwrap_or("-"),
                entry.result.composite_score,
                entry.result.traditional_score,
                entry.result.quality_score,
                entry.coverage() * 100.0,
            ));
        }

        if self.has_partial_entries() {
            output.push_str("\n`*` scored on partial factor coverage\n");
        }

        output
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Leaderboard: {} ({} tickers)", self.universe, self.len())?;
        for entry in &self.entries {
            writeln!(f, "  {}", entry.result)?;
        }
        Ok(())
    }
}

fn format_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:+.2}%", v))
}

fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}
