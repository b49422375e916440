//! Token frequency chart
//!
//! Text bar chart of the tokens that occur far more often than the
//! average vocabulary word, to eyeball stop-word candidates.

use std::fmt::Write;

use crate::spam::WordStatsTable;

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyChart {
    bars: Vec<(String, u64)>,
    mean: f64,
    multiplier: f64,
}

impl FrequencyChart {
    /// Keep tokens whose total is at least `multiplier` times the mean total
    pub fn from_table(table: &WordStatsTable, multiplier: f64) -> Self {
        let mean = if table.is_empty() {
            0.0
        } else {
            let sum: u64 = table.iter().map(|(_, stats)| stats.total).sum();
            sum as f64 / table.vocabulary_size() as f64
        };

        let cutoff = mean * multiplier;
        let mut bars: Vec<(String, u64)> = table
            .iter()
            .filter(|(_, stats)| stats.total as f64 >= cutoff)
            .map(|(token, stats)| (token.to_string(), stats.total))
            .collect();
        bars.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            bars,
            mean,
            multiplier,
        }
    }

    pub fn bars(&self) -> &[(String, u64)] {
        &self.bars
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Render horizontal bars scaled so the longest is `width` cells
    pub fn render(&self, width: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Word frequency (>= {}x mean of {:.2})",
            self.multiplier, self.mean
        );

        let label_width = self.bars.iter().map(|(token, _)| token.len()).max().unwrap_or(0);
        let max = self.bars.first().map(|(_, total)| *total).unwrap_or(0);

        for (token, total) in &self.bars {
            let cells = if max == 0 {
                0
            } else {
                ((*total as f64 / max as f64) * width as f64).round().max(1.0) as usize
            };
            let _ = writeln!(
                out,
                "{:<label_width$} | {} {}",
                token,
                "#".repeat(cells),
                total,
                label_width = label_width
            );
        }

        out
    }
}
