//! Format worldwide aggregate totals for display.
//!
//! Three metrics are tracked: cases, deaths, tests. Each renders as an
//! absolute count plus a per-million rate, thousands-separated, with a `"-"`
//! placeholder for anything the upstream feed left out. Degradation is per
//! field: a missing `testsPerOneMillion` never blanks its siblings.

use crate::features::PLACEHOLDER;
use crate::models::GlobalStats;
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// The fixed set of dashboard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Cases,
    Deaths,
    Tests,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cases, Metric::Deaths, Metric::Tests];

    pub fn title(self) -> &'static str {
        match self {
            Metric::Cases => "Total Cases",
            Metric::Deaths => "Total Deaths",
            Metric::Tests => "Total Tests",
        }
    }
}

/// One formatted dashboard entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStat {
    pub metric: Metric,
    /// Absolute count, thousands-separated, or `"-"`.
    pub primary_value: String,
    /// Per-million rate, thousands-separated, or `"-"`.
    pub secondary_value: String,
}

impl GlobalStats {
    pub fn total(&self, metric: Metric) -> Option<u64> {
        match metric {
            Metric::Cases => self.cases,
            Metric::Deaths => self.deaths,
            Metric::Tests => self.tests,
        }
    }

    pub fn per_million(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Cases => self.cases_per_one_million,
            Metric::Deaths => self.deaths_per_one_million,
            Metric::Tests => self.tests_per_one_million,
        }
    }
}

/// Format the aggregate totals. Always returns exactly three entries, in
/// [`Metric::ALL`] order; `None` input degrades every value to the
/// placeholder. Pure and deterministic.
pub fn to_aggregate_stats(stats: Option<&GlobalStats>) -> Vec<AggregateStat> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let (total, rate) = match stats {
                Some(g) => (g.total(metric), g.per_million(metric)),
                None => (None, None),
            };
            AggregateStat {
                metric,
                primary_value: fmt_count(total),
                secondary_value: fmt_rate(rate),
            }
        })
        .collect()
}

/// Thousands-separated absolute count, `"-"` when absent.
pub fn fmt_count(value: Option<u64>) -> String {
    match value {
        Some(n) => n.to_formatted_string(&Locale::en),
        None => PLACEHOLDER.to_string(),
    }
}

/// Thousands-separated rate with up to two decimals, `"-"` when absent or
/// not finite. Negative rates only appear in malformed input; they stay
/// visible rather than failing the pipeline.
pub fn fmt_rate(value: Option<f64>) -> String {
    let Some(v) = value else {
        return PLACEHOLDER.to_string();
    };
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let rendered = format!("{:.2}", v.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    let int: u128 = int_part.parse().unwrap_or(0);
    let mut out = int.to_formatted_string(&Locale::en);
    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    if v < 0.0 {
        out.insert(0, '-');
    }
    out
}
