//! Confidence estimation.
//!
//! Four independent sub-scores, each 0..=100, combined with fixed
//! weights:
//!
//! | Sub-score    | Weight | Source                                    |
//! |--------------|--------|-------------------------------------------|
//! | completeness | 0.40   | share of catalog items actually answered  |
//! | consistency  | 0.35   | paired direct/reverse item agreement      |
//! | pace         | 0.15   | elapsed completion time, when supplied    |
//! | separation   | 0.10   | rank-1/rank-2 octant similarity gap       |

use serde::{Deserialize, Serialize};

use psyche_core::{ConfidenceLevel, ConsistencyPair, Expectation};

use crate::likert::NormalizedAnswers;

pub const W_COMPLETENESS: f64 = 0.40;
pub const W_CONSISTENCY: f64 = 0.35;
pub const W_PACE: f64 = 0.15;
pub const W_SEPARATION: f64 = 0.10;

/// Consistency sub-score when no pairs are configured
pub const CONSISTENCY_DEFAULT: u8 = 60;
/// Pace sub-score when completion time is not supplied
pub const PACE_DEFAULT: u8 = 70;

/// Confidence value with its sub-scores, kept for transparency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub completeness: u8,
    pub consistency: u8,
    pub pace: u8,
    pub separation: u8,
    /// Weighted combination, 0..=100
    pub value: u8,
    pub level: ConfidenceLevel,
}

fn completeness_score(answers: &NormalizedAnswers) -> u8 {
    let total = answers.total_questions().max(1);
    let missing_share = 100.0 * answers.missing_count() as f64 / total as f64;
    100u8.saturating_sub(missing_share.round() as u8)
}

/// Hit rate over the configured item pairs. Opposite pairs expect the
/// answers to diverge by at least 2 on the 1..=5 scale; Agree pairs
/// expect them within 1.
fn consistency_score(answers: &NormalizedAnswers, pairs: &[ConsistencyPair]) -> u8 {
    if pairs.is_empty() {
        return CONSISTENCY_DEFAULT;
    }

    let hits = pairs
        .iter()
        .filter(|pair| {
            let a = answers.get(&pair.direct_id) as i16;
            let b = answers.get(&pair.paired_id) as i16;
            let diff = (a - b).abs();
            match pair.expectation {
                Expectation::Opposite => diff >= 2,
                Expectation::Agree => diff <= 1,
            }
        })
        .count();

    ((100.0 * hits as f64) / pairs.len() as f64).round() as u8
}

/// Under ~40s is too fast to be meaningful; over 75s suggests real
/// deliberation.
fn pace_score(completion_seconds: Option<f64>) -> u8 {
    match completion_seconds {
        None => PACE_DEFAULT,
        Some(s) if s < 40.0 => 20,
        Some(s) if s <= 75.0 => 50,
        Some(_) => 90,
    }
}

fn separation_score(gap: f64) -> u8 {
    (gap * 200.0).clamp(0.0, 100.0).round() as u8
}

/// Combine the four sub-scores into one confidence value and level.
pub fn estimate(
    answers: &NormalizedAnswers,
    pairs: &[ConsistencyPair],
    completion_seconds: Option<f64>,
    separation_gap: f64,
) -> ConfidenceBreakdown {
    let completeness = completeness_score(answers);
    let consistency = consistency_score(answers, pairs);
    let pace = pace_score(completion_seconds);
    let separation = separation_score(separation_gap);

    let value = (W_COMPLETENESS * completeness as f64
        + W_CONSISTENCY * consistency as f64
        + W_PACE * pace as f64
        + W_SEPARATION * separation as f64)
        .round() as u8;

    ConfidenceBreakdown {
        completeness,
        consistency,
        pace,
        separation,
        value,
        level: ConfidenceLevel::from_score(value),
    }
}
