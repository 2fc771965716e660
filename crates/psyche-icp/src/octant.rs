//! Octant classification on the interpersonal circumplex.
//!
//! Dominance and affiliation are derived from the agency and warmth
//! axis scores and rescaled to [-1, 1]. Each of the eight anchor
//! coordinates is compared against the respondent's point with a
//! Gaussian similarity kernel. The geometric rank-1 candidate wins
//! unless the top two are too close, in which case a deterministic rule
//! ladder over the four axis scores picks the primary instead. Both
//! paths are part of the instrument: the geometry is smooth, the rules
//! encode known boundary cases.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use psyche_core::{AxisScores, OctantStyle};

/// Width of the Gaussian similarity kernel
pub const SIGMA: f64 = 0.75;
/// Rank-1/rank-2 similarity gap below which the rule ladder decides
pub const TIE_THRESHOLD: f64 = 0.05;
/// Minimum similarity for a secondary style to be reported
pub const SECONDARY_FLOOR: f64 = 0.45;

/// Anchor coordinates (dominance, affiliation) for the eight styles,
/// at 45-degree steps around the unit circle.
pub const ANCHORS: [(OctantStyle, f64, f64); 8] = [
    (OctantStyle::Director, 1.0, 0.0),
    (OctantStyle::Mentor, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (OctantStyle::Harmonizer, 0.0, 1.0),
    (OctantStyle::Supporter, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (OctantStyle::Observer, -1.0, 0.0),
    (OctantStyle::Analyst, -FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (OctantStyle::Independent, 0.0, -1.0),
    (OctantStyle::Challenger, FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// One style's Gaussian similarity to the respondent's point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSimilarity {
    pub style: OctantStyle,
    pub similarity: f64,
}

/// Full classification output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OctantClassification {
    pub primary: OctantStyle,
    pub secondary: Option<OctantStyle>,
    /// Respondent's dominance coordinate in [-1, 1]
    pub dominance: f64,
    /// Respondent's affiliation coordinate in [-1, 1]
    pub affiliation: f64,
    /// All eight similarities, sorted descending. Each is in (0, 1]
    /// and independently meaningful; the vector is not normalized.
    pub similarities: Vec<StyleSimilarity>,
    /// Similarity gap between the geometric rank-1 and rank-2
    pub separation_gap: f64,
    /// Whether the rule ladder overrode the geometric rank-1
    pub tie_break_used: bool,
}

fn rescale(score: u8) -> f64 {
    (score as f64 - 50.0) / 50.0
}

fn gaussian_similarity(dx: f64, dy: f64) -> f64 {
    let distance_sq = dx * dx + dy * dy;
    (-distance_sq / (2.0 * SIGMA * SIGMA)).exp()
}

/// Deterministic rule ladder over the four axis scores, with cut
/// points at 45/55/60. Evaluated top to bottom; order is significant.
fn rule_based_primary(scores: &AxisScores) -> OctantStyle {
    let agency = scores.agency;
    let warmth = scores.warmth;
    let boundary = scores.boundary;
    let resilience = scores.resilience;

    if agency >= 60 && warmth >= 55 {
        OctantStyle::Mentor
    } else if agency >= 60 && warmth <= 45 {
        OctantStyle::Challenger
    } else if agency >= 55 {
        OctantStyle::Director
    } else if warmth >= 60 && agency <= 45 {
        OctantStyle::Supporter
    } else if warmth >= 55 {
        OctantStyle::Harmonizer
    } else if agency <= 45 && warmth <= 45 && boundary >= 55 {
        OctantStyle::Independent
    } else if agency <= 45 && resilience <= 45 {
        OctantStyle::Analyst
    } else {
        OctantStyle::Observer
    }
}

/// Classify a respondent from their aggregated axis scores.
pub fn classify(scores: &AxisScores) -> OctantClassification {
    let dominance = rescale(scores.agency);
    let affiliation = rescale(scores.warmth);

    let mut similarities: Vec<StyleSimilarity> = ANCHORS
        .iter()
        .map(|&(style, ax, ay)| StyleSimilarity {
            style,
            similarity: gaussian_similarity(dominance - ax, affiliation - ay),
        })
        .collect();

    // Stable sort keeps anchor declaration order for exact ties
    similarities.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let separation_gap = similarities[0].similarity - similarities[1].similarity;
    let tie_break_used = separation_gap < TIE_THRESHOLD;

    let primary = if tie_break_used {
        let chosen = rule_based_primary(scores);
        tracing::debug!(
            gap = separation_gap,
            style = chosen.code(),
            "similarity gap below threshold, rule ladder decided primary"
        );
        chosen
    } else {
        similarities[0].style
    };

    // Highest-ranked candidate other than the primary, if it clears
    // the floor. Guarantees secondary != primary even when the rule
    // ladder picked something off the geometric top.
    let secondary = similarities
        .iter()
        .find(|s| s.style != primary)
        .filter(|s| s.similarity > SECONDARY_FLOOR)
        .map(|s| s.style);

    OctantClassification {
        primary,
        secondary,
        dominance,
        affiliation,
        similarities,
        separation_gap,
        tie_break_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_similarities_in_unit_interval() {
        let scores = AxisScores::new(90, 10, 50, 50);
        let result = classify(&scores);

        assert_eq!(result.similarities.len(), 8);
        for s in &result.similarities {
            assert!(s.similarity > 0.0 && s.similarity <= 1.0);
        }
    }

    #[test]
    fn test_high_agency_classifies_director() {
        let scores = AxisScores::new(100, 50, 50, 50);
        let result = classify(&scores);

        assert_eq!(result.primary, OctantStyle::Director);
        assert!(!result.tie_break_used);
        assert_abs_diff_eq!(result.dominance, 1.0);
        assert_abs_diff_eq!(result.affiliation, 0.0);
        // Sitting exactly on the anchor gives similarity 1
        assert_abs_diff_eq!(result.similarities[0].similarity, 1.0);
    }

    #[test]
    fn test_neutral_point_defers_to_rule_ladder() {
        // At the origin all eight anchors are equidistant, so the gap
        // is zero and the ladder decides; all-50 falls through to
        // Observer.
        let result = classify(&AxisScores::neutral());

        assert!(result.tie_break_used);
        assert_abs_diff_eq!(result.separation_gap, 0.0);
        assert_eq!(result.primary, OctantStyle::Observer);
    }

    #[test]
    fn test_secondary_floor() {
        // Origin similarities are exp(-1/1.125) ~ 0.41, under the floor
        let result = classify(&AxisScores::neutral());
        assert!(result.secondary.is_none());

        // A strong off-axis point has a close, meaningful runner-up
        let result = classify(&AxisScores::new(85, 75, 50, 50));
        assert!(result.secondary.is_some());
    }

    #[test]
    fn test_secondary_never_equals_primary() {
        for agency in (0..=100).step_by(10) {
            for warmth in (0..=100).step_by(10) {
                let result = classify(&AxisScores::new(agency, warmth, 50, 50));
                if let Some(secondary) = result.secondary {
                    assert_ne!(secondary, result.primary);
                }
            }
        }
    }

    #[test]
    fn test_rule_ladder_cut_points() {
        assert_eq!(
            rule_based_primary(&AxisScores::new(60, 55, 50, 50)),
            OctantStyle::Mentor
        );
        assert_eq!(
            rule_based_primary(&AxisScores::new(60, 45, 50, 50)),
            OctantStyle::Challenger
        );
        assert_eq!(
            rule_based_primary(&AxisScores::new(55, 50, 50, 50)),
            OctantStyle::Director
        );
        assert_eq!(
            rule_based_primary(&AxisScores::new(45, 60, 50, 50)),
            OctantStyle::Supporter
        );
        assert_eq!(
            rule_based_primary(&AxisScores::new(50, 55, 50, 50)),
            OctantStyle::Harmonizer
        );
        assert_eq!(
            rule_based_primary(&AxisScores::new(45, 45, 55, 50)),
            OctantStyle::Independent
        );
        assert_eq!(
            rule_based_primary(&AxisScores::new(45, 46, 50, 45)),
            OctantStyle::Analyst
        );
        assert_eq!(
            rule_based_primary(&AxisScores::new(50, 50, 50, 50)),
            OctantStyle::Observer
        );
    }
}
