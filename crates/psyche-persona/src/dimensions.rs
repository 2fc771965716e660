//! Integrated dimension scoring.
//!
//! A second, independent instrument over the same answer pool. Each of
//! the five dimensions declares explicit signed `(question_id, sign)`
//! contributions rather than a blanket per-axis item list, so a single
//! physical question can feed, with a sign, exactly the dimensions the
//! instrument intends. Scores are z-normalized across the five
//! dimensions and ranked with a declared priority order so that exact
//! ties stay deterministic.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use psyche_core::AnswerSet;
use psyche_icp::likert::{coerce_likert, NEUTRAL};

/// Floor applied to the population standard deviation so z-scores stay
/// defined when all five dimensions tie
pub const STD_FLOOR: f64 = 1.0;

/// The five integrated dimensions, declared in priority order:
/// exact z-score ties rank earlier variants first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Assertiveness,
    Empathy,
    Boundary,
    Recovery,
    Rumination,
}

impl Dimension {
    /// Priority order used for ranking tie-breaks
    pub const PRIORITY: [Dimension; 5] = [
        Dimension::Assertiveness,
        Dimension::Empathy,
        Dimension::Boundary,
        Dimension::Recovery,
        Dimension::Rumination,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Assertiveness => "Assertiveness",
            Dimension::Empathy => "Empathy",
            Dimension::Boundary => "Boundary",
            Dimension::Recovery => "Recovery",
            Dimension::Rumination => "Rumination",
        }
    }

    /// Many-to-one dimension-to-cluster mapping. Intentional: two
    /// dimensions share the Assertive cluster and two share Grounded.
    pub fn cluster(&self) -> Cluster {
        match self {
            Dimension::Assertiveness | Dimension::Boundary => Cluster::Assertive,
            Dimension::Empathy => Cluster::Relational,
            Dimension::Recovery | Dimension::Rumination => Cluster::Grounded,
        }
    }
}

/// The three clusters the top dimension maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cluster {
    Assertive,
    Relational,
    Grounded,
}

impl Cluster {
    pub const ALL: [Cluster; 3] = [Cluster::Assertive, Cluster::Relational, Cluster::Grounded];

    pub fn name(&self) -> &'static str {
        match self {
            Cluster::Assertive => "Assertive",
            Cluster::Relational => "Relational",
            Cluster::Grounded => "Grounded",
        }
    }

    /// Single-letter id used in profile identifiers
    pub fn letter(&self) -> char {
        match self {
            Cluster::Assertive => 'A',
            Cluster::Relational => 'R',
            Cluster::Grounded => 'G',
        }
    }
}

/// One signed item contribution to a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub question_id: String,
    /// +1 or -1
    pub sign: i8,
}

impl Contribution {
    pub fn new(question_id: &str, sign: i8) -> Self {
        debug_assert!(sign == 1 || sign == -1);
        Self {
            question_id: question_id.to_string(),
            sign,
        }
    }
}

/// The built-in contribution table.
///
/// Note the signed cross-contributions: `re_04`, `wa_04` and `ag_04`
/// feed Rumination positively while feeding their home dimensions
/// negatively.
pub static DEFAULT_CONTRIBUTIONS: Lazy<Vec<(Dimension, Vec<Contribution>)>> = Lazy::new(|| {
    vec![
        (
            Dimension::Assertiveness,
            vec![Contribution::new("ag_02", 1), Contribution::new("ag_04", -1)],
        ),
        (
            Dimension::Empathy,
            vec![Contribution::new("wa_03", 1), Contribution::new("wa_04", -1)],
        ),
        (
            Dimension::Boundary,
            vec![Contribution::new("bo_02", 1), Contribution::new("bo_03", 1)],
        ),
        (
            Dimension::Recovery,
            vec![Contribution::new("re_01", 1), Contribution::new("re_04", -1)],
        ),
        (
            Dimension::Rumination,
            vec![
                Contribution::new("re_04", 1),
                Contribution::new("wa_04", 1),
                Contribution::new("ag_04", 1),
            ],
        ),
    ]
});

/// One dimension's score, z-score, and rank context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// Rescaled 0..=100
    pub score: u8,
    /// Distance from the five-dimension mean, in (floored) standard
    /// deviations
    pub z_score: f64,
}

/// Full output of the integrated instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionResult {
    /// All five scores in priority order
    pub scores: Vec<DimensionScore>,
    /// Same five, ranked by z-score descending (priority-ordered ties)
    pub ranked: Vec<DimensionScore>,
    pub top_dimension: Dimension,
    pub top_cluster: Cluster,
}

/// Scorer over a frozen contribution table.
pub struct DimensionScorer {
    table: Vec<(Dimension, Vec<Contribution>)>,
}

impl DimensionScorer {
    pub fn new(table: Vec<(Dimension, Vec<Contribution>)>) -> Self {
        Self { table }
    }

    fn contributions_for(&self, dimension: Dimension) -> &[Contribution] {
        self.table
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, c)| c.as_slice())
            .unwrap_or(&[])
    }

    /// Score one dimension: center each contributing answer onto
    /// [-1, 1], apply its sign, average, rescale to 0..=100.
    fn score_dimension(&self, dimension: Dimension, answers: &AnswerSet) -> u8 {
        let contributions = self.contributions_for(dimension);
        if contributions.is_empty() {
            return 50;
        }

        let mut sum = 0.0;
        for c in contributions {
            let value = answers
                .get(&c.question_id)
                .and_then(coerce_likert)
                .unwrap_or(NEUTRAL);
            let centered = (value as f64 - 3.0) / 2.0;
            sum += centered * c.sign as f64;
        }
        let mean = sum / contributions.len() as f64;

        ((mean + 1.0) * 50.0).round() as u8
    }

    /// Score all five dimensions and rank them.
    pub fn score(&self, answers: &AnswerSet) -> DimensionResult {
        let raw: Vec<(Dimension, u8)> = Dimension::PRIORITY
            .iter()
            .map(|&d| (d, self.score_dimension(d, answers)))
            .collect();

        let mean = raw.iter().map(|&(_, s)| s as f64).sum::<f64>() / raw.len() as f64;
        let variance = raw
            .iter()
            .map(|&(_, s)| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / raw.len() as f64;
        let std = variance.sqrt().max(STD_FLOOR);

        let scores: Vec<DimensionScore> = raw
            .iter()
            .map(|&(dimension, score)| DimensionScore {
                dimension,
                score,
                z_score: (score as f64 - mean) / std,
            })
            .collect();

        // Stable sort over the priority-ordered list keeps exact
        // z-score ties deterministic
        let mut ranked = scores.clone();
        ranked.sort_by(|a, b| {
            b.z_score
                .partial_cmp(&a.z_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let top = ranked[0];

        DimensionResult {
            scores,
            ranked,
            top_dimension: top.dimension,
            top_cluster: top.dimension.cluster(),
        }
    }
}

impl Default for DimensionScorer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRIBUTIONS.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use psyche_core::AnswerValue;

    fn answers(entries: &[(&str, i64)]) -> AnswerSet {
        entries
            .iter()
            .map(|&(id, v)| (id.to_string(), AnswerValue::Integer(v)))
            .collect()
    }

    #[test]
    fn test_neutral_answers_score_fifty() {
        let scorer = DimensionScorer::default();
        let result = scorer.score(&AnswerSet::new());

        for score in &result.scores {
            assert_eq!(score.score, 50);
            assert_abs_diff_eq!(score.z_score, 0.0);
        }
        // All-tie ranking falls back to priority order
        assert_eq!(result.top_dimension, Dimension::Assertiveness);
        assert_eq!(result.top_cluster, Cluster::Assertive);
    }

    #[test]
    fn test_signed_contributions() {
        let scorer = DimensionScorer::default();

        // Direct item high pushes up; negative-signed item high pulls down
        let result = scorer.score(&answers(&[("ag_02", 5)]));
        let assertiveness = result.scores[0];
        assert_eq!(assertiveness.dimension, Dimension::Assertiveness);
        assert_eq!(assertiveness.score, 75);

        let result = scorer.score(&answers(&[("ag_02", 5), ("ag_04", 5)]));
        assert_eq!(result.scores[0].score, 50);
    }

    #[test]
    fn test_zero_variance_guard() {
        let scorer = DimensionScorer::default();
        let result = scorer.score(&AnswerSet::new());

        // All dimensions tie at 50: std floors at 1.0 instead of 0
        for score in &result.ranked {
            assert!(score.z_score.is_finite());
        }
    }

    #[test]
    fn test_documented_scenario_assertive_cluster() {
        let scorer = DimensionScorer::default();
        let result = scorer.score(&answers(&[
            ("ag_02", 5),
            ("ag_04", 1),
            ("wa_03", 5),
            ("bo_02", 5),
            ("bo_03", 5),
            ("re_01", 5),
            ("re_04", 1),
            ("wa_04", 1),
        ]));

        let by_dim = |d: Dimension| {
            result
                .scores
                .iter()
                .find(|s| s.dimension == d)
                .map(|s| s.score)
                .unwrap()
        };

        assert_eq!(by_dim(Dimension::Assertiveness), 100);
        assert_eq!(by_dim(Dimension::Empathy), 100);
        assert_eq!(by_dim(Dimension::Boundary), 100);
        assert_eq!(by_dim(Dimension::Recovery), 100);
        assert_eq!(by_dim(Dimension::Rumination), 0);

        // Four-way tie at the top resolves by priority order
        assert_eq!(result.top_dimension, Dimension::Assertiveness);
        assert_eq!(result.top_cluster, Cluster::Assertive);
        assert_eq!(result.ranked[4].dimension, Dimension::Rumination);
    }

    #[test]
    fn test_ranked_descending() {
        let scorer = DimensionScorer::default();
        let result = scorer.score(&answers(&[("wa_03", 5), ("re_04", 5)]));

        for pair in result.ranked.windows(2) {
            assert!(pair[0].z_score >= pair[1].z_score);
        }
    }

    #[test]
    fn test_invalid_values_treated_as_neutral() {
        let scorer = DimensionScorer::default();
        let mut set = AnswerSet::new();
        set.insert("ag_02".to_string(), AnswerValue::Text("often".into()));
        set.insert("ag_04".to_string(), AnswerValue::Integer(42));

        let result = scorer.score(&set);
        assert_eq!(result.scores[0].score, 50);
    }
}
