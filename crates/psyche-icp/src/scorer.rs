//! Scoring orchestration and the `IcpResult` value object.

use serde::{Deserialize, Serialize};

use psyche_core::{
    AnswerSet, AxisScores, ConsistencyPair, OctantStyle, QuestionCatalog, Result, TEST_VERSION,
    DEFAULT_CATALOG, DEFAULT_CONSISTENCY_PAIRS,
};

use crate::axes;
use crate::confidence::{self, ConfidenceBreakdown};
use crate::explain::{self, Explainability};
use crate::likert;
use crate::octant::{self, StyleSimilarity};

/// Completion metadata echoed on every result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionMeta {
    pub answered_count: u32,
    pub missing_answer_count: u32,
    pub total_questions: u32,
    pub completion_seconds: Option<f64>,
}

/// The full scoring output. A plain value object: JSON-serializable,
/// never mutated after construction, no wall-clock dependency beyond
/// the echoed completion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcpResult {
    pub test_version: String,
    pub primary_style: OctantStyle,
    pub secondary_style: Option<OctantStyle>,
    pub axis_scores: AxisScores,
    /// Dominance coordinate in [-1, 1]
    pub dominance: f64,
    /// Affiliation coordinate in [-1, 1]
    pub affiliation: f64,
    /// All eight octant similarities, sorted descending
    pub similarities: Vec<StyleSimilarity>,
    pub tie_break_used: bool,
    pub confidence: ConfidenceBreakdown,
    pub completion: CompletionMeta,
    pub explainability: Explainability,
}

impl IcpResult {
    /// One-line textual rendering for logs and debugging
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Primary: {}", self.primary_style.name())];

        if let Some(secondary) = self.secondary_style {
            parts.push(format!("Secondary: {}", secondary.name()));
        }

        parts.push(format!(
            "Confidence: {} ({})",
            self.confidence.value,
            self.confidence.level.label()
        ));

        parts.join(" | ")
    }
}

/// Stateless scorer over a frozen catalog and consistency-pair list.
///
/// Construction validates that every pair references a catalog item;
/// scoring itself can never fail.
pub struct IcpScorer {
    catalog: QuestionCatalog,
    pairs: Vec<ConsistencyPair>,
}

impl IcpScorer {
    pub fn new(catalog: QuestionCatalog, pairs: Vec<ConsistencyPair>) -> Result<Self> {
        psyche_core::validate_pairs(&catalog, &pairs)?;
        Ok(Self { catalog, pairs })
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Score one respondent. Pure: identical inputs always yield an
    /// identical result.
    pub fn score(&self, answers: &AnswerSet, completion_seconds: Option<f64>) -> IcpResult {
        let normalized = likert::normalize(&self.catalog, answers);
        let axis_scores = axes::aggregate(&self.catalog, &normalized);
        let classification = octant::classify(&axis_scores);
        let confidence = confidence::estimate(
            &normalized,
            &self.pairs,
            completion_seconds,
            classification.separation_gap,
        );
        let explainability = explain::build(&self.catalog, &axis_scores, &normalized);

        tracing::debug!(
            primary = classification.primary.code(),
            confidence = confidence.value,
            missing = normalized.missing_count(),
            "scored ICP respondent"
        );

        IcpResult {
            test_version: TEST_VERSION.to_string(),
            primary_style: classification.primary,
            secondary_style: classification.secondary,
            axis_scores,
            dominance: classification.dominance,
            affiliation: classification.affiliation,
            similarities: classification.similarities,
            tie_break_used: classification.tie_break_used,
            confidence,
            completion: CompletionMeta {
                answered_count: normalized.answered_count(),
                missing_answer_count: normalized.missing_count(),
                total_questions: normalized.total_questions(),
                completion_seconds,
            },
            explainability,
        }
    }
}

impl Default for IcpScorer {
    /// Scorer over the built-in catalog and documented pairs
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.clone(),
            pairs: DEFAULT_CONSISTENCY_PAIRS.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psyche_core::{AnswerValue, Axis, ConfidenceLevel};

    fn answers(entries: &[(&str, i64)]) -> AnswerSet {
        entries
            .iter()
            .map(|&(id, v)| (id.to_string(), AnswerValue::Integer(v)))
            .collect()
    }

    fn full_answers(value: i64) -> AnswerSet {
        DEFAULT_CATALOG
            .iter()
            .map(|q| (q.id.clone(), AnswerValue::Integer(value)))
            .collect()
    }

    #[test]
    fn test_all_neutral_profile() {
        let scorer = IcpScorer::default();
        let result = scorer.score(&full_answers(3), None);

        for axis in Axis::ALL {
            assert_eq!(result.axis_scores.get(axis), 50);
        }
        assert_eq!(result.completion.missing_answer_count, 0);
        assert_eq!(result.completion.answered_count, 24);
        assert_eq!(result.dominance, 0.0);
        assert_eq!(result.affiliation, 0.0);
        assert_eq!(result.test_version, TEST_VERSION);
    }

    #[test]
    fn test_idempotent_output() {
        let scorer = IcpScorer::default();
        let set = answers(&[("ag_01", 5), ("wa_02", 2), ("re_03", 4)]);

        let a = scorer.score(&set, Some(60.0));
        let b = scorer.score(&set, Some(60.0));

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_secondary_differs_from_primary() {
        let scorer = IcpScorer::default();
        for value in 1..=5 {
            let result = scorer.score(&full_answers(value), Some(60.0));
            if let Some(secondary) = result.secondary_style {
                assert_ne!(secondary, result.primary_style);
            }
        }
    }

    #[test]
    fn test_result_serializes_with_stable_ids() {
        let scorer = IcpScorer::default();
        let mut set = full_answers(4);
        set.insert("wa_04".to_string(), AnswerValue::Integer(1));
        let result = scorer.score(&set, Some(90.0));

        let json = serde_json::to_value(&result).unwrap();
        let primary = json["primary_style"].as_str().unwrap();
        assert!(OctantStyle::ALL.iter().any(|s| s.code() == primary));
        assert!(json["confidence"]["value"].as_u64().unwrap() <= 100);
        assert_eq!(json["test_version"], TEST_VERSION);

        // Round-trips through serde
        let back: IcpResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.primary_style, result.primary_style);
    }

    #[test]
    fn test_missing_answers_lower_confidence() {
        let scorer = IcpScorer::default();

        let complete = scorer.score(&full_answers(4), Some(90.0));
        let partial = scorer.score(&answers(&[("ag_01", 4)]), Some(90.0));

        assert!(partial.completion.missing_answer_count > 0);
        assert!(partial.confidence.value < complete.confidence.value);
    }

    #[test]
    fn test_low_effort_response_scores_low_confidence() {
        let scorer = IcpScorer::default();
        // Nothing answered, rushed completion
        let result = scorer.score(&AnswerSet::new(), Some(12.0));

        assert_eq!(result.confidence.level, ConfidenceLevel::Low);
        assert_eq!(result.confidence.pace, 20);
        assert_eq!(result.confidence.completeness, 0);
    }

    #[test]
    fn test_scorer_rejects_unknown_pair_ids() {
        use psyche_core::Expectation;

        let pairs = vec![ConsistencyPair::new("ag_01", "zz_99", Expectation::Opposite)];
        assert!(IcpScorer::new(DEFAULT_CATALOG.clone(), pairs).is_err());
    }

    #[test]
    fn test_summary_render() {
        let scorer = IcpScorer::default();
        let result = scorer.score(&full_answers(3), None);
        let summary = result.summary();

        assert!(summary.contains("Primary:"));
        assert!(summary.contains("Confidence:"));
    }
}
