//! Explainability block construction.
//!
//! A presentation aid, not a statistical derivation: selects the top
//! two and bottom two axes with threshold-picked interpretation
//! sentences, and surfaces up to four item responses from the top two
//! axes only. Fully deterministic.

use serde::{Deserialize, Serialize};

use psyche_core::{Axis, AxisScores, QuestionCatalog};

use crate::likert::NormalizedAnswers;

/// Number of evidence items surfaced at most
pub const MAX_EVIDENCE: usize = 4;

/// An axis with its score and interpretation sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisHighlight {
    pub axis: Axis,
    pub score: u8,
    pub interpretation: String,
}

/// One item response that influenced a top axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub question_id: String,
    pub axis: Axis,
    pub value: u8,
    pub reverse_scored: bool,
    pub reason: String,
}

/// The full explainability block attached to a scoring result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explainability {
    pub top_axes: Vec<AxisHighlight>,
    pub low_axes: Vec<AxisHighlight>,
    pub evidence: Vec<Evidence>,
    pub note: String,
}

fn interpretation_for(axis: Axis, score: u8) -> &'static str {
    if score >= 60 {
        axis.high_interpretation()
    } else if score <= 40 {
        axis.low_interpretation()
    } else {
        axis.mid_interpretation()
    }
}

fn highlight(axis: Axis, score: u8) -> AxisHighlight {
    AxisHighlight {
        axis,
        score,
        interpretation: interpretation_for(axis, score).to_string(),
    }
}

fn evidence_reason(axis: Axis, value: u8, reverse_scored: bool) -> String {
    if reverse_scored {
        format!(
            "Reverse-worded {} item answered {}, reinforcing the axis after inversion",
            axis.name(),
            value
        )
    } else {
        format!(
            "{} item answered {}, one of the strongest signals for this axis",
            axis.name(),
            value
        )
    }
}

/// Build the explainability block from final axis scores and the
/// normalized answers.
pub fn build(
    catalog: &QuestionCatalog,
    scores: &AxisScores,
    answers: &NormalizedAnswers,
) -> Explainability {
    // Stable sort keeps Axis declaration order on score ties
    let mut ranked = scores.to_pairs();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let top_axes: Vec<AxisHighlight> =
        ranked[..2].iter().map(|&(axis, score)| highlight(axis, score)).collect();

    // Bottom two, lowest first
    let low_axes: Vec<AxisHighlight> = ranked[2..]
        .iter()
        .rev()
        .map(|&(axis, score)| highlight(axis, score))
        .collect();

    let top_pair = [top_axes[0].axis, top_axes[1].axis];

    let mut candidates: Vec<Evidence> = catalog
        .iter()
        .filter(|q| top_pair.contains(&q.axis))
        .map(|q| {
            let value = answers.get(&q.id);
            Evidence {
                question_id: q.id.clone(),
                axis: q.axis,
                value,
                reverse_scored: q.reverse_scored,
                reason: evidence_reason(q.axis, value, q.reverse_scored),
            }
        })
        .collect();

    // Raw answer value descending, question id as the deterministic tie-break
    candidates.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.question_id.cmp(&b.question_id))
    });
    candidates.truncate(MAX_EVIDENCE);

    Explainability {
        top_axes,
        low_axes,
        evidence: candidates,
        note: "Highlights reflect the strongest questionnaire signals, not a clinical assessment."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axes::aggregate;
    use crate::likert::normalize;
    use psyche_core::{AnswerSet, AnswerValue, DEFAULT_CATALOG};

    fn scored(set: &AnswerSet) -> Explainability {
        let normalized = normalize(&DEFAULT_CATALOG, set);
        let scores = aggregate(&DEFAULT_CATALOG, &normalized);
        build(&DEFAULT_CATALOG, &scores, &normalized)
    }

    fn answers(entries: &[(&str, i64)]) -> AnswerSet {
        entries
            .iter()
            .map(|&(id, v)| (id.to_string(), AnswerValue::Integer(v)))
            .collect()
    }

    #[test]
    fn test_top_and_low_axes_selected() {
        let explain = scored(&answers(&[
            ("ag_01", 5),
            ("ag_02", 5),
            ("wa_01", 4),
            ("bo_01", 2),
            ("re_01", 1),
            ("re_02", 1),
        ]));

        assert_eq!(explain.top_axes.len(), 2);
        assert_eq!(explain.low_axes.len(), 2);
        assert_eq!(explain.top_axes[0].axis, Axis::Agency);
        assert_eq!(explain.low_axes[0].axis, Axis::Resilience);
    }

    #[test]
    fn test_evidence_only_from_top_axes() {
        let explain = scored(&answers(&[
            ("ag_01", 5),
            ("wa_01", 5),
            ("bo_01", 5),
            ("re_01", 1),
        ]));

        let top_pair = [explain.top_axes[0].axis, explain.top_axes[1].axis];
        assert!(explain.evidence.len() <= MAX_EVIDENCE);
        assert!(!explain.evidence.is_empty());
        for e in &explain.evidence {
            assert!(top_pair.contains(&e.axis));
        }
    }

    #[test]
    fn test_evidence_sorted_by_raw_value() {
        let explain = scored(&answers(&[
            ("ag_01", 5),
            ("ag_02", 4),
            ("ag_03", 5),
            ("wa_01", 4),
        ]));

        let values: Vec<u8> = explain.evidence.iter().map(|e| e.value).collect();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(values, sorted);
        assert_eq!(explain.evidence[0].value, 5);
    }

    #[test]
    fn test_threshold_interpretations() {
        let explain = scored(&answers(&[
            ("ag_01", 5),
            ("ag_02", 5),
            ("ag_03", 5),
            ("ag_05", 5),
        ]));

        // Agency pushed to >= 60 picks the high sentence
        assert_eq!(explain.top_axes[0].axis, Axis::Agency);
        assert_eq!(
            explain.top_axes[0].interpretation,
            Axis::Agency.high_interpretation()
        );
        // Untouched axes sit at 50, the mid band
        assert_eq!(
            explain.top_axes[1].interpretation,
            explain.top_axes[1].axis.mid_interpretation()
        );
    }

    #[test]
    fn test_deterministic_on_full_tie() {
        // All axes at 50: declaration order decides top/low membership
        let a = scored(&AnswerSet::new());
        let b = scored(&AnswerSet::new());
        assert_eq!(a, b);
        assert_eq!(a.top_axes[0].axis, Axis::Agency);
        assert_eq!(a.top_axes[1].axis, Axis::Warmth);
        assert_eq!(a.low_axes[0].axis, Axis::Resilience);
    }
}
