//! Question catalog and consistency-pair reference data.
//!
//! Catalogs are immutable after construction. The built-in ICP catalog
//! ships 24 items, six per axis, with reverse-worded items flagged.
//! External callers may load their own catalog; validation happens once
//! at construction and never during scoring.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::Axis;

/// A single Likert item. Static, externally supplied, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub axis: Axis,
    pub reverse_scored: bool,
}

impl Question {
    pub fn new(id: &str, axis: Axis, reverse_scored: bool) -> Self {
        Self {
            id: id.to_string(),
            axis,
            reverse_scored,
        }
    }
}

/// Validated, read-only collection of questions.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    by_id: HashMap<String, usize>,
}

impl QuestionCatalog {
    /// Build a catalog, rejecting duplicate ids, an empty item list,
    /// and axes with no items (an itemless axis would make its average
    /// undefined).
    pub fn from_questions(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut by_id = HashMap::with_capacity(questions.len());
        for (idx, q) in questions.iter().enumerate() {
            if by_id.insert(q.id.clone(), idx).is_some() {
                return Err(Error::DuplicateQuestion(q.id.clone()));
            }
        }

        for axis in Axis::ALL {
            if !questions.iter().any(|q| q.axis == axis) {
                return Err(Error::EmptyAxis(axis.name()));
            }
        }

        Ok(Self { questions, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).map(|&idx| &self.questions[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Items tagged with the given axis, in catalog order
    pub fn items_for_axis(&self, axis: Axis) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.axis == axis)
    }
}

/// Expected relationship between the two items of a consistency pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Reverse-worded counterpart: answers should diverge (|diff| >= 2)
    Opposite,
    /// Same-direction restatement: answers should track (|diff| <= 1)
    Agree,
}

/// A pair of items used to estimate internal response consistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyPair {
    pub direct_id: String,
    pub paired_id: String,
    pub expectation: Expectation,
}

impl ConsistencyPair {
    pub fn new(direct_id: &str, paired_id: &str, expectation: Expectation) -> Self {
        Self {
            direct_id: direct_id.to_string(),
            paired_id: paired_id.to_string(),
            expectation,
        }
    }
}

/// The built-in ICP question catalog: 24 items, six per axis.
/// Items `*_04` and `*_06` are reverse-worded.
pub static DEFAULT_CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| {
    let items: [(&str, Axis, bool); 24] = [
        ("ag_01", Axis::Agency, false),
        ("ag_02", Axis::Agency, false),
        ("ag_03", Axis::Agency, false),
        ("ag_04", Axis::Agency, true),
        ("ag_05", Axis::Agency, false),
        ("ag_06", Axis::Agency, true),
        ("wa_01", Axis::Warmth, false),
        ("wa_02", Axis::Warmth, false),
        ("wa_03", Axis::Warmth, false),
        ("wa_04", Axis::Warmth, true),
        ("wa_05", Axis::Warmth, false),
        ("wa_06", Axis::Warmth, true),
        ("bo_01", Axis::Boundary, false),
        ("bo_02", Axis::Boundary, false),
        ("bo_03", Axis::Boundary, false),
        ("bo_04", Axis::Boundary, true),
        ("bo_05", Axis::Boundary, false),
        ("bo_06", Axis::Boundary, true),
        ("re_01", Axis::Resilience, false),
        ("re_02", Axis::Resilience, false),
        ("re_03", Axis::Resilience, false),
        ("re_04", Axis::Resilience, true),
        ("re_05", Axis::Resilience, false),
        ("re_06", Axis::Resilience, true),
    ];

    let questions = items
        .iter()
        .map(|&(id, axis, rev)| Question::new(id, axis, rev))
        .collect();

    QuestionCatalog::from_questions(questions).expect("built-in catalog is valid")
});

/// The documented consistency pairs.
///
/// Only four pairs exist; full axis coverage of reverse pairs is a
/// known asymmetry in the instrument and is intentionally not expanded.
pub static DEFAULT_CONSISTENCY_PAIRS: Lazy<Vec<ConsistencyPair>> = Lazy::new(|| {
    vec![
        ConsistencyPair::new("ag_01", "ag_04", Expectation::Opposite),
        ConsistencyPair::new("wa_01", "wa_04", Expectation::Opposite),
        ConsistencyPair::new("re_02", "re_04", Expectation::Opposite),
        ConsistencyPair::new("bo_02", "bo_03", Expectation::Agree),
    ]
});

/// Check that every pair references ids present in the catalog.
/// Intended for init-time validation of externally supplied pair lists.
pub fn validate_pairs(catalog: &QuestionCatalog, pairs: &[ConsistencyPair]) -> Result<()> {
    for pair in pairs {
        for id in [&pair.direct_id, &pair.paired_id] {
            if !catalog.contains(id) {
                return Err(Error::UnknownPairItem(id.clone()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        assert_eq!(DEFAULT_CATALOG.len(), 24);
        for axis in Axis::ALL {
            assert_eq!(DEFAULT_CATALOG.items_for_axis(axis).count(), 6);
        }
        assert!(DEFAULT_CATALOG.get("ag_04").unwrap().reverse_scored);
        assert!(!DEFAULT_CATALOG.get("wa_03").unwrap().reverse_scored);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let questions = vec![
            Question::new("ag_01", Axis::Agency, false),
            Question::new("ag_01", Axis::Agency, true),
        ];
        assert!(matches!(
            QuestionCatalog::from_questions(questions),
            Err(Error::DuplicateQuestion(_))
        ));
    }

    #[test]
    fn test_empty_axis_rejected() {
        let questions = vec![
            Question::new("ag_01", Axis::Agency, false),
            Question::new("wa_01", Axis::Warmth, false),
            Question::new("bo_01", Axis::Boundary, false),
        ];
        assert!(matches!(
            QuestionCatalog::from_questions(questions),
            Err(Error::EmptyAxis("Resilience"))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            QuestionCatalog::from_questions(Vec::new()),
            Err(Error::EmptyCatalog)
        ));
    }

    #[test]
    fn test_default_pairs_reference_catalog_ids() {
        validate_pairs(&DEFAULT_CATALOG, &DEFAULT_CONSISTENCY_PAIRS).unwrap();
    }

    #[test]
    fn test_unknown_pair_item_rejected() {
        let pairs = vec![ConsistencyPair::new("ag_01", "zz_99", Expectation::Opposite)];
        assert!(matches!(
            validate_pairs(&DEFAULT_CATALOG, &pairs),
            Err(Error::UnknownPairItem(_))
        ));
    }
}
