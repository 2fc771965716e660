//! Likert answer normalization.
//!
//! Accepts only strict integers on the 1..=5 scale, whether supplied as
//! an integer, an integral float, or a numeric string. Anything else
//! (out of range, fractional, non-numeric, absent) is replaced by the
//! neutral midpoint and counted. Absence of an answer is a recoverable,
//! countable condition, never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use psyche_core::{AnswerSet, AnswerValue, QuestionCatalog};

pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 5;
pub const NEUTRAL: u8 = 3;

/// Normalized answers for every catalog item, plus defaulting metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedAnswers {
    values: HashMap<String, u8>,
    missing: u32,
    total: u32,
}

impl NormalizedAnswers {
    /// Normalized value for a catalog item. Items absent from the map
    /// were never normalized, which only happens for ids outside the
    /// catalog this set was built from.
    pub fn get(&self, question_id: &str) -> u8 {
        self.values.get(question_id).copied().unwrap_or(NEUTRAL)
    }

    pub fn missing_count(&self) -> u32 {
        self.missing
    }

    pub fn total_questions(&self) -> u32 {
        self.total
    }

    pub fn answered_count(&self) -> u32 {
        self.total - self.missing
    }
}

/// Coerce a raw answer value to a strict 1..=5 integer.
/// Returns `None` for anything that does not validate.
pub fn coerce_likert(value: &AnswerValue) -> Option<u8> {
    let n = match value {
        AnswerValue::Integer(i) => *i,
        AnswerValue::Float(f) => {
            if f.fract() != 0.0 {
                return None;
            }
            *f as i64
        }
        AnswerValue::Text(s) => s.trim().parse::<i64>().ok()?,
    };

    if (SCALE_MIN as i64..=SCALE_MAX as i64).contains(&n) {
        Some(n as u8)
    } else {
        None
    }
}

/// Validate every catalog item's answer, defaulting invalid or missing
/// values to the neutral midpoint. Answer ids not present in the
/// catalog are ignored.
pub fn normalize(catalog: &QuestionCatalog, answers: &AnswerSet) -> NormalizedAnswers {
    let mut values = HashMap::with_capacity(catalog.len());
    let mut missing = 0u32;

    for question in catalog.iter() {
        let normalized = answers.get(&question.id).and_then(coerce_likert);
        match normalized {
            Some(v) => {
                values.insert(question.id.clone(), v);
            }
            None => {
                values.insert(question.id.clone(), NEUTRAL);
                missing += 1;
            }
        }
    }

    NormalizedAnswers {
        values,
        missing,
        total: catalog.len() as u32,
    }
}
