//! Axis aggregation.
//!
//! Averages every item belonging to an axis, applying the reverse
//! transform `6 - v` where flagged, then rescales the 1..=5 mean onto
//! 0..=100 via `round(((mean - 1) / 4) * 100)`. Axes are independent;
//! one axis's item count never affects another's scale.

use psyche_core::{Axis, AxisScores, QuestionCatalog};

use crate::likert::NormalizedAnswers;

/// Aggregate one axis to a 0..=100 integer score.
/// The catalog guarantees at least one item per axis.
fn aggregate_axis(catalog: &QuestionCatalog, answers: &NormalizedAnswers, axis: Axis) -> u8 {
    let mut sum = 0u32;
    let mut count = 0u32;

    for question in catalog.items_for_axis(axis) {
        let value = answers.get(&question.id);
        let value = if question.reverse_scored { 6 - value } else { value };
        sum += value as u32;
        count += 1;
    }

    debug_assert!(count > 0, "catalog validation guarantees items per axis");

    let mean = sum as f64 / count as f64;
    (((mean - 1.0) / 4.0) * 100.0).round() as u8
}

/// Aggregate all four axes.
pub fn aggregate(catalog: &QuestionCatalog, answers: &NormalizedAnswers) -> AxisScores {
    AxisScores::new(
        aggregate_axis(catalog, answers, Axis::Agency),
        aggregate_axis(catalog, answers, Axis::Warmth),
        aggregate_axis(catalog, answers, Axis::Boundary),
        aggregate_axis(catalog, answers, Axis::Resilience),
    )
}
