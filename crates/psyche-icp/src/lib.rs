//! # Psyche-ICP
//!
//! Interpersonal Circumplex Profile engine: turns a respondent's raw
//! questionnaire answers into continuous axis scores, a discrete octant
//! archetype with confidence, and a human-readable explanation block.
//!
//! ## Pipeline
//!
//! 1. **Likert normalization**: strict 1..=5 validation, neutral
//!    defaulting, missing-answer accounting
//! 2. **Axis aggregation**: reverse-scoring, per-axis averaging,
//!    rescale to 0..=100
//! 3. **Octant classification**: Gaussian similarity against eight
//!    circumplex anchors, rule-based tie-breaking near boundaries
//! 4. **Confidence estimation**: completeness, consistency, pacing,
//!    and geometric separation, combined with fixed weights
//! 5. **Explainability**: top/low axes with interpretation sentences
//!    and the item responses that most influenced the result
//!
//! Every step is a pure, synchronous function over its inputs and the
//! frozen reference catalogs; identical inputs always produce an
//! identical [`scorer::IcpResult`].

pub mod axes;
pub mod confidence;
pub mod explain;
pub mod likert;
pub mod octant;
pub mod scorer;

pub use axes::*;
pub use confidence::*;
pub use explain::*;
pub use likert::*;
pub use octant::*;
pub use scorer::*;
