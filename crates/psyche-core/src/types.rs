//! Fundamental types for the psyche profiling engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Version tag stamped on every scoring result. Any change to anchor
/// coordinates, weight constants, or lookup tables is a breaking change
/// for downstream consumers and must bump this tag.
pub const TEST_VERSION: &str = "icp-2.1";

/// A raw answer value as received from the client: a number or a
/// numeric string. Validation happens in the normalizer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for AnswerValue {
    fn from(v: i64) -> Self {
        AnswerValue::Integer(v)
    }
}

impl From<&str> for AnswerValue {
    fn from(v: &str) -> Self {
        AnswerValue::Text(v.to_string())
    }
}

/// One respondent's raw answers, keyed by question id.
/// Ids not present in the catalog are ignored; catalog ids missing
/// from the map are treated as missing answers.
pub type AnswerSet = HashMap<String, AnswerValue>;

/// The four ICP trait axes.
///
/// Each axis is a continuous dimension aggregated from multiple
/// Likert items. Item ids carry the axis prefix (`ag_01`, `wa_03`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Agency,
    Warmth,
    Boundary,
    Resilience,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Agency, Axis::Warmth, Axis::Boundary, Axis::Resilience];

    /// Item-id prefix for this axis
    pub fn prefix(&self) -> &'static str {
        match self {
            Axis::Agency => "ag",
            Axis::Warmth => "wa",
            Axis::Boundary => "bo",
            Axis::Resilience => "re",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Axis::Agency => "Agency",
            Axis::Warmth => "Warmth",
            Axis::Boundary => "Boundary",
            Axis::Resilience => "Resilience",
        }
    }

    /// Interpretation shown when the axis score is >= 60
    pub fn high_interpretation(&self) -> &'static str {
        match self {
            Axis::Agency => "Takes initiative and steers conversations toward decisions",
            Axis::Warmth => "Reads others easily and builds rapport quickly",
            Axis::Boundary => "States limits clearly and protects personal space",
            Axis::Resilience => "Recovers quickly from friction and lets go of setbacks",
        }
    }

    /// Interpretation shown when the axis score is <= 40
    pub fn low_interpretation(&self) -> &'static str {
        match self {
            Axis::Agency => "Prefers to follow the group's lead rather than direct it",
            Axis::Warmth => "Keeps emotional distance and warms up slowly",
            Axis::Boundary => "Accommodates others' requests even at personal cost",
            Axis::Resilience => "Carries tension from conflict for a long time",
        }
    }

    /// Interpretation shown for mid-range scores (41..=59)
    pub fn mid_interpretation(&self) -> &'static str {
        match self {
            Axis::Agency => "Leads or follows depending on the situation",
            Axis::Warmth => "Balances closeness with a measure of reserve",
            Axis::Boundary => "Flexible about limits, firm when it matters",
            Axis::Resilience => "Bounces back at an ordinary pace",
        }
    }
}

/// Per-axis integer scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScores {
    pub agency: u8,
    pub warmth: u8,
    pub boundary: u8,
    pub resilience: u8,
}

impl AxisScores {
    pub fn new(agency: u8, warmth: u8, boundary: u8, resilience: u8) -> Self {
        Self {
            agency: agency.min(100),
            warmth: warmth.min(100),
            boundary: boundary.min(100),
            resilience: resilience.min(100),
        }
    }

    pub fn neutral() -> Self {
        Self::new(50, 50, 50, 50)
    }

    pub fn get(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Agency => self.agency,
            Axis::Warmth => self.warmth,
            Axis::Boundary => self.boundary,
            Axis::Resilience => self.resilience,
        }
    }

    /// All four scores paired with their axis, in declaration order
    pub fn to_pairs(&self) -> [(Axis, u8); 4] {
        [
            (Axis::Agency, self.agency),
            (Axis::Warmth, self.warmth),
            (Axis::Boundary, self.boundary),
            (Axis::Resilience, self.resilience),
        ]
    }
}

impl Default for AxisScores {
    fn default() -> Self {
        Self::neutral()
    }
}

/// The eight interpersonal circumplex archetypes.
///
/// Positioned at 45-degree steps around the dominance/affiliation
/// plane. The snake_case serde ids are a stable wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OctantStyle {
    /// High dominance, neutral affiliation
    Director,
    /// High dominance, high affiliation
    Mentor,
    /// Neutral dominance, high affiliation
    Harmonizer,
    /// Low dominance, high affiliation
    Supporter,
    /// Low dominance, neutral affiliation
    Observer,
    /// Low dominance, low affiliation
    Analyst,
    /// Neutral dominance, low affiliation
    Independent,
    /// High dominance, low affiliation
    Challenger,
}

impl OctantStyle {
    pub const ALL: [OctantStyle; 8] = [
        OctantStyle::Director,
        OctantStyle::Mentor,
        OctantStyle::Harmonizer,
        OctantStyle::Supporter,
        OctantStyle::Observer,
        OctantStyle::Analyst,
        OctantStyle::Independent,
        OctantStyle::Challenger,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OctantStyle::Director => "director",
            OctantStyle::Mentor => "mentor",
            OctantStyle::Harmonizer => "harmonizer",
            OctantStyle::Supporter => "supporter",
            OctantStyle::Observer => "observer",
            OctantStyle::Analyst => "analyst",
            OctantStyle::Independent => "independent",
            OctantStyle::Challenger => "challenger",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OctantStyle::Director => "Director",
            OctantStyle::Mentor => "Mentor",
            OctantStyle::Harmonizer => "Harmonizer",
            OctantStyle::Supporter => "Supporter",
            OctantStyle::Observer => "Observer",
            OctantStyle::Analyst => "Analyst",
            OctantStyle::Independent => "Independent",
            OctantStyle::Challenger => "Challenger",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OctantStyle::Director => "Assertive and outcome-driven; comfortable taking charge",
            OctantStyle::Mentor => "Leads through encouragement; invests in people",
            OctantStyle::Harmonizer => "Connects the group; keeps relationships warm",
            OctantStyle::Supporter => "Loyal and accommodating; steadies others quietly",
            OctantStyle::Observer => "Reserved and deliberate; watches before acting",
            OctantStyle::Analyst => "Detached and precise; trusts evidence over sentiment",
            OctantStyle::Independent => "Self-contained; keeps relationships at arm's length",
            OctantStyle::Challenger => "Competitive and blunt; pushes back without hesitation",
        }
    }
}

/// Coarse three-level confidence label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            ConfidenceLevel::High
        } else if score >= 50 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

/// A validated 4-character persona type code (e.g. "ENTJ").
///
/// Stored uppercased; hybrid rules match contiguous substrings of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCode(String);

impl TypeCode {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidTypeCode(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `pattern` occurs as a contiguous substring of the code.
    /// The empty pattern matches every code.
    pub fn matches(&self, pattern: &str) -> bool {
        self.0.contains(pattern)
    }
}
