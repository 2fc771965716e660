//! Profile combination.
//!
//! Crosses the dominant persona axis (four values) with the dimension
//! cluster (three values) into one of twelve canonical profile ids.
//! The crossing is total by construction: an exhaustive match over the
//! 4x3 enum product, with no default arm to mask an upstream bug.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::dimensions::Cluster;

/// The four persona axes, scored 0..=100 around a neutral midpoint of
/// 50 by an upstream instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaAxis {
    Energy,
    Decision,
    Relation,
    Stability,
}

impl PersonaAxis {
    /// Declared priority order for deviation ties. Not the declaration
    /// order above: Decision outranks Energy by design.
    pub const PRIORITY: [PersonaAxis; 4] = [
        PersonaAxis::Decision,
        PersonaAxis::Energy,
        PersonaAxis::Relation,
        PersonaAxis::Stability,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PersonaAxis::Energy => "Energy",
            PersonaAxis::Decision => "Decision",
            PersonaAxis::Relation => "Relation",
            PersonaAxis::Stability => "Stability",
        }
    }

    /// Single-letter id used in profile identifiers
    pub fn letter(&self) -> char {
        match self {
            PersonaAxis::Energy => 'E',
            PersonaAxis::Decision => 'D',
            PersonaAxis::Relation => 'R',
            PersonaAxis::Stability => 'S',
        }
    }
}

/// Persona axis scores, each clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaAxisScores {
    pub energy: f64,
    pub decision: f64,
    pub relation: f64,
    pub stability: f64,
}

impl PersonaAxisScores {
    pub fn new(energy: f64, decision: f64, relation: f64, stability: f64) -> Self {
        Self {
            energy: energy.clamp(0.0, 100.0),
            decision: decision.clamp(0.0, 100.0),
            relation: relation.clamp(0.0, 100.0),
            stability: stability.clamp(0.0, 100.0),
        }
    }

    pub fn get(&self, axis: PersonaAxis) -> f64 {
        match axis {
            PersonaAxis::Energy => self.energy,
            PersonaAxis::Decision => self.decision,
            PersonaAxis::Relation => self.relation,
            PersonaAxis::Stability => self.stability,
        }
    }

    /// The axis with the largest absolute deviation from the neutral
    /// midpoint; exact ties resolve by the declared priority order.
    pub fn primary_axis(&self) -> PersonaAxis {
        let mut best = PersonaAxis::PRIORITY[0];
        let mut best_deviation = (self.get(best) - 50.0).abs();

        for &axis in &PersonaAxis::PRIORITY[1..] {
            let deviation = (self.get(axis) - 50.0).abs();
            if deviation > best_deviation {
                best = axis;
                best_deviation = deviation;
            }
        }

        best
    }
}

/// The twelve canonical integrated profile identifiers.
///
/// Wire ids pair the primary-axis letter with the cluster letter
/// (`D_A`, `E_G`, ...); the full 4x3 product is enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegratedProfileId {
    #[serde(rename = "E_A")]
    EnergyAssertive,
    #[serde(rename = "E_R")]
    EnergyRelational,
    #[serde(rename = "E_G")]
    EnergyGrounded,
    #[serde(rename = "D_A")]
    DecisionAssertive,
    #[serde(rename = "D_R")]
    DecisionRelational,
    #[serde(rename = "D_G")]
    DecisionGrounded,
    #[serde(rename = "R_A")]
    RelationAssertive,
    #[serde(rename = "R_R")]
    RelationRelational,
    #[serde(rename = "R_G")]
    RelationGrounded,
    #[serde(rename = "S_A")]
    StabilityAssertive,
    #[serde(rename = "S_R")]
    StabilityRelational,
    #[serde(rename = "S_G")]
    StabilityGrounded,
}

impl IntegratedProfileId {
    pub const ALL: [IntegratedProfileId; 12] = [
        IntegratedProfileId::EnergyAssertive,
        IntegratedProfileId::EnergyRelational,
        IntegratedProfileId::EnergyGrounded,
        IntegratedProfileId::DecisionAssertive,
        IntegratedProfileId::DecisionRelational,
        IntegratedProfileId::DecisionGrounded,
        IntegratedProfileId::RelationAssertive,
        IntegratedProfileId::RelationRelational,
        IntegratedProfileId::RelationGrounded,
        IntegratedProfileId::StabilityAssertive,
        IntegratedProfileId::StabilityRelational,
        IntegratedProfileId::StabilityGrounded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntegratedProfileId::EnergyAssertive => "E_A",
            IntegratedProfileId::EnergyRelational => "E_R",
            IntegratedProfileId::EnergyGrounded => "E_G",
            IntegratedProfileId::DecisionAssertive => "D_A",
            IntegratedProfileId::DecisionRelational => "D_R",
            IntegratedProfileId::DecisionGrounded => "D_G",
            IntegratedProfileId::RelationAssertive => "R_A",
            IntegratedProfileId::RelationRelational => "R_R",
            IntegratedProfileId::RelationGrounded => "R_G",
            IntegratedProfileId::StabilityAssertive => "S_A",
            IntegratedProfileId::StabilityRelational => "S_R",
            IntegratedProfileId::StabilityGrounded => "S_G",
        }
    }
}

/// Total 4x3 crossing. Every (axis, cluster) pair has an entry; no
/// fallback is permitted because the domain is fully enumerable.
pub fn combine(axis: PersonaAxis, cluster: Cluster) -> IntegratedProfileId {
    use Cluster::*;
    use PersonaAxis::*;

    match (axis, cluster) {
        (Energy, Assertive) => IntegratedProfileId::EnergyAssertive,
        (Energy, Relational) => IntegratedProfileId::EnergyRelational,
        (Energy, Grounded) => IntegratedProfileId::EnergyGrounded,
        (Decision, Assertive) => IntegratedProfileId::DecisionAssertive,
        (Decision, Relational) => IntegratedProfileId::DecisionRelational,
        (Decision, Grounded) => IntegratedProfileId::DecisionGrounded,
        (Relation, Assertive) => IntegratedProfileId::RelationAssertive,
        (Relation, Relational) => IntegratedProfileId::RelationRelational,
        (Relation, Grounded) => IntegratedProfileId::RelationGrounded,
        (Stability, Assertive) => IntegratedProfileId::StabilityAssertive,
        (Stability, Relational) => IntegratedProfileId::StabilityRelational,
        (Stability, Grounded) => IntegratedProfileId::StabilityGrounded,
    }
}

/// Select the profile for a persona score set and dimension cluster.
pub fn combine_profile(scores: &PersonaAxisScores, cluster: Cluster) -> IntegratedProfileId {
    combine(scores.primary_axis(), cluster)
}

/// Static display catalog entry for one profile. Looked up by id only,
/// never computed. Serialize-only: the catalog is compiled in, not
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegratedProfileTemplate {
    pub id: IntegratedProfileId,
    pub title_ko: &'static str,
    pub title_en: &'static str,
    pub tagline: &'static str,
    pub strengths: &'static [&'static str],
    pub watch_outs: &'static [&'static str],
    pub contexts: &'static [&'static str],
    pub scripts: &'static [&'static str],
}

pub static PROFILE_TEMPLATES: Lazy<Vec<IntegratedProfileTemplate>> = Lazy::new(|| {
    vec![
        IntegratedProfileTemplate {
            id: IntegratedProfileId::EnergyAssertive,
            title_ko: "추진하는 불꽃",
            title_en: "The Driving Spark",
            tagline: "Momentum first, polish later",
            strengths: &["Starts things nobody else will", "Raises the room's tempo"],
            watch_outs: &["Leaves loose ends when the excitement fades"],
            contexts: &["Kicks off a stalled group project without being asked"],
            scripts: &["\"Let's just try it and fix what breaks.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::EnergyRelational,
            title_ko: "활기찬 연결자",
            title_en: "The Lively Connector",
            tagline: "Energy spent on people, not tasks",
            strengths: &["Makes newcomers feel welcome fast", "Keeps group chats alive"],
            watch_outs: &["Overcommits socially and burns out quietly"],
            contexts: &["First to notice when a teammate has gone quiet"],
            scripts: &["\"Come with us, it's more fun with you there.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::EnergyGrounded,
            title_ko: "꾸준한 엔진",
            title_en: "The Steady Engine",
            tagline: "High output at a sustainable pace",
            strengths: &["Keeps momentum through long projects"],
            watch_outs: &["Underestimates how drained others get"],
            contexts: &["Still on schedule in week six when others have stalled"],
            scripts: &["\"We don't need to rush, we need to keep going.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::DecisionAssertive,
            title_ko: "결단하는 지휘자",
            title_en: "The Decisive Conductor",
            tagline: "Clear calls, owned outcomes",
            strengths: &["Cuts through ambiguity quickly", "Takes responsibility for the call"],
            watch_outs: &["Reads deliberation in others as indecision"],
            contexts: &["Ends a circular meeting by naming the decision and the owner"],
            scripts: &["\"Here's what we're doing, and here's why.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::DecisionRelational,
            title_ko: "신중한 조율가",
            title_en: "The Considerate Arbiter",
            tagline: "Decisions that carry people along",
            strengths: &["Choices stick because everyone was heard"],
            watch_outs: &["Delays calls that will disappoint someone"],
            contexts: &["Checks in privately before announcing a hard decision"],
            scripts: &["\"Before I decide, tell me what I'm missing.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::DecisionGrounded,
            title_ko: "묵직한 판단가",
            title_en: "The Grounded Judge",
            tagline: "Slow to decide, hard to shake",
            strengths: &["Decisions survive pressure and second-guessing"],
            watch_outs: &["Misses windows that reward fast movers"],
            contexts: &["Holds a position calmly while the room changes its mind twice"],
            scripts: &["\"Nothing new has changed the facts, so the plan stands.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::RelationAssertive,
            title_ko: "당당한 대변자",
            title_en: "The Outspoken Advocate",
            tagline: "Speaks up for the relationship",
            strengths: &["Raises interpersonal problems before they fester"],
            watch_outs: &["Directness can land harder than intended"],
            contexts: &["Names the tension in the room that everyone is avoiding"],
            scripts: &["\"I'm bringing this up because the relationship matters to me.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::RelationRelational,
            title_ko: "깊은 공감가",
            title_en: "The Deep Empath",
            tagline: "Attunement as a first language",
            strengths: &["People open up to them without being asked"],
            watch_outs: &["Absorbs others' moods as their own"],
            contexts: &["The friend everyone calls after a bad day"],
            scripts: &["\"That sounds heavy. Tell me from the beginning.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::RelationGrounded,
            title_ko: "한결같은 버팀목",
            title_en: "The Constant Anchor",
            tagline: "Quiet loyalty over grand gestures",
            strengths: &["Shows up the same way in year one and year ten"],
            watch_outs: &["Assumes steadiness speaks for itself"],
            contexts: &["Remembers the follow-up question a month later"],
            scripts: &["\"I'm not going anywhere. Take your time.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::StabilityAssertive,
            title_ko: "단단한 수문장",
            title_en: "The Firm Gatekeeper",
            tagline: "Calm surface, clear limits",
            strengths: &["Unflappable when others escalate", "Limits are explicit and fair"],
            watch_outs: &["Reads as cold when holding a line"],
            contexts: &["Declines an unreasonable request without apology or anger"],
            scripts: &["\"That doesn't work for me, but here's what does.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::StabilityRelational,
            title_ko: "따뜻한 평온가",
            title_en: "The Warm Stabilizer",
            tagline: "Soothes without smothering",
            strengths: &["De-escalates conflict by staying soft and steady"],
            watch_outs: &["Keeps the peace at the cost of honest friction"],
            contexts: &["The person both sides trust to mediate"],
            scripts: &["\"We're on the same side. Let's slow down.\""],
        },
        IntegratedProfileTemplate {
            id: IntegratedProfileId::StabilityGrounded,
            title_ko: "고요한 반석",
            title_en: "The Quiet Bedrock",
            tagline: "Unmoved, not unmoving",
            strengths: &["Routine and reliability others build on"],
            watch_outs: &["Change arrives whether or not it is welcome"],
            contexts: &["The calm one during the reorg everyone else dreads"],
            scripts: &["\"Let's see what actually changes before we worry.\""],
        },
    ]
});

/// Template lookup. The catalog covers all twelve ids; a miss would be
/// a programming error in the catalog itself, so debug builds assert
/// and release builds fall back to the first entry rather than
/// returning nothing display-ready.
pub fn template(id: IntegratedProfileId) -> &'static IntegratedProfileTemplate {
    let found = PROFILE_TEMPLATES.iter().find(|t| t.id == id);
    debug_assert!(found.is_some(), "profile template catalog is incomplete");
    found.unwrap_or(&PROFILE_TEMPLATES[0])
}
