//! Hybrid archetype resolution.
//!
//! Blends the octant archetype with a 4-character type code through an
//! ordered rule table: rules are evaluated top to bottom and the first
//! match wins, so table order is part of the contract. When the
//! underlying ICP confidence is below the floor, rule evaluation is
//! skipped entirely and the shared "explorer" fallback is returned;
//! a low-confidence classification must not be dressed up as a
//! confident hybrid label.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use psyche_core::{OctantStyle, TypeCode};
use psyche_icp::scorer::IcpResult;

/// Confidence below this returns the fallback archetype. The boundary
/// is inclusive toward rule evaluation: 45 resolves normally.
pub const CONFIDENCE_FLOOR: u8 = 45;

/// The hybrid archetype identifiers. `Explorer` is reserved for the
/// low-confidence fallback; `Balancer` doubles as the no-rule-matched
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HybridId {
    Strategist,
    Commander,
    Guide,
    Catalyst,
    Anchor,
    Mediator,
    Sentinel,
    Pathfinder,
    Scholar,
    Advocate,
    Maverick,
    Balancer,
    Explorer,
}

impl HybridId {
    pub const ALL: [HybridId; 13] = [
        HybridId::Strategist,
        HybridId::Commander,
        HybridId::Guide,
        HybridId::Catalyst,
        HybridId::Anchor,
        HybridId::Mediator,
        HybridId::Sentinel,
        HybridId::Pathfinder,
        HybridId::Scholar,
        HybridId::Advocate,
        HybridId::Maverick,
        HybridId::Balancer,
        HybridId::Explorer,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            HybridId::Strategist => "strategist",
            HybridId::Commander => "commander",
            HybridId::Guide => "guide",
            HybridId::Catalyst => "catalyst",
            HybridId::Anchor => "anchor",
            HybridId::Mediator => "mediator",
            HybridId::Sentinel => "sentinel",
            HybridId::Pathfinder => "pathfinder",
            HybridId::Scholar => "scholar",
            HybridId::Advocate => "advocate",
            HybridId::Maverick => "maverick",
            HybridId::Balancer => "balancer",
            HybridId::Explorer => "explorer",
        }
    }
}

/// A display-ready hybrid archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridArchetype {
    pub id: HybridId,
    pub name: String,
    pub description: String,
    pub guidance: Vec<String>,
    pub blindspots: Vec<String>,
    /// True only for the low-confidence fallback entry
    pub fallback: bool,
}

/// One rule: octant style plus a contiguous substring pattern over the
/// type code. The empty pattern matches any code, including an absent
/// one, which makes per-style catch-all rules possible.
#[derive(Debug, Clone)]
pub struct HybridRule {
    pub style: OctantStyle,
    pub pattern: &'static str,
    pub archetype: HybridId,
}

impl HybridRule {
    const fn new(style: OctantStyle, pattern: &'static str, archetype: HybridId) -> Self {
        Self {
            style,
            pattern,
            archetype,
        }
    }

    fn matches(&self, style: OctantStyle, type_code: Option<&TypeCode>) -> bool {
        if self.style != style {
            return false;
        }
        match type_code {
            Some(code) => code.matches(self.pattern),
            None => self.pattern.is_empty(),
        }
    }
}

/// The rule table. Order is significant and preserved exactly:
/// specific patterns precede the per-style catch-alls, and several
/// rules can structurally match the same input.
pub static HYBRID_RULES: Lazy<Vec<HybridRule>> = Lazy::new(|| {
    vec![
        HybridRule::new(OctantStyle::Director, "NT", HybridId::Strategist),
        HybridRule::new(OctantStyle::Director, "S", HybridId::Commander),
        HybridRule::new(OctantStyle::Director, "", HybridId::Commander),
        HybridRule::new(OctantStyle::Challenger, "TP", HybridId::Maverick),
        HybridRule::new(OctantStyle::Challenger, "TJ", HybridId::Commander),
        HybridRule::new(OctantStyle::Challenger, "", HybridId::Maverick),
        HybridRule::new(OctantStyle::Mentor, "NF", HybridId::Guide),
        HybridRule::new(OctantStyle::Mentor, "J", HybridId::Advocate),
        HybridRule::new(OctantStyle::Mentor, "", HybridId::Guide),
        HybridRule::new(OctantStyle::Harmonizer, "FJ", HybridId::Mediator),
        HybridRule::new(OctantStyle::Harmonizer, "E", HybridId::Catalyst),
        HybridRule::new(OctantStyle::Harmonizer, "", HybridId::Mediator),
        HybridRule::new(OctantStyle::Supporter, "SF", HybridId::Anchor),
        HybridRule::new(OctantStyle::Supporter, "N", HybridId::Advocate),
        HybridRule::new(OctantStyle::Supporter, "", HybridId::Anchor),
        HybridRule::new(OctantStyle::Observer, "N", HybridId::Pathfinder),
        HybridRule::new(OctantStyle::Observer, "T", HybridId::Scholar),
        HybridRule::new(OctantStyle::Observer, "", HybridId::Scholar),
        HybridRule::new(OctantStyle::Analyst, "TJ", HybridId::Sentinel),
        HybridRule::new(OctantStyle::Analyst, "TP", HybridId::Scholar),
        HybridRule::new(OctantStyle::Analyst, "", HybridId::Sentinel),
        HybridRule::new(OctantStyle::Independent, "P", HybridId::Pathfinder),
        HybridRule::new(OctantStyle::Independent, "J", HybridId::Sentinel),
        HybridRule::new(OctantStyle::Independent, "", HybridId::Balancer),
    ]
});

/// Display catalog for the hybrid archetypes, fallback included.
pub static HYBRID_CATALOG: Lazy<Vec<HybridArchetype>> = Lazy::new(|| {
    let entry = |id: HybridId, name: &str, description: &str, guidance: &[&str], blindspots: &[&str]| {
        HybridArchetype {
            id,
            name: name.to_string(),
            description: description.to_string(),
            guidance: guidance.iter().map(|s| s.to_string()).collect(),
            blindspots: blindspots.iter().map(|s| s.to_string()).collect(),
            fallback: id == HybridId::Explorer,
        }
    };

    vec![
        entry(
            HybridId::Strategist,
            "The Strategist",
            "Directs through frameworks: sees the board, not just the next move.",
            &["Share the reasoning, not just the conclusion"],
            &["Can treat people as pieces in the plan"],
        ),
        entry(
            HybridId::Commander,
            "The Commander",
            "Directs through momentum: decides fast and pulls others along.",
            &["Pause for input before the call becomes final"],
            &["Quiet dissent reads as agreement"],
        ),
        entry(
            HybridId::Guide,
            "The Guide",
            "Leads by growing people; authority worn lightly.",
            &["Let others fail safely instead of pre-empting every mistake"],
            &["Investment in people can shade into control"],
        ),
        entry(
            HybridId::Catalyst,
            "The Catalyst",
            "Warm energy that gets groups unstuck and talking.",
            &["Follow through after the spark: someone has to finish"],
            &["Mistakes attention for connection"],
        ),
        entry(
            HybridId::Anchor,
            "The Anchor",
            "Steady, accommodating presence others organize around.",
            &["Say what you need before resentment does it for you"],
            &["Self-erasure disguised as flexibility"],
        ),
        entry(
            HybridId::Mediator,
            "The Mediator",
            "Keeps the peace by hearing every side first.",
            &["Name the conflict out loud; harmony is not avoidance"],
            &["Delays hard conversations until they are harder"],
        ),
        entry(
            HybridId::Sentinel,
            "The Sentinel",
            "Guards standards and boundaries with quiet precision.",
            &["Explain the standard, not just the violation"],
            &["Rigor can read as rejection"],
        ),
        entry(
            HybridId::Pathfinder,
            "The Pathfinder",
            "Explores alone first and reports back what is out there.",
            &["Invite someone along; discovery shared is discovery kept"],
            &["Distance becomes a habit, not a choice"],
        ),
        entry(
            HybridId::Scholar,
            "The Scholar",
            "Observes, collects, and understands before committing.",
            &["Share conclusions before they are perfect"],
            &["Analysis as a hiding place"],
        ),
        entry(
            HybridId::Advocate,
            "The Advocate",
            "Supports others with conviction and a clear voice.",
            &["Check whether help was asked for"],
            &["Fights others' battles past the point they wanted"],
        ),
        entry(
            HybridId::Maverick,
            "The Maverick",
            "Challenges the default; friction is a feature.",
            &["Pick the battles that matter to someone besides you"],
            &["Contrarianism on autopilot"],
        ),
        entry(
            HybridId::Balancer,
            "The Balancer",
            "No single pull dominates; range is the strength.",
            &["Commit somewhere; balance is not the same as waiting"],
            &["Adaptability can hide a lack of stake"],
        ),
        entry(
            HybridId::Explorer,
            "The Explorer",
            "Still mapping the territory: the signal is not strong enough yet for a confident blend.",
            &["Retake the questionnaire at an unhurried pace", "Answer from instinct, not aspiration"],
            &[],
        ),
    ]
});

fn archetype(id: HybridId) -> HybridArchetype {
    let found = HYBRID_CATALOG.iter().find(|a| a.id == id);
    debug_assert!(found.is_some(), "hybrid catalog is incomplete");
    found.cloned().unwrap_or_else(|| HYBRID_CATALOG[0].clone())
}

/// Resolve the hybrid archetype for a scored ICP result and optional
/// type code.
pub fn resolve(icp: &IcpResult, type_code: Option<&TypeCode>) -> HybridArchetype {
    resolve_with(icp.primary_style, icp.confidence.value, type_code)
}

/// Rule evaluation over raw inputs; `resolve` is the usual entry point.
pub fn resolve_with(
    style: OctantStyle,
    confidence: u8,
    type_code: Option<&TypeCode>,
) -> HybridArchetype {
    if confidence < CONFIDENCE_FLOOR {
        tracing::debug!(
            confidence,
            floor = CONFIDENCE_FLOOR,
            "confidence below floor, returning fallback archetype"
        );
        return archetype(HybridId::Explorer);
    }

    for rule in HYBRID_RULES.iter() {
        if rule.matches(style, type_code) {
            return archetype(rule.archetype);
        }
    }

    archetype(HybridId::Balancer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> TypeCode {
        TypeCode::parse(s).unwrap()
    }

    #[test]
    fn test_fallback_below_floor() {
        for style in OctantStyle::ALL {
            let result = resolve_with(style, 44, Some(&code("ENTJ")));
            assert_eq!(result.id, HybridId::Explorer);
            assert!(result.fallback);
        }
    }

    #[test]
    fn test_boundary_inclusive_toward_rules() {
        let at_floor = resolve_with(OctantStyle::Director, 45, Some(&code("ENTJ")));
        assert!(!at_floor.fallback);
        assert_eq!(at_floor.id, HybridId::Strategist);

        let below = resolve_with(OctantStyle::Director, 44, Some(&code("ENTJ")));
        assert!(below.fallback);
        assert_eq!(below.id, HybridId::Explorer);
    }

    #[test]
    fn test_first_match_wins() {
        // ESTJ contains "S"; the earlier NT rule does not match, so
        // the Commander rule fires
        let result = resolve_with(OctantStyle::Director, 80, Some(&code("ESTJ")));
        assert_eq!(result.id, HybridId::Commander);

        // ENTJ matches the NT rule before the S catch-all chain
        let result = resolve_with(OctantStyle::Director, 80, Some(&code("ENTJ")));
        assert_eq!(result.id, HybridId::Strategist);
    }

    #[test]
    fn test_catch_all_without_type_code() {
        let result = resolve_with(OctantStyle::Mentor, 80, None);
        assert_eq!(result.id, HybridId::Guide);
        assert!(!result.fallback);

        let result = resolve_with(OctantStyle::Independent, 80, None);
        assert_eq!(result.id, HybridId::Balancer);
    }

    #[test]
    fn test_every_style_resolves_without_code() {
        for style in OctantStyle::ALL {
            let result = resolve_with(style, 80, None);
            assert!(!result.fallback);
        }
    }

    #[test]
    fn test_rule_order_preserved_for_overlapping_patterns() {
        // INTP at Analyst: both "TP" and the catch-all structurally
        // match; "TJ" does not; first match is the TP -> Scholar rule
        let result = resolve_with(OctantStyle::Analyst, 80, Some(&code("INTP")));
        assert_eq!(result.id, HybridId::Scholar);

        let result = resolve_with(OctantStyle::Analyst, 80, Some(&code("ISTJ")));
        assert_eq!(result.id, HybridId::Sentinel);
    }

    #[test]
    fn test_resolve_from_scored_result() {
        use psyche_core::{AnswerSet, AnswerValue, DEFAULT_CATALOG};
        use psyche_icp::scorer::IcpScorer;

        let scorer = IcpScorer::default();
        let set: AnswerSet = DEFAULT_CATALOG
            .iter()
            .map(|q| (q.id.clone(), AnswerValue::Integer(4)))
            .collect();
        let icp = scorer.score(&set, Some(90.0));

        assert_eq!(icp.primary_style, OctantStyle::Mentor);
        assert!(icp.confidence.value >= CONFIDENCE_FLOOR);

        let hybrid = resolve(&icp, Some(&code("ENFJ")));
        assert_eq!(hybrid.id, HybridId::Guide);
        assert!(!hybrid.fallback);
    }

    #[test]
    fn test_catalog_covers_all_ids() {
        assert_eq!(HYBRID_CATALOG.len(), HybridId::ALL.len());
        for id in HybridId::ALL {
            let a = archetype(id);
            assert_eq!(a.id, id);
            assert_eq!(a.fallback, id == HybridId::Explorer);
        }
    }
}
