//! # Psyche-Persona
//!
//! The second scoring instrument and the cross-instrument combination
//! layer:
//!
//! - **Dimension scoring**: five target dimensions built from signed
//!   per-item contribution rules, z-score normalized and ranked with a
//!   declared priority order, mapped onto three clusters
//! - **Profile combination**: crosses the dominant persona axis with
//!   the dimension cluster to select one of twelve canonical profiles
//! - **Hybrid resolution**: an ordered rule table blending the octant
//!   archetype with a 4-character type code, guarded by a confidence
//!   floor and an explicit low-confidence fallback archetype
//!
//! Like the ICP engine, everything here is pure and stateless over
//! frozen reference tables.

pub mod dimensions;
pub mod hybrid;
pub mod profile;

pub use dimensions::*;
pub use hybrid::*;
pub use profile::*;
