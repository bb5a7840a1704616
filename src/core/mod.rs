// Core algorithm exports
pub mod distance;
pub mod explain;
pub mod matcher;
pub mod rules;
pub mod scoring;

pub use distance::{distance_between, distance_km, within_work_radius};
pub use explain::{explain, match_reasons, MatchReason};
pub use matcher::{Matcher, MatchResult, DEFAULT_LIMIT};
pub use rules::ScoringRules;
pub use scoring::{calculate_compatibility, compatibility_score};
