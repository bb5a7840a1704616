//! Orbitrum Match - professional matching service for Orbitrum Connect
//!
//! This library ranks service professionals against a client's request using
//! a weighted compatibility model (technical, geographic, personal and
//! availability fit) and explains the resulting matches.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{distance::distance_km, explain, Matcher, MatchResult, ScoringRules};
pub use models::{
    ClientRequest, ProfessionalProfile, ScoredProfessional, ScoringWeights, ValidationError,
};
