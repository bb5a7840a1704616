use rayon::prelude::*;
use std::cmp::Ordering;

use crate::core::{
    explain::explain,
    rules::ScoringRules,
    scoring::{calculate_compatibility, weighted_total},
};
use crate::models::{ClientRequest, ProfessionalProfile, ScoredProfessional, ScoringWeights};

/// Number of matches returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 6;

/// Candidate count from which scoring runs on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub matches: Vec<ScoredProfessional<'a>>,
    pub total_candidates: usize,
}

/// Ranks professionals for a client request
///
/// # Pipeline Stages
/// 1. Score every candidate (in parallel for large lists)
/// 2. Stable sort by score, descending
/// 3. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    rules: ScoringRules,
    parallel_threshold: usize,
}

impl Matcher {
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            rules,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self::new(ScoringRules::with_weights(weights))
    }

    pub fn with_default_rules() -> Self {
        Self::new(ScoringRules::default())
    }

    /// Score lists of at least `threshold` candidates on the rayon pool
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score a single professional without ranking
    pub fn score<'a>(
        &self,
        client: &ClientRequest,
        professional: &'a ProfessionalProfile,
    ) -> ScoredProfessional<'a> {
        let breakdown = calculate_compatibility(client, professional, &self.rules);
        ScoredProfessional {
            profile: professional,
            ai_match_score: weighted_total(&breakdown, &self.rules.weights),
            breakdown,
        }
    }

    /// Rank candidates for a client request
    ///
    /// # Arguments
    /// * `client` - The client's request
    /// * `professionals` - Already loaded candidates, in caller order
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// Matches sorted by descending score. Equal scores keep their input
    /// order, whether or not scoring ran in parallel.
    pub fn rank<'a>(
        &self,
        client: &ClientRequest,
        professionals: &'a [ProfessionalProfile],
        limit: usize,
    ) -> MatchResult<'a> {
        let total_candidates = professionals.len();

        if limit == 0 || professionals.is_empty() {
            return MatchResult {
                matches: Vec::new(),
                total_candidates,
            };
        }

        // Indexed collect keeps input order on both paths
        let parallel = total_candidates >= self.parallel_threshold;
        let mut scored: Vec<ScoredProfessional<'a>> = if parallel {
            professionals
                .par_iter()
                .map(|professional| self.score(client, professional))
                .collect()
        } else {
            professionals
                .iter()
                .map(|professional| self.score(client, professional))
                .collect()
        };

        // `sort_by` is stable
        scored.sort_by(|a, b| {
            b.ai_match_score
                .partial_cmp(&a.ai_match_score)
                .unwrap_or(Ordering::Equal)
        });

        scored.truncate(limit);

        tracing::debug!(
            "Ranked {} candidates, returning {} (project: {})",
            total_candidates,
            scored.len(),
            client.project_type
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }

    /// Explain a scored match using this matcher's rules
    pub fn explain(&self, client: &ClientRequest, scored: &ScoredProfessional<'_>) -> String {
        explain(client, scored, &self.rules)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
