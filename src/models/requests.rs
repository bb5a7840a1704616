use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{ClientRequest, ProfessionalProfile};

/// Request to rank a candidate list against one client request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    #[validate(nested)]
    pub client: ClientRequest,
    #[serde(default)]
    #[validate(nested)]
    pub professionals: Vec<ProfessionalProfile>,
    /// Negative values are treated as zero
    #[serde(default)]
    pub limit: Option<i64>,
    /// Attach an explanation to every returned match
    #[serde(default)]
    pub explain: bool,
}

impl RankRequest {
    /// Resolve the requested limit against the configured default and cap
    pub fn effective_limit(&self, default_limit: usize, max_limit: usize) -> usize {
        match self.limit {
            None => default_limit.min(max_limit),
            Some(limit) if limit <= 0 => 0,
            Some(limit) => usize::try_from(limit).unwrap_or(usize::MAX).min(max_limit),
        }
    }
}

/// Request to explain a single client/professional pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    #[validate(nested)]
    pub client: ClientRequest,
    #[validate(nested)]
    pub professional: ProfessionalProfile,
}
