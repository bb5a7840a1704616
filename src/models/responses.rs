use serde::{Deserialize, Serialize};
use crate::models::domain::{ScoreBreakdown, ScoredProfessional};

/// One ranked professional as returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch<'a> {
    #[serde(flatten)]
    pub scored: ScoredProfessional<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse<'a> {
    pub request_id: uuid::Uuid,
    pub matches: Vec<RankedMatch<'a>>,
    pub total_candidates: usize,
    pub limit: usize,
}

/// Response for the explain endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub professional_id: String,
    pub ai_match_score: f64,
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
