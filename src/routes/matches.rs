use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{
    check_search_text, ErrorResponse, ExplainRequest, ExplainResponse, HealthResponse,
    RankRequest, RankResponse, RankedMatch, ValidationError,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches))
        .route("/matches/explain", web::post().to(explain_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(err: &ValidationError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

fn internal_error(error: &str, message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 500,
    })
}

/// Check a rank request before any scoring happens
pub fn validate_rank_request(
    req: &RankRequest,
    settings: &MatchingSettings,
) -> Result<(), ValidationError> {
    if req.professionals.len() > settings.max_candidates {
        return Err(ValidationError::TooManyCandidates {
            count: req.professionals.len(),
            max: settings.max_candidates,
        });
    }

    req.validate()?;
    check_search_text(&req.client, &req.professionals)
}

/// Check an explain request before scoring the pair
pub fn validate_explain_request(req: &ExplainRequest) -> Result<(), ValidationError> {
    req.validate()?;
    check_search_text(&req.client, std::slice::from_ref(&req.professional))
}

/// Rank, optionally explain, and serialize the response body
pub fn build_rank_body(
    matcher: &Matcher,
    req: &RankRequest,
    limit: usize,
) -> Result<Vec<u8>, serde_json::Error> {
    let result = matcher.rank(&req.client, &req.professionals, limit);

    let matches = result
        .matches
        .into_iter()
        .map(|scored| RankedMatch {
            explanation: req.explain.then(|| matcher.explain(&req.client, &scored)),
            scored,
        })
        .collect();

    serde_json::to_vec(&RankResponse {
        request_id: uuid::Uuid::new_v4(),
        matches,
        total_candidates: result.total_candidates,
        limit,
    })
}

/// Rank professionals endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "client": { "projectType": "encanador", "workPreference": "onsite", ... },
///   "professionals": [{ "id": "string", ... }],
///   "limit": 6,
///   "explain": true
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(err) = validate_rank_request(&req, &state.matching) {
        tracing::warn!("Rejected rank request: {}", err);
        return validation_failed(&err);
    }

    let limit = req.effective_limit(state.matching.default_limit, state.matching.max_limit);

    tracing::info!(
        "Ranking {} candidates for project {:?}, limit: {}",
        req.professionals.len(),
        req.client.project_type,
        limit
    );

    // Scoring is CPU-bound; keep it off the async worker
    let matcher = state.matcher.clone();
    let body = web::block(move || build_rank_body(&matcher, &req, limit)).await;

    match body {
        Ok(Ok(body)) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Ok(Err(e)) => {
            tracing::error!("Failed to serialize rank response: {}", e);
            internal_error("Failed to serialize response", e.to_string())
        }
        Err(e) => {
            tracing::error!("Ranking task failed: {}", e);
            internal_error("Ranking failed", e.to_string())
        }
    }
}

/// Explain one match endpoint
///
/// POST /api/v1/matches/explain
///
/// Request body:
/// ```json
/// {
///   "client": { ... },
///   "professional": { ... }
/// }
/// ```
async fn explain_match(
    state: web::Data<AppState>,
    req: web::Json<ExplainRequest>,
) -> impl Responder {
    if let Err(err) = validate_explain_request(&req) {
        tracing::warn!("Rejected explain request: {}", err);
        return validation_failed(&err);
    }

    let scored = state.matcher.score(&req.client, &req.professional);
    let explanation = state.matcher.explain(&req.client, &scored);

    tracing::debug!(
        "Explained match for professional {} (score {})",
        req.professional.id,
        scored.ai_match_score
    );

    HttpResponse::Ok().json(ExplainResponse {
        professional_id: req.professional.id.clone(),
        ai_match_score: scored.ai_match_score,
        breakdown: scored.breakdown,
        explanation,
    })
}
