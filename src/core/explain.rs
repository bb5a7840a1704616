use std::fmt;

use crate::core::distance::{distance_between, within_work_radius};
use crate::core::rules::ScoringRules;
use crate::models::{ClientRequest, ProfessionalProfile, ScoredProfessional, WorkMode};

const LEAD_IN: &str = "Recomendado porque";

/// One human-readable reason a professional fits a request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchReason {
    Experienced { years: f64 },
    TopRated { rating: f64 },
    WorkModeMatch { mode: WorkMode },
    WithinRadius { distance_km: f64 },
    FastResponse { hours: f64 },
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Experienced { years } => write!(f, "tem {} anos de experiência", years),
            MatchReason::TopRated { rating } => {
                write!(f, "possui avaliação excelente ({:.1}★)", rating)
            }
            MatchReason::WorkModeMatch { mode } => {
                write!(f, "atende na modalidade {}", mode.label())
            }
            MatchReason::WithinRadius { distance_km } => {
                write!(f, "está a {:.1} km de você, dentro do raio de atendimento", distance_km)
            }
            MatchReason::FastResponse { hours } => write!(f, "responde em até {}h", hours),
        }
    }
}

/// Collect the reasons that apply to a pair, in display order
pub fn match_reasons(
    client: &ClientRequest,
    professional: &ProfessionalProfile,
    rules: &ScoringRules,
) -> Vec<MatchReason> {
    let thresholds = &rules.explanation;
    let mut reasons = Vec::with_capacity(5);

    if professional.experience_years >= thresholds.min_experience_years {
        reasons.push(MatchReason::Experienced { years: professional.experience_years });
    }

    if professional.rating >= thresholds.min_rating {
        reasons.push(MatchReason::TopRated { rating: professional.rating });
    }

    if professional.offers(client.work_preference) {
        reasons.push(MatchReason::WorkModeMatch { mode: client.work_preference });
    }

    if let (Some(location), Some(area)) = (&client.location, &professional.location) {
        let distance_km = distance_between(location, area);
        if within_work_radius(distance_km, area) {
            reasons.push(MatchReason::WithinRadius { distance_km });
        }
    }

    if professional.response_time_hours <= thresholds.max_response_hours {
        reasons.push(MatchReason::FastResponse { hours: professional.response_time_hours });
    }

    reasons
}

/// Short justification for showing `scored` to this client
///
/// Falls back to quoting the compatibility score when no specific reason
/// applies, so the result is never empty.
pub fn explain(
    client: &ClientRequest,
    scored: &ScoredProfessional<'_>,
    rules: &ScoringRules,
) -> String {
    let reasons = match_reasons(client, scored.profile, rules);

    if reasons.is_empty() {
        return format!(
            "{} tem {:.2}% de compatibilidade com o seu pedido.",
            scored.profile.name, scored.ai_match_score
        );
    }

    let joined = reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!("{} {}.", LEAD_IN, joined)
}
