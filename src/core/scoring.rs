use crate::core::distance::{distance_between, within_work_radius};
use crate::core::rules::{at_least, at_most, ScoringRules};
use crate::models::{
    ClientRequest, ProfessionalProfile, ScoreBreakdown, ScoringWeights, Urgency,
    WorkMethodology, WorkMode,
};

/// Calculate all four sub-scores for a professional against a client request
///
/// Scoring formula:
/// score = 100 * (
///     technical * 0.40 +      # Experience, skills, track record
///     geographic * 0.25 +     # Remote fit or distance vs work radius
///     personal * 0.20 +       # Communication, work mode, methodology
///     availability * 0.15     # Rating, response time, availability
/// )
pub fn calculate_compatibility(
    client: &ClientRequest,
    professional: &ProfessionalProfile,
    rules: &ScoringRules,
) -> ScoreBreakdown {
    ScoreBreakdown {
        technical: technical_score(client, professional, rules),
        geographic: geographic_score(client, professional, rules),
        personal: personal_score(client, professional, rules),
        availability: availability_score(professional, rules),
    }
}

/// Compatibility score in [0, 100], rounded to two decimals
pub fn compatibility_score(
    client: &ClientRequest,
    professional: &ProfessionalProfile,
    rules: &ScoringRules,
) -> f64 {
    weighted_total(&calculate_compatibility(client, professional, rules), &rules.weights)
}

/// Combine sub-scores into the final 0-100 score
pub fn weighted_total(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> f64 {
    let total = (breakdown.technical * weights.technical
        + breakdown.geographic * weights.geographic
        + breakdown.personal * weights.personal
        + breakdown.availability * weights.availability)
        * 100.0;

    round2(total.clamp(0.0, 100.0))
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cap a summed sub-score at 1.0, dropping float noise from adding decimal points
#[inline]
fn settle(score: f64) -> f64 {
    ((score * 10_000.0).round() / 10_000.0).min(1.0)
}

/// Technical fit (0-1): experience, skills, track record, specializations
pub fn technical_score(
    client: &ClientRequest,
    professional: &ProfessionalProfile,
    rules: &ScoringRules,
) -> f64 {
    let tech = &rules.technical;
    let project = client.project_type.trim().to_lowercase();
    let mut score = 0.0;

    let band = rules.experience_band(client.experience_required);
    if band.contains(professional.experience_years) {
        score += tech.experience_in_range;
        if band.is_optimal(professional.experience_years) {
            score += tech.experience_optimal;
        }
    }

    let skill_match = professional.skills.iter().any(|skill| {
        let skill = skill.trim().to_lowercase();
        project.contains(&skill) || skill.contains(&project)
    });
    if skill_match {
        score += tech.skill_match;
    }

    score += at_least(professional.completed_projects as f64, &tech.track_record).unwrap_or(0.0);

    let specialization_match = professional
        .specializations
        .iter()
        .any(|spec| project.contains(&spec.trim().to_lowercase()));
    if specialization_match {
        score += tech.specialization_match;
    }

    settle(score)
}

/// Geographic fit (0-1)
///
/// A remote request served remotely ignores distance entirely. Missing
/// locations on either side fall back to a neutral value.
pub fn geographic_score(
    client: &ClientRequest,
    professional: &ProfessionalProfile,
    rules: &ScoringRules,
) -> f64 {
    let geo = &rules.geographic;

    if client.work_preference == WorkMode::Remote && professional.offers(WorkMode::Remote) {
        return geo.remote_match;
    }

    let (Some(client_location), Some(area)) = (&client.location, &professional.location) else {
        return geo.missing_location;
    };

    let distance = distance_between(client_location, area);

    if within_work_radius(distance, area) {
        geo.within_radius
    } else if distance <= area.work_radius_km * geo.extended_radius_factor {
        geo.within_extended_radius
    } else {
        at_most(distance, &geo.distance_bands).unwrap_or(geo.beyond_bands)
    }
}

/// Personal fit (0-1): communication style, work mode, methodology
pub fn personal_score(
    client: &ClientRequest,
    professional: &ProfessionalProfile,
    rules: &ScoringRules,
) -> f64 {
    let personal = &rules.personal;
    let mut score = 0.0;

    let styles = (client.communication_style, professional.communication_style);
    if styles.0 == styles.1 {
        score += personal.style_match;
    } else if personal.compatible_styles.contains(&styles) {
        score += personal.compatible_style;
    }

    if professional.offers(client.work_preference) {
        score += personal.work_mode_match;
    }

    match (client.urgency, professional.work_methodology) {
        (Urgency::Urgent, WorkMethodology::Agile) => score += personal.urgent_agile,
        (Urgency::Low, WorkMethodology::Waterfall) => score += personal.low_urgency_waterfall,
        _ => {}
    }

    score += personal.baseline;

    settle(score)
}

/// Availability and performance (0-1): rating, responsiveness, availability
pub fn availability_score(professional: &ProfessionalProfile, rules: &ScoringRules) -> f64 {
    let avail = &rules.availability;
    let mut score = at_least(professional.rating, &avail.rating).unwrap_or(avail.rating_floor);

    score += at_most(professional.response_time_hours, &avail.response_time).unwrap_or(0.0);

    if professional.available {
        score += avail.available;
    }

    settle(score)
}
