//! Declarative table of every weight and threshold used by the scorer.
//!
//! Scoring functions only read from [`ScoringRules`]; tuning a rule means
//! changing a value here, never the control flow in `scoring`.

use crate::models::{CommunicationStyle, ExperienceLevel, ScoringWeights};

/// One step of a banded rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub threshold: f64,
    pub points: f64,
}

impl Tier {
    pub const fn new(threshold: f64, points: f64) -> Self {
        Self { threshold, points }
    }
}

/// Points of the first tier whose threshold is `<= value`
///
/// Tiers must be listed from the highest threshold down.
#[inline]
pub fn at_least(value: f64, tiers: &[Tier]) -> Option<f64> {
    tiers.iter().find(|t| value >= t.threshold).map(|t| t.points)
}

/// Points of the first tier whose threshold is `>= value`
///
/// Tiers must be listed from the lowest threshold up.
#[inline]
pub fn at_most(value: f64, tiers: &[Tier]) -> Option<f64> {
    tiers.iter().find(|t| value <= t.threshold).map(|t| t.points)
}

/// Accepted and ideal years of experience for a seniority level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceBand {
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

impl ExperienceBand {
    #[inline]
    pub fn contains(&self, years: f64) -> bool {
        years >= self.min && years <= self.max
    }

    #[inline]
    pub fn is_optimal(&self, years: f64) -> bool {
        (years - self.optimal).abs() < f64::EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechnicalRules {
    pub junior: ExperienceBand,
    pub mid: ExperienceBand,
    pub senior: ExperienceBand,
    pub experience_in_range: f64,
    pub experience_optimal: f64,
    pub skill_match: f64,
    /// Completed projects, highest threshold first
    pub track_record: [Tier; 3],
    pub specialization_match: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicRules {
    pub remote_match: f64,
    pub missing_location: f64,
    pub within_radius: f64,
    pub extended_radius_factor: f64,
    pub within_extended_radius: f64,
    /// Absolute distance bands in km, nearest first
    pub distance_bands: [Tier; 2],
    pub beyond_bands: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalRules {
    pub style_match: f64,
    /// Ordered (client, professional) pairs that still communicate well
    pub compatible_styles: [(CommunicationStyle, CommunicationStyle); 3],
    pub compatible_style: f64,
    pub work_mode_match: f64,
    pub urgent_agile: f64,
    pub low_urgency_waterfall: f64,
    pub baseline: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailabilityRules {
    /// Rating bands, highest threshold first
    pub rating: [Tier; 3],
    pub rating_floor: f64,
    /// Response time bands in hours, fastest first
    pub response_time: [Tier; 3],
    pub available: f64,
}

/// Predicates the explanation generator re-checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplanationRules {
    pub min_experience_years: f64,
    pub min_rating: f64,
    pub max_response_hours: f64,
}

/// Complete rule set of the compatibility model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRules {
    pub weights: ScoringWeights,
    pub technical: TechnicalRules,
    pub geographic: GeographicRules,
    pub personal: PersonalRules,
    pub availability: AvailabilityRules,
    pub explanation: ExplanationRules,
}

impl ScoringRules {
    /// Default rule set with custom sub-score weights
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    pub fn experience_band(&self, level: ExperienceLevel) -> ExperienceBand {
        match level {
            ExperienceLevel::Junior => self.technical.junior,
            ExperienceLevel::Mid => self.technical.mid,
            ExperienceLevel::Senior => self.technical.senior,
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            technical: TechnicalRules {
                junior: ExperienceBand {
                    min: 0.0,
                    max: 2.0,
                    optimal: 1.0,
                },
                mid: ExperienceBand {
                    min: 2.0,
                    max: 8.0,
                    optimal: 5.0,
                },
                senior: ExperienceBand {
                    min: 5.0,
                    max: 20.0,
                    optimal: 10.0,
                },
                experience_in_range: 0.4,
                experience_optimal: 0.1,
                skill_match: 0.3,
                track_record: [
                    Tier::new(10.0, 0.2),
                    Tier::new(5.0, 0.15),
                    Tier::new(1.0, 0.1),
                ],
                specialization_match: 0.1,
            },
            geographic: GeographicRules {
                remote_match: 1.0,
                missing_location: 0.5,
                within_radius: 1.0,
                extended_radius_factor: 1.5,
                within_extended_radius: 0.7,
                distance_bands: [Tier::new(50.0, 0.4), Tier::new(200.0, 0.2)],
                beyond_bands: 0.1,
            },
            personal: PersonalRules {
                style_match: 0.4,
                compatible_styles: [
                    (CommunicationStyle::Formal, CommunicationStyle::Technical),
                    (CommunicationStyle::Technical, CommunicationStyle::Formal),
                    (CommunicationStyle::Casual, CommunicationStyle::Technical),
                ],
                compatible_style: 0.2,
                work_mode_match: 0.3,
                urgent_agile: 0.2,
                low_urgency_waterfall: 0.1,
                baseline: 0.1,
            },
            availability: AvailabilityRules {
                rating: [
                    Tier::new(4.5, 0.4),
                    Tier::new(4.0, 0.3),
                    Tier::new(3.5, 0.2),
                ],
                rating_floor: 0.1,
                response_time: [
                    Tier::new(2.0, 0.3),
                    Tier::new(8.0, 0.2),
                    Tier::new(24.0, 0.1),
                ],
                available: 0.3,
            },
            explanation: ExplanationRules {
                min_experience_years: 5.0,
                min_rating: 4.5,
                max_response_hours: 8.0,
            },
        }
    }
}
