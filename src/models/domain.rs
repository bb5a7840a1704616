use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::models::validation::{normalize_variant, UnknownVariant};

/// How urgently the client needs the job done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }
}

impl FromStr for Urgency {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_variant(s).as_str() {
            "low" => Ok(Urgency::Low),
            "normal" => Ok(Urgency::Normal),
            "high" => Ok(Urgency::High),
            "urgent" => Ok(Urgency::Urgent),
            _ => Err(UnknownVariant::new("urgency", s)),
        }
    }
}

/// Where the work happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WorkMode {
    Onsite,
    Remote,
    Hybrid,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Onsite => "onsite",
            WorkMode::Remote => "remote",
            WorkMode::Hybrid => "hybrid",
        }
    }

    /// Label shown to Brazilian users
    pub fn label(&self) -> &'static str {
        match self {
            WorkMode::Onsite => "presencial",
            WorkMode::Remote => "remota",
            WorkMode::Hybrid => "híbrida",
        }
    }
}

impl FromStr for WorkMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_variant(s).as_str() {
            "onsite" => Ok(WorkMode::Onsite),
            "remote" => Ok(WorkMode::Remote),
            "hybrid" => Ok(WorkMode::Hybrid),
            _ => Err(UnknownVariant::new("work mode", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CommunicationStyle {
    Formal,
    Casual,
    Technical,
}

impl CommunicationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStyle::Formal => "formal",
            CommunicationStyle::Casual => "casual",
            CommunicationStyle::Technical => "technical",
        }
    }
}

impl FromStr for CommunicationStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_variant(s).as_str() {
            "formal" => Ok(CommunicationStyle::Formal),
            "casual" => Ok(CommunicationStyle::Casual),
            "technical" => Ok(CommunicationStyle::Technical),
            _ => Err(UnknownVariant::new("communication style", s)),
        }
    }
}

/// Seniority the client asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_variant(s).as_str() {
            "junior" => Ok(ExperienceLevel::Junior),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            _ => Err(UnknownVariant::new("experience level", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WorkMethodology {
    Agile,
    Waterfall,
    #[default]
    Other,
}

impl WorkMethodology {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMethodology::Agile => "agile",
            WorkMethodology::Waterfall => "waterfall",
            WorkMethodology::Other => "other",
        }
    }
}

impl FromStr for WorkMethodology {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_variant(s).as_str() {
            "agile" => Ok(WorkMethodology::Agile),
            "waterfall" => Ok(WorkMethodology::Waterfall),
            "other" => Ok(WorkMethodology::Other),
            _ => Err(UnknownVariant::new("work methodology", s)),
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = UnknownVariant;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

string_conversions!(
    Urgency,
    WorkMode,
    CommunicationStyle,
    ExperienceLevel,
    WorkMethodology,
);

/// Client location
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Professional location plus how far they travel for onsite work
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceArea {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub work_radius_km: f64,
}

/// One search/job request issued by a client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    #[validate(length(min = 1))]
    pub project_type: String,
    /// Advisory only, never used for scoring
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub budget: f64,
    #[serde(default)]
    pub urgency: Urgency,
    pub work_preference: WorkMode,
    pub communication_style: CommunicationStyle,
    pub experience_required: ExperienceLevel,
    #[serde(default)]
    #[validate(nested)]
    pub location: Option<Location>,
}

/// Candidate professional as loaded by the caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[validate(range(min = 0.0))]
    pub experience_years: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub completed_projects: u32,
    #[validate(range(min = 0.0))]
    pub response_time_hours: f64,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub work_preferences: Vec<WorkMode>,
    pub communication_style: CommunicationStyle,
    #[serde(default)]
    pub work_methodology: WorkMethodology,
    #[serde(default)]
    #[validate(nested)]
    pub location: Option<ServiceArea>,
}

impl ProfessionalProfile {
    /// Whether the professional accepts work in the given mode
    pub fn offers(&self, mode: WorkMode) -> bool {
        self.work_preferences.contains(&mode)
    }
}

fn default_true() -> bool { true }

/// Sub-score weights of the compatibility model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub technical: f64,
    pub geographic: f64,
    pub personal: f64,
    pub availability: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.technical + self.geographic + self.personal + self.availability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            technical: 0.40,
            geographic: 0.25,
            personal: 0.20,
            availability: 0.15,
        }
    }
}

/// The four normalized sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub technical: f64,
    pub geographic: f64,
    pub personal: f64,
    pub availability: f64,
}

/// A profile paired with its computed score
///
/// The profile is borrowed from the caller's candidate list and never
/// modified; serializing flattens it and appends the score fields.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProfessional<'a> {
    #[serde(flatten)]
    pub profile: &'a ProfessionalProfile,
    pub ai_match_score: f64,
    pub breakdown: ScoreBreakdown,
}
