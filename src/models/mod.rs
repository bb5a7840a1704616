// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod validation;

pub use domain::{
    ClientRequest, CommunicationStyle, ExperienceLevel, Location, ProfessionalProfile,
    ScoreBreakdown, ScoredProfessional, ScoringWeights, ServiceArea, Urgency, WorkMethodology,
    WorkMode,
};
pub use requests::{ExplainRequest, RankRequest};
pub use responses::{ErrorResponse, ExplainResponse, HealthResponse, RankResponse, RankedMatch};
pub use validation::{check_search_text, UnknownVariant, ValidationError};
