use thiserror::Error;

use crate::models::{ClientRequest, ProfessionalProfile};

/// Enum text that does not name any known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Errors raised while checking engine input at the service boundary
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid field values: {0}")]
    Fields(#[from] validator::ValidationErrors),

    #[error("Invalid value: {0}")]
    UnknownVariant(#[from] UnknownVariant),

    #[error("Too many candidates: {count} (max {max})")]
    TooManyCandidates { count: usize, max: usize },

    #[error("Blank text in {field}")]
    BlankText { field: &'static str },
}

/// Reject blank matching text, which would be a substring of everything
pub fn check_search_text(
    client: &ClientRequest,
    professionals: &[ProfessionalProfile],
) -> Result<(), ValidationError> {
    if is_blank(&client.project_type) {
        return Err(ValidationError::BlankText { field: "projectType" });
    }

    for professional in professionals {
        if professional.skills.iter().any(|skill| is_blank(skill)) {
            return Err(ValidationError::BlankText { field: "skills" });
        }
        if professional.specializations.iter().any(|spec| is_blank(spec)) {
            return Err(ValidationError::BlankText { field: "specializations" });
        }
    }

    Ok(())
}

#[inline]
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Trim and case-fold enum text before matching it against variant names
pub(crate) fn normalize_variant(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunicationStyle, ExperienceLevel, Urgency, WorkMethodology, WorkMode};

    fn client(project_type: &str) -> ClientRequest {
        ClientRequest {
            project_type: project_type.to_string(),
            budget: 0.0,
            urgency: Urgency::Normal,
            work_preference: WorkMode::Onsite,
            communication_style: CommunicationStyle::Formal,
            experience_required: ExperienceLevel::Mid,
            location: None,
        }
    }

    fn professional(skills: &[&str], specializations: &[&str]) -> ProfessionalProfile {
        ProfessionalProfile {
            id: "pro-3".to_string(),
            name: "Marina Lopes".to_string(),
            title: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            specializations: specializations.iter().map(|s| s.to_string()).collect(),
            experience_years: 3.0,
            rating: 4.0,
            completed_projects: 2,
            response_time_hours: 4.0,
            available: true,
            work_preferences: vec![WorkMode::Onsite],
            communication_style: CommunicationStyle::Formal,
            work_methodology: WorkMethodology::Other,
            location: None,
        }
    }

    #[test]
    fn test_search_text_accepted() {
        let pros = vec![professional(&["encanador"], &["aquecedor"]), professional(&[], &[])];
        assert!(check_search_text(&client("encanador"), &pros).is_ok());
    }

    #[test]
    fn test_blank_search_text_rejected() {
        let err = check_search_text(&client("   "), &[]).unwrap_err();
        assert!(matches!(err, ValidationError::BlankText { field: "projectType" }));

        let pros = vec![professional(&["encanador", " "], &[])];
        let err = check_search_text(&client("encanador"), &pros).unwrap_err();
        assert!(matches!(err, ValidationError::BlankText { field: "skills" }));

        let pros = vec![professional(&["encanador"], &[""])];
        let err = check_search_text(&client("encanador"), &pros).unwrap_err();
        assert!(matches!(err, ValidationError::BlankText { field: "specializations" }));
        assert_eq!(err.to_string(), "Blank text in specializations");
    }

    #[test]
    fn test_variants_are_normalized() {
        assert_eq!(" Remote ".parse::<WorkMode>().unwrap(), WorkMode::Remote);
        assert_eq!("URGENT".parse::<Urgency>().unwrap(), Urgency::Urgent);
        assert_eq!("Senior".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::Senior);
        assert_eq!(
            "technical".parse::<CommunicationStyle>().unwrap(),
            CommunicationStyle::Technical
        );
        assert_eq!("Agile".parse::<WorkMethodology>().unwrap(), WorkMethodology::Agile);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = "expert".parse::<ExperienceLevel>().unwrap_err();
        assert_eq!(err.kind, "experience level");
        assert_eq!(err.value, "expert");
        assert!(err.to_string().contains("expert"));
    }

    #[test]
    fn test_unknown_variant_fails_deserialization() {
        let result: Result<WorkMode, _> = serde_json::from_str("\"teleport\"");
        assert!(result.is_err());

        let ok: WorkMode = serde_json::from_str("\"Hybrid\"").unwrap();
        assert_eq!(ok, WorkMode::Hybrid);
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"hybrid\"");
    }
}
