use serde::{Deserialize, Serialize};

/// One titled block of a resume ("Experience", "Skills", ...).
/// Only `content` is ever rewritten by cleanup or redaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Contact header of a resume. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Structured resume as returned by the tailoring model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailoredResume {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailored_resume_deserializes_with_missing_optionals() {
        let json = r#"{
            "sections": [
                {"title": "Experience", "content": "Led the migration to Rust."}
            ]
        }"#;
        let resume: TailoredResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.sections.len(), 1);
        assert_eq!(resume.sections[0].title, "Experience");
        assert_eq!(resume.personal_info, PersonalInfo::default());
        assert!(resume.cover_letter.is_none());
    }

    #[test]
    fn test_absent_personal_fields_are_not_serialized() {
        let info = PersonalInfo {
            full_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["full_name"], "Jane Doe");
        assert!(json.get("phone").is_none());
        assert!(json.get("email").is_none());
    }
}
