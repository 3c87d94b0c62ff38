use serde::{Deserialize, Serialize};

use crate::models::feedback::Feedback;

/// Contact details and professional links shown in the resume header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, `end_date` is ignored for display and rendered as "Present".
    pub current: bool,
    /// One bullet per line. Blank lines are kept here and dropped at render time.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// The aggregate root edited by the builder.
///
/// Stored as JSON under `built-resume:<id>`; the camelCase field names match the
/// documents already written by the host platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    /// Insertion-ordered, no duplicates, no blank entries.
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    /// May hold blank placeholders while the user is still typing.
    pub certifications: Vec<String>,
}

/// A previously analyzed upload, stored under `resume:<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedResume {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub resume_path: String,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

/// Returns the value of an optional link field if it holds visible text.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_editor_state() {
        let data = ResumeData::default();
        assert!(data.personal_info.full_name.is_empty());
        assert!(data.summary.is_empty());
        assert!(data.experience.is_empty());
        assert!(data.education.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.certifications.is_empty());
    }

    #[test]
    fn test_hydrates_host_document_with_camel_case_keys() {
        let json = r#"{
            "personalInfo": {"fullName": "Jane Doe", "email": "jane@x.com", "phone": "555-0100",
                             "location": "Berlin", "linkedIn": "https://linkedin.com/in/jane"},
            "summary": "Engineer",
            "experience": [{"id": "1712", "company": "Acme", "position": "SRE", "location": "",
                            "startDate": "2021-03", "endDate": "", "current": true,
                            "description": ["Ran things", ""]}],
            "skills": ["Go"]
        }"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(data.personal_info.full_name, "Jane Doe");
        assert_eq!(
            data.personal_info.linked_in.as_deref(),
            Some("https://linkedin.com/in/jane")
        );
        assert_eq!(data.personal_info.github, None);
        assert!(data.experience[0].current);
        assert_eq!(data.experience[0].start_date, "2021-03");
        assert!(data.education.is_empty());
        assert!(data.certifications.is_empty());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut data = ResumeData::default();
        data.personal_info.full_name = "Jane".to_string();
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["personalInfo"]["fullName"], "Jane");
        assert!(value.get("personal_info").is_none());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some("  ".to_string())), None);
        assert_eq!(non_blank(&Some(" x ".to_string())), Some("x"));
    }
}
