use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

/// Outcome of [`validate`]. Advisory: never blocks editing or saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const SUMMARY_REQUIRED: &str = "Professional summary is required";
pub const EXPERIENCE_REQUIRED: &str = "At least one work experience entry is required";
pub const SKILLS_REQUIRED: &str = "At least one skill is required";

/// Basic `local@domain.tld` shape.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex is valid"));

pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Checks the required fields. Each rule contributes at most one error and the
/// rules always run in the same order. Education, projects and certifications
/// are optional.
pub fn validate(data: &ResumeData) -> ValidationReport {
    let mut errors = Vec::new();
    let info = &data.personal_info;

    if info.full_name.trim().is_empty() {
        errors.push(FULL_NAME_REQUIRED.to_string());
    }

    if info.email.trim().is_empty() {
        errors.push(EMAIL_REQUIRED.to_string());
    } else if !is_plausible_email(&info.email) {
        errors.push(EMAIL_INVALID.to_string());
    }

    if info.phone.trim().is_empty() {
        errors.push(PHONE_REQUIRED.to_string());
    }

    if data.summary.trim().is_empty() {
        errors.push(SUMMARY_REQUIRED.to_string());
    }

    if data.experience.is_empty() {
        errors.push(EXPERIENCE_REQUIRED.to_string());
    }

    if data.skills.is_empty() {
        errors.push(SKILLS_REQUIRED.to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
