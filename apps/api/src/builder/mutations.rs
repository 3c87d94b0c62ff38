//! Pure mutation functions over [`ResumeData`].
//!
//! Every function borrows the current aggregate and returns a new one. Unknown
//! ids and out-of-range indexes are absorbed as no-ops: the editor may race a
//! removal against a pending update and that is not an error.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{Education, Experience, PersonalInfo, Project, ResumeData};

/// Character guideline shown next to the summary field. Advisory only.
pub const SUMMARY_GUIDELINE_CHARS: usize = 500;

/// Fresh id for a new experience, education or project entry.
///
/// Random v4 ids cannot collide under rapid successive additions and are never
/// handed out twice within a session.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Field updates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum PersonalInfoField {
    FullName(String),
    Email(String),
    Phone(String),
    Location(String),
    LinkedIn(String),
    Portfolio(String),
    Github(String),
}

impl PersonalInfoField {
    fn apply_to(self, info: &mut PersonalInfo) {
        match self {
            PersonalInfoField::FullName(v) => info.full_name = v,
            PersonalInfoField::Email(v) => info.email = v,
            PersonalInfoField::Phone(v) => info.phone = v,
            PersonalInfoField::Location(v) => info.location = v,
            PersonalInfoField::LinkedIn(v) => info.linked_in = Some(v),
            PersonalInfoField::Portfolio(v) => info.portfolio = Some(v),
            PersonalInfoField::Github(v) => info.github = Some(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ExperienceField {
    Company(String),
    Position(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(Vec<String>),
}

impl ExperienceField {
    fn apply_to(self, exp: &mut Experience) {
        match self {
            ExperienceField::Company(v) => exp.company = v,
            ExperienceField::Position(v) => exp.position = v,
            ExperienceField::Location(v) => exp.location = v,
            ExperienceField::StartDate(v) => exp.start_date = v,
            ExperienceField::EndDate(v) => exp.end_date = v,
            ExperienceField::Current(v) => exp.current = v,
            ExperienceField::Description(v) => exp.description = v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationField {
    Institution(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    Gpa(String),
}

impl EducationField {
    fn apply_to(self, edu: &mut Education) {
        match self {
            EducationField::Institution(v) => edu.institution = v,
            EducationField::Degree(v) => edu.degree = v,
            EducationField::Field(v) => edu.field = v,
            EducationField::StartDate(v) => edu.start_date = v,
            EducationField::EndDate(v) => edu.end_date = v,
            EducationField::Gpa(v) => edu.gpa = Some(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ProjectField {
    Name(String),
    Description(String),
    Technologies(Vec<String>),
    Link(String),
    Github(String),
}

impl ProjectField {
    fn apply_to(self, project: &mut Project) {
        match self {
            ProjectField::Name(v) => project.name = v,
            ProjectField::Description(v) => project.description = v,
            ProjectField::Technologies(v) => project.technologies = v,
            ProjectField::Link(v) => project.link = Some(v),
            ProjectField::Github(v) => project.github = Some(v),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info + summary
// ────────────────────────────────────────────────────────────────────────────

pub fn update_personal_info(data: &ResumeData, change: PersonalInfoField) -> ResumeData {
    let mut next = data.clone();
    change.apply_to(&mut next.personal_info);
    next
}

/// Replaces the summary verbatim. [`SUMMARY_GUIDELINE_CHARS`] is not enforced.
pub fn set_summary(data: &ResumeData, text: &str) -> ResumeData {
    ResumeData {
        summary: text.to_string(),
        ..data.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

pub fn add_experience(data: &ResumeData) -> ResumeData {
    let mut next = data.clone();
    next.experience.push(Experience {
        id: new_entry_id(),
        current: false,
        description: vec![String::new()],
        ..Experience::default()
    });
    next
}

pub fn update_experience(data: &ResumeData, id: &str, change: ExperienceField) -> ResumeData {
    let mut next = data.clone();
    if let Some(exp) = next.experience.iter_mut().find(|e| e.id == id) {
        change.apply_to(exp);
    }
    next
}

pub fn remove_experience(data: &ResumeData, id: &str) -> ResumeData {
    let mut next = data.clone();
    next.experience.retain(|e| e.id != id);
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn add_education(data: &ResumeData) -> ResumeData {
    let mut next = data.clone();
    next.education.push(Education {
        id: new_entry_id(),
        gpa: Some(String::new()),
        ..Education::default()
    });
    next
}

pub fn update_education(data: &ResumeData, id: &str, change: EducationField) -> ResumeData {
    let mut next = data.clone();
    if let Some(edu) = next.education.iter_mut().find(|e| e.id == id) {
        change.apply_to(edu);
    }
    next
}

pub fn remove_education(data: &ResumeData, id: &str) -> ResumeData {
    let mut next = data.clone();
    next.education.retain(|e| e.id != id);
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

pub fn add_project(data: &ResumeData) -> ResumeData {
    let mut next = data.clone();
    next.projects.push(Project {
        id: new_entry_id(),
        technologies: Vec::new(),
        link: Some(String::new()),
        github: Some(String::new()),
        ..Project::default()
    });
    next
}

pub fn update_project(data: &ResumeData, id: &str, change: ProjectField) -> ResumeData {
    let mut next = data.clone();
    if let Some(project) = next.projects.iter_mut().find(|p| p.id == id) {
        change.apply_to(project);
    }
    next
}

pub fn remove_project(data: &ResumeData, id: &str) -> ResumeData {
    let mut next = data.clone();
    next.projects.retain(|p| p.id != id);
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Appends the trimmed skill unless it is blank or already present (exact match).
pub fn add_skill(data: &ResumeData, raw: &str) -> ResumeData {
    let skill = raw.trim();
    if skill.is_empty() || data.skills.iter().any(|s| s == skill) {
        return data.clone();
    }
    let mut next = data.clone();
    next.skills.push(skill.to_string());
    next
}

pub fn remove_skill(data: &ResumeData, skill: &str) -> ResumeData {
    let mut next = data.clone();
    next.skills.retain(|s| s != skill);
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Certifications (index-addressed, no ids)
// ────────────────────────────────────────────────────────────────────────────

pub fn set_certifications(data: &ResumeData, list: Vec<String>) -> ResumeData {
    ResumeData {
        certifications: list,
        ..data.clone()
    }
}

/// Appends a blank placeholder for the user to fill in.
pub fn add_certification(data: &ResumeData) -> ResumeData {
    let mut next = data.clone();
    next.certifications.push(String::new());
    next
}

pub fn update_certification(data: &ResumeData, index: usize, value: &str) -> ResumeData {
    let mut next = data.clone();
    if let Some(slot) = next.certifications.get_mut(index) {
        *slot = value.to_string();
    }
    next
}

pub fn remove_certification(data: &ResumeData, index: usize) -> ResumeData {
    let mut next = data.clone();
    if index < next.certifications.len() {
        next.certifications.remove(index);
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Reducer
// ────────────────────────────────────────────────────────────────────────────

/// One editor action. Wire form: `{"type": "addSkill", "skill": "Rust"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ResumeAction {
    UpdatePersonalInfo { change: PersonalInfoField },
    SetSummary { text: String },
    AddExperience,
    UpdateExperience { id: String, change: ExperienceField },
    RemoveExperience { id: String },
    AddEducation,
    UpdateEducation { id: String, change: EducationField },
    RemoveEducation { id: String },
    AddProject,
    UpdateProject { id: String, change: ProjectField },
    RemoveProject { id: String },
    AddSkill { skill: String },
    RemoveSkill { skill: String },
    SetCertifications { certifications: Vec<String> },
    AddCertification,
    UpdateCertification { index: usize, value: String },
    RemoveCertification { index: usize },
}

/// Applies one action and returns the resulting aggregate.
pub fn apply(data: &ResumeData, action: ResumeAction) -> ResumeData {
    match action {
        ResumeAction::UpdatePersonalInfo { change } => update_personal_info(data, change),
        ResumeAction::SetSummary { text } => set_summary(data, &text),
        ResumeAction::AddExperience => add_experience(data),
        ResumeAction::UpdateExperience { id, change } => update_experience(data, &id, change),
        ResumeAction::RemoveExperience { id } => remove_experience(data, &id),
        ResumeAction::AddEducation => add_education(data),
        ResumeAction::UpdateEducation { id, change } => update_education(data, &id, change),
        ResumeAction::RemoveEducation { id } => remove_education(data, &id),
        ResumeAction::AddProject => add_project(data),
        ResumeAction::UpdateProject { id, change } => update_project(data, &id, change),
        ResumeAction::RemoveProject { id } => remove_project(data, &id),
        ResumeAction::AddSkill { skill } => add_skill(data, &skill),
        ResumeAction::RemoveSkill { skill } => remove_skill(data, &skill),
        ResumeAction::SetCertifications { certifications } => {
            set_certifications(data, certifications)
        }
        ResumeAction::AddCertification => add_certification(data),
        ResumeAction::UpdateCertification { index, value } => {
            update_certification(data, index, &value)
        }
        ResumeAction::RemoveCertification { index } => remove_certification(data, index),
    }
}
