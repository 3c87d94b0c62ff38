//! Keyword hints derived from a pasted job description.

use serde::{Deserialize, Serialize};

const TECH_SKILLS: &[&str] = &[
    "JavaScript", "Python", "React", "Node.js", "SQL", "AWS", "Docker", "Git",
];

const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem-solving",
    "analytical",
];

const NO_DESCRIPTION_SKILLS: &str = "Add skills relevant to your target position";
const NO_DESCRIPTION_KEYWORDS: &str = "Include industry-specific keywords";
const NO_DESCRIPTION_EXPERIENCE: &str = "Highlight experience that matches job requirements";
const NO_TECH_MATCH: &str = "Add technical skills mentioned in the job posting";
const NO_SOFT_MATCH: &str = "Highlight relevant soft skills";
const KEYWORD_HINTS: [&str; 2] = [
    "Include exact phrases from the job description",
    "Use industry terminology",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTailoredSuggestions {
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<Vec<String>>,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<String>>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Scans `job_description` for a fixed list of technical and soft skills
/// (case-insensitive substring match). Falls back to generic hints when no
/// description is given or nothing matches.
pub fn job_tailored_suggestions(job_description: Option<&str>) -> JobTailoredSuggestions {
    let Some(description) = job_description.filter(|d| !d.trim().is_empty()) else {
        return JobTailoredSuggestions {
            skills: owned(&[NO_DESCRIPTION_SKILLS]),
            soft_skills: None,
            keywords: owned(&[NO_DESCRIPTION_KEYWORDS]),
            experience: Some(owned(&[NO_DESCRIPTION_EXPERIENCE])),
        };
    };

    let haystack = description.to_lowercase();
    let matching = |list: &[&str]| -> Vec<String> {
        list.iter()
            .filter(|skill| haystack.contains(&skill.to_lowercase()))
            .map(|skill| skill.to_string())
            .collect()
    };

    let skills = matching(TECH_SKILLS);
    let soft_skills = matching(SOFT_SKILLS);

    JobTailoredSuggestions {
        skills: if skills.is_empty() {
            owned(&[NO_TECH_MATCH])
        } else {
            skills
        },
        soft_skills: Some(if soft_skills.is_empty() {
            owned(&[NO_SOFT_MATCH])
        } else {
            soft_skills
        }),
        keywords: owned(&KEYWORD_HINTS),
        experience: None,
    }
}
