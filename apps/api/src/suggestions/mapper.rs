//! Maps feedback onto per-section scores and advice.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::feedback::{Feedback, FeedbackCategory};
use crate::suggestions::fallbacks;

/// Editor sections that can carry a score badge and advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::PersonalInfo,
        SectionId::Summary,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
    ];

    pub fn fallback_tips(self) -> &'static [&'static str] {
        match self {
            SectionId::PersonalInfo => fallbacks::PERSONAL_INFO,
            SectionId::Summary => fallbacks::SUMMARY,
            SectionId::Experience => fallbacks::EXPERIENCE,
            SectionId::Education => fallbacks::EDUCATION,
            SectionId::Skills => fallbacks::SKILLS,
            SectionId::Projects => fallbacks::PROJECTS,
            SectionId::Certifications => fallbacks::CERTIFICATIONS,
        }
    }

    /// Feedback category whose score backs this section, if any.
    fn score_source(self, feedback: &Feedback) -> Option<&FeedbackCategory> {
        match self {
            SectionId::Summary | SectionId::Experience => Some(&feedback.content),
            SectionId::Skills => Some(&feedback.skills),
            SectionId::PersonalInfo | SectionId::Education | SectionId::Projects => {
                Some(&feedback.structure)
            }
            SectionId::Certifications => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionAdvice {
    pub score: Option<u32>,
    pub tips: Vec<String>,
}

pub type SectionAdviceMap = BTreeMap<SectionId, SectionAdvice>;

/// Content tips mentioning either word belong to the summary section.
const SUMMARY_MARKERS: [&str; 2] = ["summary", "objective"];

fn mentions_summary(tip: &str) -> bool {
    let lower = tip.to_lowercase();
    SUMMARY_MARKERS.iter().any(|m| lower.contains(m))
}

/// Maps optional feedback onto every editor section.
///
/// Without feedback every section gets no score and no tips. With feedback,
/// only `improve` tips are surfaced and any section left without a tip gets
/// its fallback set.
pub fn map_feedback_to_sections(feedback: Option<&Feedback>) -> SectionAdviceMap {
    let Some(feedback) = feedback else {
        return SectionId::ALL
            .into_iter()
            .map(|id| (id, SectionAdvice::default()))
            .collect();
    };

    let mut tips: BTreeMap<SectionId, Vec<String>> = BTreeMap::new();
    for tip in feedback.content.improve_tips() {
        let section = if mentions_summary(tip) {
            SectionId::Summary
        } else {
            SectionId::Experience
        };
        tips.entry(section).or_default().push(tip.to_string());
    }
    for tip in feedback.skills.improve_tips() {
        tips.entry(SectionId::Skills).or_default().push(tip.to_string());
    }

    SectionId::ALL
        .into_iter()
        .map(|id| {
            let tips = match tips.remove(&id) {
                Some(tips) if !tips.is_empty() => tips,
                _ => id.fallback_tips().iter().map(|t| t.to_string()).collect(),
            };
            let score = id.score_source(feedback).map(FeedbackCategory::bounded_score);
            (id, SectionAdvice { score, tips })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feedback::{FeedbackTip, TipKind};

    fn tip(kind: TipKind, text: &str) -> FeedbackTip {
        FeedbackTip {
            kind,
            tip: text.to_string(),
            explanation: None,
        }
    }

    fn feedback() -> Feedback {
        Feedback {
            overall_score: 68,
            content: FeedbackCategory {
                score: 55,
                tips: vec![
                    tip(TipKind::Improve, "Tighten your Summary to three lines"),
                    tip(TipKind::Improve, "Quantify results"),
                    tip(TipKind::Good, "Clear summary of roles"),
                ],
            },
            skills: FeedbackCategory {
                score: 82,
                tips: vec![tip(TipKind::Improve, "Group tools by domain")],
            },
            structure: FeedbackCategory {
                score: 90,
                tips: vec![tip(TipKind::Improve, "Use consistent headings")],
            },
            ..Feedback::default()
        }
    }

    #[test]
    fn test_no_feedback_yields_empty_advice_everywhere() {
        let map = map_feedback_to_sections(None);
        assert_eq!(map.len(), SectionId::ALL.len());
        for advice in map.values() {
            assert_eq!(advice.score, None);
            assert!(advice.tips.is_empty());
        }
    }

    #[test]
    fn test_summary_tip_routed_to_summary_only() {
        let map = map_feedback_to_sections(Some(&feedback()));
        assert_eq!(
            map[&SectionId::Summary].tips,
            vec!["Tighten your Summary to three lines"]
        );
        assert_eq!(map[&SectionId::Experience].tips, vec!["Quantify results"]);
    }

    #[test]
    fn test_objective_routes_to_summary() {
        let mut fb = Feedback::default();
        fb.content.tips = vec![tip(TipKind::Improve, "State an OBJECTIVE")];
        let map = map_feedback_to_sections(Some(&fb));
        assert_eq!(map[&SectionId::Summary].tips, vec!["State an OBJECTIVE"]);
        assert_eq!(
            map[&SectionId::Experience].tips,
            fallbacks::EXPERIENCE.to_vec()
        );
    }

    #[test]
    fn test_good_tips_are_filtered() {
        let map = map_feedback_to_sections(Some(&feedback()));
        let all: Vec<&String> = map.values().flat_map(|a| a.tips.iter()).collect();
        assert!(!all.iter().any(|t| t.as_str() == "Clear summary of roles"));
    }

    #[test]
    fn test_score_sources() {
        let map = map_feedback_to_sections(Some(&feedback()));
        assert_eq!(map[&SectionId::Summary].score, Some(55));
        assert_eq!(map[&SectionId::Experience].score, Some(55));
        assert_eq!(map[&SectionId::Skills].score, Some(82));
        assert_eq!(map[&SectionId::PersonalInfo].score, Some(90));
        assert_eq!(map[&SectionId::Education].score, Some(90));
        assert_eq!(map[&SectionId::Projects].score, Some(90));
        assert_eq!(map[&SectionId::Certifications].score, None);
    }

    #[test]
    fn test_sections_without_tips_get_fallbacks() {
        let map = map_feedback_to_sections(Some(&feedback()));
        assert_eq!(
            map[&SectionId::PersonalInfo].tips,
            fallbacks::PERSONAL_INFO.to_vec()
        );
        assert_eq!(
            map[&SectionId::Certifications].tips,
            fallbacks::CERTIFICATIONS.to_vec()
        );
        assert_eq!(map[&SectionId::Skills].tips, vec!["Group tools by domain"]);
    }

    #[test]
    fn test_fallback_sets_are_distinct() {
        for a in SectionId::ALL {
            for b in SectionId::ALL {
                if a != b {
                    assert_ne!(a.fallback_tips(), b.fallback_tips());
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let mut fb = feedback();
        fb.skills.score = 140;
        let map = map_feedback_to_sections(Some(&fb));
        assert_eq!(map[&SectionId::Skills].score, Some(100));
    }

    #[test]
    fn test_map_serializes_with_section_keys() {
        let value = serde_json::to_value(map_feedback_to_sections(None)).unwrap();
        assert!(value["personalInfo"]["score"].is_null());
        assert_eq!(value["certifications"]["tips"], serde_json::json!([]));
    }
}
