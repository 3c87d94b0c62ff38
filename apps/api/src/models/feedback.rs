use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound for every score carried by [`Feedback`].
pub const MAX_SCORE: u32 = 100;

/// Reads any JSON number (or null) as a score: rounded, then clamped to
/// `0..=MAX_SCORE`. The analyzer writes plain numbers, fractional ones included.
fn lenient_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    Good,
    Improve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackTip {
    #[serde(rename = "type")]
    pub kind: TipKind,
    pub tip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackCategory {
    #[serde(deserialize_with = "lenient_score")]
    pub score: u32,
    pub tips: Vec<FeedbackTip>,
}

impl FeedbackCategory {
    /// Score clamped to `0..=100`.
    pub fn bounded_score(&self) -> u32 {
        self.score.min(MAX_SCORE)
    }

    /// Tip texts tagged `improve`, in their original order.
    pub fn improve_tips(&self) -> impl Iterator<Item = &str> {
        self.tips
            .iter()
            .filter(|t| t.kind == TipKind::Improve)
            .map(|t| t.tip.as_str())
    }
}

/// AI analysis attached to an uploaded resume. Produced elsewhere; read-only here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feedback {
    #[serde(deserialize_with = "lenient_score")]
    pub overall_score: u32,
    #[serde(rename = "ATS")]
    pub ats: FeedbackCategory,
    pub tone_and_style: FeedbackCategory,
    pub content: FeedbackCategory,
    pub structure: FeedbackCategory,
    pub skills: FeedbackCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_host_feedback_document() {
        let json = r#"{
            "overallScore": 72,
            "ATS": {"score": 80, "tips": [{"type": "good", "tip": "Clean layout"}]},
            "toneAndStyle": {"score": 65, "tips": []},
            "content": {"score": 55, "tips": [
                {"type": "improve", "tip": "Quantify results", "explanation": "Numbers stand out"}
            ]},
            "structure": {"score": 90, "tips": []},
            "skills": {"score": 40, "tips": []}
        }"#;
        let fb: Feedback = serde_json::from_str(json).unwrap();
        assert_eq!(fb.overall_score, 72);
        assert_eq!(fb.ats.score, 80);
        assert_eq!(fb.ats.tips[0].kind, TipKind::Good);
        assert_eq!(fb.content.tips[0].explanation.as_deref(), Some("Numbers stand out"));
        assert_eq!(fb.skills.score, 40);
    }

    #[test]
    fn test_missing_categories_default_to_empty() {
        let fb: Feedback = serde_json::from_str(r#"{"overallScore": 10}"#).unwrap();
        assert_eq!(fb.content.score, 0);
        assert!(fb.skills.tips.is_empty());
    }

    #[test]
    fn test_fractional_and_out_of_range_scores_are_accepted() {
        let json = r#"{
            "overallScore": 72.5,
            "content": {"score": 54.4, "tips": []},
            "skills": {"score": 130, "tips": []},
            "structure": {"score": -3, "tips": []},
            "ATS": {"score": null, "tips": []}
        }"#;
        let fb: Feedback = serde_json::from_str(json).unwrap();
        assert_eq!(fb.overall_score, 73);
        assert_eq!(fb.content.score, 54);
        assert_eq!(fb.skills.score, 100);
        assert_eq!(fb.structure.score, 0);
        assert_eq!(fb.ats.score, 0);
    }

    #[test]
    fn test_non_numeric_score_is_rejected() {
        let result = serde_json::from_str::<Feedback>(r#"{"overallScore": "high"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bounded_score_clamps() {
        let cat = FeedbackCategory {
            score: 140,
            tips: vec![],
        };
        assert_eq!(cat.bounded_score(), 100);
    }

    #[test]
    fn test_improve_tips_filters_good() {
        let cat = FeedbackCategory {
            score: 50,
            tips: vec![
                FeedbackTip {
                    kind: TipKind::Good,
                    tip: "fine".to_string(),
                    explanation: None,
                },
                FeedbackTip {
                    kind: TipKind::Improve,
                    tip: "fix".to_string(),
                    explanation: None,
                },
            ],
        };
        assert_eq!(cat.improve_tips().collect::<Vec<_>>(), vec!["fix"]);
    }
}
