use serde::{Deserialize, Serialize};

/// Color band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    /// `> 70` good, `50..=70` fair, anything lower poor.
    pub fn classify(score: i64) -> Self {
        if score > 70 {
            ScoreTier::Good
        } else if score > 49 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }
}
