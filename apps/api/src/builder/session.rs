//! Builder session persistence: load, save and the analyzed-resume library.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::builder::mutations::SUMMARY_GUIDELINE_CHARS;
use crate::errors::AppError;
use crate::models::feedback::Feedback;
use crate::models::resume::{AnalyzedResume, ResumeData};
use crate::store::{
    analyzed_resume_key, built_resume_key, normalize_resume_id, save_key, KvStore,
    ANALYZED_RESUME_PREFIX,
};
use crate::suggestions::{map_feedback_to_sections, SectionAdviceMap};

/// Everything the editor needs to open a resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderSession {
    pub resume_id: String,
    pub data: ResumeData,
    /// Whether `data` came from a saved draft rather than the empty default.
    pub restored: bool,
    pub feedback: Option<Feedback>,
    pub section_advice: SectionAdviceMap,
    /// Length guideline for the summary counter.
    pub summary_guideline_chars: usize,
}

/// Opens the builder for `resume_id`.
///
/// Feedback comes from the analyzed upload at `resume:<id>`, the draft from
/// `built-resume:<id>`. Nothing here fails: an unreachable store or an
/// unparsable document leaves that part at its default and logs a warning.
pub async fn load_builder(kv: &dyn KvStore, resume_id: &str) -> BuilderSession {
    let resume_id = normalize_resume_id(resume_id);
    let feedback = load_feedback(kv, resume_id).await;

    let draft = match kv.get(&built_resume_key(resume_id)).await {
        Ok(Some(raw)) => match serde_json::from_str::<ResumeData>(&raw) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!("Saved draft for resume {resume_id} is unreadable: {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to load draft for resume {resume_id}: {e}");
            None
        }
    };

    let restored = draft.is_some();
    info!("Opened builder for resume {resume_id} (restored draft: {restored})");

    BuilderSession {
        resume_id: resume_id.to_string(),
        data: draft.unwrap_or_default(),
        restored,
        section_advice: map_feedback_to_sections(feedback.as_ref()),
        feedback,
        summary_guideline_chars: SUMMARY_GUIDELINE_CHARS,
    }
}

/// The only part of an analyzed-resume document the builder reads. Other
/// fields may be missing or shaped differently.
#[derive(Deserialize)]
struct FeedbackDoc {
    #[serde(default)]
    feedback: Option<Feedback>,
}

async fn load_feedback(kv: &dyn KvStore, resume_id: &str) -> Option<Feedback> {
    match kv.get(&analyzed_resume_key(resume_id)).await {
        Ok(Some(raw)) => match serde_json::from_str::<FeedbackDoc>(&raw) {
            Ok(doc) => doc.feedback,
            Err(e) => {
                warn!("Analyzed resume {resume_id} has unreadable feedback: {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to load feedback for resume {resume_id}: {e}");
            None
        }
    }
}

/// Serializes `data` under `built-resume:<id>` (or a timestamp key when no
/// id is given) and returns the key written.
pub async fn save_builder(
    kv: &dyn KvStore,
    resume_id: Option<&str>,
    data: &ResumeData,
) -> Result<String, AppError> {
    let key = save_key(resume_id);
    let value = serde_json::to_string(data)?;
    kv.set(&key, &value).await?;
    info!("Saved builder draft to {key} ({} bytes)", value.len());
    Ok(key)
}

/// All analyzed uploads. Entries that fail to parse are skipped.
pub async fn list_analyzed_resumes(kv: &dyn KvStore) -> Result<Vec<AnalyzedResume>, AppError> {
    let entries = kv.list(ANALYZED_RESUME_PREFIX, true).await?;
    let total = entries.len();

    let resumes: Vec<AnalyzedResume> = entries
        .into_iter()
        .filter_map(|entry| {
            let raw = entry.value?;
            match serde_json::from_str(&raw) {
                Ok(resume) => Some(resume),
                Err(e) => {
                    warn!("Skipping unreadable entry {}: {e}", entry.key);
                    None
                }
            }
        })
        .collect();

    info!("Listed {} of {total} analyzed resumes", resumes.len());
    Ok(resumes)
}

pub async fn get_analyzed_resume(
    kv: &dyn KvStore,
    resume_id: &str,
) -> Result<AnalyzedResume, AppError> {
    let raw = kv
        .get(&analyzed_resume_key(resume_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::builder::mutations::add_skill;
    use crate::store::{KvEntry, MemoryKvStore, StoreError};
    use crate::suggestions::mapper::SectionId;

    /// A store whose every call fails.
    struct DownStore;

    #[async_trait]
    impl KvStore for DownStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Blob("connection refused".into()))
        }
        async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Blob("connection refused".into()))
        }
        async fn list(&self, _prefix: &str, _values: bool) -> Result<Vec<KvEntry>, StoreError> {
            Err(StoreError::Blob("connection refused".into()))
        }
    }

    fn analyzed(id: &str) -> String {
        json!({
            "id": id,
            "companyName": "Acme",
            "jobTitle": "SRE",
            "imagePath": format!("/uploads/{id}.png"),
            "resumePath": format!("/uploads/{id}.pdf"),
            "feedback": {
                "overallScore": 64,
                "content": {"score": 58, "tips": [
                    {"type": "improve", "tip": "Sharpen the summary"}
                ]},
                "skills": {"score": 75, "tips": []},
                "structure": {"score": 80, "tips": []}
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_load_without_anything_stored() {
        let kv = MemoryKvStore::new();
        let session = load_builder(&kv, "r1").await;
        assert_eq!(session.data, ResumeData::default());
        assert!(!session.restored);
        assert_eq!(session.feedback, None);
        assert!(session.section_advice.values().all(|a| a.score.is_none()));
    }

    #[tokio::test]
    async fn test_save_then_load_restores_draft_and_feedback() {
        let kv = MemoryKvStore::new();
        kv.set("resume:r1", &analyzed("r1")).await.unwrap();
        let data = add_skill(&ResumeData::default(), "Rust");

        let key = save_builder(&kv, Some("r1"), &data).await.unwrap();
        assert_eq!(key, "built-resume:r1");

        let session = load_builder(&kv, "r1").await;
        assert!(session.restored);
        assert_eq!(session.data, data);
        assert_eq!(session.feedback.as_ref().map(|f| f.overall_score), Some(64));
        assert_eq!(
            session.section_advice[&SectionId::Summary].tips,
            vec!["Sharpen the summary"]
        );
        assert_eq!(session.section_advice[&SectionId::Skills].score, Some(75));
    }

    #[tokio::test]
    async fn test_feedback_read_from_document_without_id() {
        let kv = MemoryKvStore::new();
        kv.set(
            "resume:r1",
            &json!({"feedback": {"overallScore": 60, "skills": {"score": 45, "tips": [
                {"type": "improve", "tip": "Name your cloud platforms"}
            ]}}})
            .to_string(),
        )
        .await
        .unwrap();

        let session = load_builder(&kv, "r1").await;
        let feedback = session.feedback.expect("feedback should be kept");
        assert_eq!(feedback.overall_score, 60);
        assert_eq!(session.section_advice[&SectionId::Skills].score, Some(45));
        assert_eq!(
            session.section_advice[&SectionId::Skills].tips,
            vec!["Name your cloud platforms"]
        );
    }

    #[tokio::test]
    async fn test_feedback_with_fractional_scores_is_kept() {
        let kv = MemoryKvStore::new();
        kv.set(
            "resume:r1",
            &json!({
                "id": "r1",
                "imagePath": "/uploads/r1.png",
                "resumePath": "/uploads/r1.pdf",
                "feedback": {"overallScore": 72.5, "content": {"score": 66.6, "tips": []}}
            })
            .to_string(),
        )
        .await
        .unwrap();

        let session = load_builder(&kv, "r1").await;
        assert_eq!(session.feedback.map(|f| f.overall_score), Some(73));
        assert_eq!(session.section_advice[&SectionId::Summary].score, Some(67));
    }

    #[tokio::test]
    async fn test_padded_id_loads_what_was_saved() {
        let kv = MemoryKvStore::new();
        let data = add_skill(&ResumeData::default(), "Go");
        save_builder(&kv, Some(" r1 "), &data).await.unwrap();

        let session = load_builder(&kv, "r1 ").await;
        assert_eq!(session.resume_id, "r1");
        assert!(session.restored);
        assert_eq!(session.data, data);
    }

    #[tokio::test]
    async fn test_load_failure_falls_back_to_default() {
        let session = load_builder(&DownStore, "r1").await;
        assert_eq!(session.data, ResumeData::default());
        assert_eq!(session.feedback, None);
    }

    #[tokio::test]
    async fn test_unreadable_draft_falls_back_to_default() {
        let kv = MemoryKvStore::new();
        kv.set("built-resume:r1", "{not json").await.unwrap();
        let session = load_builder(&kv, "r1").await;
        assert!(!session.restored);
        assert_eq!(session.data, ResumeData::default());
    }

    #[tokio::test]
    async fn test_save_failure_is_surfaced() {
        let result = save_builder(&DownStore, Some("r1"), &ResumeData::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_save_without_id_uses_timestamp_key() {
        let kv = MemoryKvStore::new();
        let key = save_builder(&kv, None, &ResumeData::default()).await.unwrap();
        assert!(key.starts_with("built-resume:"));
        assert!(kv.get(&key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_list_skips_unreadable_entries() {
        let kv = MemoryKvStore::new();
        kv.set("resume:a", &analyzed("a")).await.unwrap();
        kv.set("resume:b", "garbage").await.unwrap();
        kv.set("built-resume:a", "{}").await.unwrap();

        let resumes = list_analyzed_resumes(&kv).await.unwrap();
        assert_eq!(resumes.len(), 1);
        assert_eq!(resumes[0].id, "a");
        assert_eq!(resumes[0].company_name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_get_missing_resume_is_not_found() {
        let kv = MemoryKvStore::new();
        let err = get_analyzed_resume(&kv, "nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
