// Section suggestions
// Implements: feedback → per-section score and advice, score tiers, fallback
// advice sets, job-description keyword hints.

pub mod fallbacks;
pub mod handlers;
pub mod job_tailored;
pub mod mapper;
pub mod tiers;

pub use mapper::{map_feedback_to_sections, SectionAdviceMap};
