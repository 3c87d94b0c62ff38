// Resume builder
// Implements: pure mutations and the action reducer over ResumeData, advisory
// validation, and loading/saving builder drafts through the KV store.

pub mod handlers;
pub mod mutations;
pub mod session;
pub mod validation;
