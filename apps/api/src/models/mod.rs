pub mod feedback;
pub mod resume;
