// Template rendering
// Implements: date formatting, per-template layout descriptors, the preview
// render tree, printable HTML export and plain-text export.
// Everything here is pure; only `handlers` touches axum.

pub mod dates;
pub mod handlers;
pub mod html;
pub mod layout;
pub mod plain_text;
pub mod tree;
