//! Self-contained printable HTML for the export flow.
//!
//! Built from the modern [`RenderTree`], so the exported document carries the
//! same sections, order and text as the modern preview. The markup lives in
//! `templates/printable_resume.html`; askama escapes every interpolated value.

use std::time::Duration;

use askama::Template;

use crate::models::resume::ResumeData;
use crate::render::layout::TemplateId;
use crate::render::tree::{render, HeaderContacts, RenderTree, SectionBody};

/// How long the host should wait after loading the document before printing.
pub const PRINT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

const FALLBACK_TITLE: &str = "Resume";

#[derive(Template)]
#[template(path = "printable_resume.html")]
struct PrintableResume<'a> {
    title: &'a str,
    tree: &'a RenderTree,
}

/// Renders `data` as a complete HTML document in the modern layout.
pub fn render_printable_html(data: &ResumeData) -> Result<String, askama::Error> {
    let tree = render(data, TemplateId::Modern);
    let title = match data.personal_info.full_name.trim() {
        "" => FALLBACK_TITLE,
        name => name,
    };

    PrintableResume { title, tree: &tree }.render()
}
