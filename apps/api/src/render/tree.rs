//! Lays out ResumeData for a template as a renderable document tree.

use serde::Serialize;

use crate::models::resume::{non_blank, Education, Experience, PersonalInfo, Project, ResumeData};
use crate::render::dates::format_range;
use crate::render::layout::{
    ContactStyle, ExperienceTitle, HeaderStyle, Layout, SectionKind, SkillsStyle, TemplateId,
    Typography,
};

/// Shown in place of a blank full name.
pub const PLACEHOLDER_NAME: &str = "Your Name";

// ────────────────────────────────────────────────────────────────────────────
// Tree types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTree {
    pub template: TemplateId,
    pub header_style: HeaderStyle,
    pub typography: Typography,
    pub header: Header,
    pub sections: Vec<RenderedSection>,
}

#[cfg(test)]
impl RenderTree {
    pub fn section(&self, kind: SectionKind) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn headings(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| s.heading.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    pub contacts: HeaderContacts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "camelCase")]
pub enum HeaderContacts {
    Items(Vec<ContactItem>),
    Line(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    LinkedIn,
    Portfolio,
    Github,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactItem {
    pub kind: ContactKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub heading: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "camelCase")]
pub enum SectionBody {
    Paragraph(String),
    Entries(Vec<Entry>),
    Chips(Vec<String>),
    Inline(String),
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub title: String,
    pub subtitle: Option<String>,
    pub dates: Option<String>,
    pub details: Vec<String>,
    pub bullets: Vec<String>,
    pub links: Vec<EntryLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryLink {
    pub label: String,
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Lays out `data` with the given template. Pure and deterministic.
///
/// Sections whose backing data is empty are left out entirely, so no heading is
/// ever rendered over nothing.
pub fn render(data: &ResumeData, template: TemplateId) -> RenderTree {
    let layout = template.layout();

    let sections = layout
        .section_order
        .iter()
        .filter_map(|&kind| {
            render_section_body(data, &layout, kind).map(|body| RenderedSection {
                kind,
                heading: layout.heading(kind).map(str::to_string),
                body,
            })
        })
        .collect();

    RenderTree {
        template: layout.template,
        header_style: layout.header_style,
        typography: layout.typography,
        header: render_header(&data.personal_info, &layout),
        sections,
    }
}

fn render_header(info: &PersonalInfo, layout: &Layout) -> Header {
    let name = match info.full_name.trim() {
        "" => PLACEHOLDER_NAME.to_string(),
        name => name.to_string(),
    };

    let mut values: Vec<(ContactKind, &str)> = [
        (ContactKind::Email, info.email.trim()),
        (ContactKind::Phone, info.phone.trim()),
        (ContactKind::Location, info.location.trim()),
    ]
    .into_iter()
    .filter(|(_, v)| !v.is_empty())
    .collect();
    let links = [
        (ContactKind::LinkedIn, non_blank(&info.linked_in), "LinkedIn"),
        (ContactKind::Portfolio, non_blank(&info.portfolio), "Portfolio"),
        (ContactKind::Github, non_blank(&info.github), "GitHub"),
    ];

    let contacts = match layout.contact_style {
        ContactStyle::Labeled => {
            let mut items: Vec<ContactItem> = values
                .into_iter()
                .map(|(kind, text)| ContactItem {
                    kind,
                    text: text.to_string(),
                })
                .collect();
            items.extend(links.iter().filter(|(_, v, _)| v.is_some()).map(
                |(kind, _, label)| ContactItem {
                    kind: *kind,
                    text: label.to_string(),
                },
            ));
            HeaderContacts::Items(items)
        }
        ContactStyle::Listed | ContactStyle::Joined(_) => {
            values.extend(links.iter().filter_map(|(kind, v, _)| v.map(|v| (*kind, v))));
            match layout.contact_style {
                ContactStyle::Joined(sep) => HeaderContacts::Line(
                    values.iter().map(|(_, v)| *v).collect::<Vec<_>>().join(sep),
                ),
                _ => HeaderContacts::Items(
                    values
                        .into_iter()
                        .map(|(kind, text)| ContactItem {
                            kind,
                            text: text.to_string(),
                        })
                        .collect(),
                ),
            }
        }
    };

    Header { name, contacts }
}

fn render_section_body(data: &ResumeData, layout: &Layout, kind: SectionKind) -> Option<SectionBody> {
    match kind {
        SectionKind::Summary => {
            (!data.summary.trim().is_empty()).then(|| SectionBody::Paragraph(data.summary.clone()))
        }
        SectionKind::Experience => (!data.experience.is_empty()).then(|| {
            SectionBody::Entries(
                data.experience
                    .iter()
                    .map(|exp| experience_entry(exp, layout))
                    .collect(),
            )
        }),
        SectionKind::Education => (!data.education.is_empty())
            .then(|| SectionBody::Entries(data.education.iter().map(education_entry).collect())),
        SectionKind::Skills => (!data.skills.is_empty()).then(|| match layout.skills_style {
            SkillsStyle::Chips => SectionBody::Chips(data.skills.clone()),
            SkillsStyle::Inline(sep) => SectionBody::Inline(data.skills.join(sep)),
        }),
        SectionKind::Projects => (!data.projects.is_empty()).then(|| {
            SectionBody::Entries(
                data.projects
                    .iter()
                    .map(|p| project_entry(p, layout))
                    .collect(),
            )
        }),
        SectionKind::Certifications => {
            let certs = visible_lines(&data.certifications);
            (!certs.is_empty()).then_some(SectionBody::Bullets(certs))
        }
    }
}

/// Lines that still have text after trimming. Stored data keeps the blanks.
pub fn visible_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .cloned()
        .collect()
}

fn join_non_blank(parts: &[&str], sep: &str) -> Option<String> {
    let parts: Vec<&str> = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(sep))
}

fn experience_entry(exp: &Experience, layout: &Layout) -> Entry {
    let (title, subtitle) = match layout.experience_title {
        ExperienceTitle::Position => (
            exp.position.clone(),
            join_non_blank(&[&exp.company, &exp.location], layout.company_separator),
        ),
        ExperienceTitle::PositionAndCompany => (
            join_non_blank(&[&exp.position, &exp.company], " - ").unwrap_or_default(),
            join_non_blank(&[&exp.location], ""),
        ),
    };

    Entry {
        title,
        subtitle,
        dates: Some(format_range(&exp.start_date, &exp.end_date, exp.current)),
        bullets: visible_lines(&exp.description),
        ..Entry::default()
    }
}

fn education_entry(edu: &Education) -> Entry {
    let mut details = Vec::new();
    if let Some(gpa) = non_blank(&edu.gpa) {
        details.push(format!("GPA: {gpa}"));
    }

    Entry {
        title: join_non_blank(&[&edu.degree, &edu.field], " in ").unwrap_or_default(),
        subtitle: join_non_blank(&[&edu.institution], ""),
        dates: Some(format_range(&edu.start_date, &edu.end_date, false)),
        details,
        ..Entry::default()
    }
}

fn project_entry(project: &Project, layout: &Layout) -> Entry {
    let mut details = Vec::new();
    if !project.description.trim().is_empty() {
        details.push(project.description.clone());
    }

    let technologies = visible_lines(&project.technologies);
    if !technologies.is_empty() {
        let list = technologies.join(", ");
        details.push(match layout.technologies_prefix {
            Some(prefix) => format!("{prefix} {list}"),
            None => list,
        });
    }

    let mut links = Vec::new();
    if layout.show_project_links {
        if let Some(url) = non_blank(&project.link) {
            links.push(EntryLink {
                label: "Live".to_string(),
                url: url.to_string(),
            });
        }
        if let Some(url) = non_blank(&project.github) {
            links.push(EntryLink {
                label: "GitHub".to_string(),
                url: url.to_string(),
            });
        }
    }

    Entry {
        title: project.name.clone(),
        details,
        links,
        ..Entry::default()
    }
}
