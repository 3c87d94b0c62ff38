//! Layout descriptors for the three resume templates.
//!
//! The renderer is a single walk over [`ResumeData`](crate::models::resume::ResumeData)
//! parameterized by one of these descriptors. Templates differ only in the data
//! below: section order, header and contact treatment, headings, typography and
//! a handful of per-entry formatting choices.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Template selector
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Modern, TemplateId::Classic, TemplateId::Minimal];

    /// Resolves a template name. Unknown names fall back to [`TemplateId::Modern`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "modern" => TemplateId::Modern,
            "classic" => TemplateId::Classic,
            "minimal" => TemplateId::Minimal,
            other => {
                tracing::debug!("Unknown template id '{other}', using modern");
                TemplateId::Modern
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            TemplateId::Modern => modern_layout(),
            TemplateId::Classic => classic_layout(),
            TemplateId::Minimal => minimal_layout(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Descriptor types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderStyle {
    /// Full-width colored band.
    Banner,
    /// Centered name over a rule.
    Centered,
    /// Left-aligned, no decoration.
    Plain,
}

/// How contact details and profile links appear under the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactStyle {
    /// Values for email/phone/location, short labels for profile links.
    Labeled,
    /// Every value listed as its own item.
    Listed,
    /// Every value joined into a single line.
    Joined(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillsStyle {
    Chips,
    Inline(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceTitle {
    /// Position alone; company goes to the subtitle.
    Position,
    /// `"position - company"`; subtitle is the location.
    PositionAndCompany,
}

/// Font sizes in CSS pixels and the heading weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub name_px: u8,
    pub name_weight: u16,
    pub heading_px: u8,
    pub heading_weight: u16,
    pub body_px: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub template: TemplateId,
    pub section_order: [SectionKind; 6],
    pub header_style: HeaderStyle,
    pub contact_style: ContactStyle,
    pub typography: Typography,
    pub skills_style: SkillsStyle,
    pub experience_title: ExperienceTitle,
    /// Separator between company and location when the company is in the subtitle.
    pub company_separator: &'static str,
    /// Label placed before a project's technology list, if any.
    pub technologies_prefix: Option<&'static str>,
    /// Whether project live/source links are shown.
    pub show_project_links: bool,
    headings: [(SectionKind, Option<&'static str>); 6],
}

impl Layout {
    /// Heading text for a section. `None` means the section renders without one.
    pub fn heading(&self, kind: SectionKind) -> Option<&'static str> {
        self.headings
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, h)| *h)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in layouts
// ────────────────────────────────────────────────────────────────────────────

pub fn modern_layout() -> Layout {
    Layout {
        template: TemplateId::Modern,
        section_order: [
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Skills,
            SectionKind::Projects,
            SectionKind::Education,
            SectionKind::Certifications,
        ],
        header_style: HeaderStyle::Banner,
        contact_style: ContactStyle::Labeled,
        typography: Typography {
            name_px: 24,
            name_weight: 700,
            heading_px: 18,
            heading_weight: 700,
            body_px: 11,
        },
        skills_style: SkillsStyle::Chips,
        experience_title: ExperienceTitle::Position,
        company_separator: " • ",
        technologies_prefix: Some("Technologies:"),
        show_project_links: true,
        headings: [
            (SectionKind::Summary, Some("PROFESSIONAL SUMMARY")),
            (SectionKind::Experience, Some("PROFESSIONAL EXPERIENCE")),
            (SectionKind::Skills, Some("TECHNICAL SKILLS")),
            (SectionKind::Projects, Some("PROJECTS")),
            (SectionKind::Education, Some("EDUCATION")),
            (SectionKind::Certifications, Some("CERTIFICATIONS")),
        ],
    }
}

pub fn classic_layout() -> Layout {
    Layout {
        template: TemplateId::Classic,
        section_order: [
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Education,
            SectionKind::Skills,
            SectionKind::Projects,
            SectionKind::Certifications,
        ],
        header_style: HeaderStyle::Centered,
        contact_style: ContactStyle::Listed,
        typography: Typography {
            name_px: 30,
            name_weight: 700,
            heading_px: 18,
            heading_weight: 700,
            body_px: 11,
        },
        skills_style: SkillsStyle::Inline(" • "),
        experience_title: ExperienceTitle::PositionAndCompany,
        company_separator: " • ",
        technologies_prefix: Some("Technologies:"),
        show_project_links: false,
        headings: [
            (SectionKind::Summary, Some("Professional Summary")),
            (SectionKind::Experience, Some("Professional Experience")),
            (SectionKind::Education, Some("Education")),
            (SectionKind::Skills, Some("Technical Skills")),
            (SectionKind::Projects, Some("Projects")),
            (SectionKind::Certifications, Some("Certifications")),
        ],
    }
}

pub fn minimal_layout() -> Layout {
    Layout {
        template: TemplateId::Minimal,
        section_order: [
            SectionKind::Summary,
            SectionKind::Experience,
            SectionKind::Skills,
            SectionKind::Projects,
            SectionKind::Education,
            SectionKind::Certifications,
        ],
        header_style: HeaderStyle::Plain,
        contact_style: ContactStyle::Joined(" | "),
        typography: Typography {
            name_px: 36,
            name_weight: 300,
            heading_px: 20,
            heading_weight: 300,
            body_px: 11,
        },
        skills_style: SkillsStyle::Inline(", "),
        experience_title: ExperienceTitle::Position,
        company_separator: ", ",
        technologies_prefix: None,
        show_project_links: false,
        headings: [
            (SectionKind::Summary, None),
            (SectionKind::Experience, Some("Experience")),
            (SectionKind::Skills, Some("Skills")),
            (SectionKind::Projects, Some("Projects")),
            (SectionKind::Education, Some("Education")),
            (SectionKind::Certifications, Some("Certifications")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!(TemplateId::parse("modern"), TemplateId::Modern);
        assert_eq!(TemplateId::parse("Classic"), TemplateId::Classic);
        assert_eq!(TemplateId::parse(" minimal "), TemplateId::Minimal);
    }

    #[test]
    fn test_unknown_id_falls_back_to_modern() {
        assert_eq!(TemplateId::parse("fancy"), TemplateId::Modern);
        assert_eq!(TemplateId::parse(""), TemplateId::Modern);
    }

    #[test]
    fn test_every_layout_orders_all_sections_once() {
        for id in TemplateId::ALL {
            let layout = id.layout();
            assert_eq!(layout.template, id);
            let unique: HashSet<_> = layout.section_order.iter().collect();
            assert_eq!(unique.len(), 6, "{} repeats a section", id.as_str());
        }
    }

    #[test]
    fn test_minimal_summary_has_no_heading() {
        let layout = minimal_layout();
        assert_eq!(layout.heading(SectionKind::Summary), None);
        assert_eq!(layout.heading(SectionKind::Skills), Some("Skills"));
    }

    #[test]
    fn test_classic_puts_education_before_skills() {
        let order = classic_layout().section_order;
        let edu = order.iter().position(|k| *k == SectionKind::Education).unwrap();
        let skills = order.iter().position(|k| *k == SectionKind::Skills).unwrap();
        assert!(edu < skills);
    }
}
