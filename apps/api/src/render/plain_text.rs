use std::fmt::Write as _;

use crate::models::resume::ResumeData;
use crate::render::dates::format_range;
use crate::render::tree::visible_lines;

/// Plain-text rendition for download and clipboard use.
///
/// Fixed section order independent of any template. The contact line always
/// carries email and phone, location only when set. Sections with nothing to
/// show are left out, and every section is followed by one blank line.
pub fn render_plain_text(data: &ResumeData) -> String {
    let mut out = String::new();
    let info = &data.personal_info;

    let _ = writeln!(out, "{}", info.full_name);
    let _ = write!(out, "{} | {}", info.email, info.phone);
    if !info.location.is_empty() {
        let _ = write!(out, " | {}", info.location);
    }
    out.push_str("\n\n");

    if !data.summary.is_empty() {
        let _ = writeln!(out, "PROFESSIONAL SUMMARY\n{}\n", data.summary);
    }

    if !data.experience.is_empty() {
        out.push_str("PROFESSIONAL EXPERIENCE\n");
        for exp in &data.experience {
            let _ = writeln!(out, "{} - {}", exp.position, exp.company);
            let _ = writeln!(out, "{}", format_range(&exp.start_date, &exp.end_date, exp.current));
            for line in visible_lines(&exp.description) {
                let _ = writeln!(out, "• {line}");
            }
            out.push('\n');
        }
    }

    if !data.skills.is_empty() {
        let _ = writeln!(out, "SKILLS\n{}\n", data.skills.join(", "));
    }

    if !data.education.is_empty() {
        out.push_str("EDUCATION\n");
        for edu in &data.education {
            let _ = writeln!(out, "{} in {}", edu.degree, edu.field);
            let _ = writeln!(out, "{}", edu.institution);
            let _ = writeln!(out, "{}\n", format_range(&edu.start_date, &edu.end_date, false));
        }
    }

    if !data.projects.is_empty() {
        out.push_str("PROJECTS\n");
        for project in &data.projects {
            let _ = writeln!(out, "{}", project.name);
            if !project.description.trim().is_empty() {
                let _ = writeln!(out, "{}", project.description);
            }
            let technologies = visible_lines(&project.technologies);
            if !technologies.is_empty() {
                let _ = writeln!(out, "Technologies: {}", technologies.join(", "));
            }
            out.push('\n');
        }
    }

    let certifications = visible_lines(&data.certifications);
    if !certifications.is_empty() {
        out.push_str("CERTIFICATIONS\n");
        for cert in certifications {
            let _ = writeln!(out, "• {cert}");
        }
        out.push('\n');
    }

    out
}
