//! Fixed advice shown for a section when feedback carries no tip for it.

pub const PERSONAL_INFO: &[&str] = &[
    "Ensure your contact information is professional and up-to-date",
    "Include a professional email address",
    "Add your LinkedIn profile if available",
];

pub const SUMMARY: &[&str] = &[
    "Write a compelling 2-3 sentence summary highlighting your key skills and achievements",
    "Focus on what makes you unique and valuable to employers",
    "Avoid generic statements and include specific accomplishments",
];

pub const EXPERIENCE: &[&str] = &[
    "Use action verbs to start each bullet point",
    "Quantify your achievements with numbers and percentages",
    "Focus on results and impact rather than just responsibilities",
];

pub const EDUCATION: &[&str] = &[
    "List your education in reverse chronological order",
    "Include relevant coursework if you're a recent graduate",
];

pub const SKILLS: &[&str] = &[
    "Include both technical and soft skills relevant to your target role",
    "List skills in order of proficiency or relevance",
    "Use keywords from job descriptions you're targeting",
];

pub const PROJECTS: &[&str] = &[
    "Showcase projects that demonstrate relevant skills",
    "Include links to live demos and source code when possible",
];

pub const CERTIFICATIONS: &[&str] = &[
    "List industry-relevant certifications",
    "Include expiration dates if applicable",
];
