//! Literal site content.
//!
//! Everything the sections render lives here. [`Project`] is serializable so a
//! future data source only has to produce the same shape.

use serde::{Deserialize, Serialize};

pub const OWNER: &str = "Phulchand Kumar";
pub const HEADLINE: &str = "Computer Science Student & Web Developer";
pub const TAGLINE: &str =
    "Passionate about creating beautiful, functional web applications with clean, efficient code.";
pub const FOOTER_TAGLINE: &str = "Web Developer & Computer Science Student";
pub const PROFILE_IMAGE: &str = "/profile.svg";
/// Placeholder until a PDF is published under `public/`.
pub const RESUME_PDF: &str = "#";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a third-year Computer Science student at Chandigarh University with a passion for web development and design. I love turning complex problems into simple, beautiful, and intuitive solutions.",
    "When I'm not coding, you can find me hiking, reading sci-fi novels, or experimenting with new recipes in the kitchen.",
];

pub const CONTACT_BLURB: &str =
    "I'm currently looking for internship opportunities for Summer 2025. Feel free to reach out!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub title: &'static str,
    pub detail: &'static str,
    pub note: Option<&'static str>,
    pub accent: &'static str,
}

pub const EDUCATION: [EducationEntry; 2] = [
    EducationEntry {
        title: "Chandigarh University",
        detail: "B.E in Computer Science",
        note: Some("2023 - Present | GPA: 8.28/10.0"),
        accent: "border-blue-500",
    },
    EducationEntry {
        title: "Relevant Coursework",
        detail: "Web Development, Data Structures, Algorithms, Database Systems, Human-Computer Interaction",
        note: None,
        accent: "border-purple-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub badge_color: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Languages",
        icon: "fa-code",
        icon_color: "text-blue-500",
        badge_color: "bg-blue-100 text-blue-800",
        skills: &["JavaScript", "Python", "Java", "C++", "HTML/CSS", "SQL"],
    },
    SkillGroup {
        title: "Frontend",
        icon: "fa-paint-brush",
        icon_color: "text-purple-500",
        badge_color: "bg-purple-100 text-purple-800",
        skills: &["React", "Next.js", "Tailwind CSS", "Bootstrap", "SASS"],
    },
    SkillGroup {
        title: "Backend",
        icon: "fa-server",
        icon_color: "text-green-500",
        badge_color: "bg-green-100 text-green-800",
        skills: &["Node.js", "Express", "Django", "MongoDB", "PostgreSQL"],
    },
    SkillGroup {
        title: "Tools",
        icon: "fa-tools",
        icon_color: "text-yellow-500",
        badge_color: "bg-yellow-100 text-yellow-800",
        skills: &["Git", "VS Code", "Figma", "Postman", "Docker"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub live_link: String,
    pub source_link: String,
    /// Font Awesome icon name, e.g. `fa-chart-line`.
    pub icon: String,
    /// Tailwind gradient stops, e.g. `from-blue-400 to-purple-500`.
    pub gradient: String,
}

impl Project {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        tags: &[&str],
        icon: &str,
        gradient: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            live_link: "#".to_string(),
            source_link: "#".to_string(),
            icon: icon.to_string(),
            gradient: gradient.to_string(),
        }
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project::new(
            "1",
            "StudyBuddy - Learning Platform",
            "A full-stack web application for students to create and share study materials, featuring real-time collaboration.",
            &["React", "Node.js", "MongoDB"],
            "fa-laptop-code",
            "from-blue-400 to-purple-500",
        ),
        Project::new(
            "2",
            "EcoMarket - Sustainable Shopping",
            "An e-commerce platform for sustainable products with carbon footprint tracking and eco-friendly recommendations.",
            &["Next.js", "Django", "PostgreSQL"],
            "fa-shopping-cart",
            "from-green-400 to-blue-500",
        ),
        Project::new(
            "3",
            "StockVisualizer",
            "Interactive stock market visualization tool with real-time data from financial APIs and customizable dashboards.",
            &["TypeScript", "Firebase", "D3.js"],
            "fa-chart-line",
            "from-purple-400 to-pink-500",
        ),
    ]
}

/// Badge colors for project tags. Unknown tags are gray.
pub fn tag_color(tag: &str) -> &'static str {
    match tag.to_lowercase().as_str() {
        "react" | "next.js" | "typescript" => "bg-blue-100 text-blue-800",
        "node.js" | "postgresql" => "bg-green-100 text-green-800",
        "mongodb" | "d3.js" => "bg-purple-100 text-purple-800",
        "django" => "bg-yellow-100 text-yellow-800",
        "firebase" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Full class list for a project tag badge.
pub fn tag_badge_class(tag: &str) -> String {
    format!("{} px-2 py-1 rounded-full text-xs", tag_color(tag))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
}

pub const RESUME_LOCATION: &str = "Chandigarh University, IND";
pub const RESUME_ROLE: &str = "Computer Science Student";

pub const RESUME_EDUCATION: [ResumeEntry; 1] = [ResumeEntry {
    title: "Chandigarh University",
    organization: "B.E in Computer Science",
    period: "2023 - Present",
}];

pub const RESUME_EXPERIENCE: [ResumeEntry; 2] = [
    ResumeEntry {
        title: "Web Development Intern",
        organization: "freelance.com",
        period: "Summer 2025",
    },
    ResumeEntry {
        title: "Teaching Assistant",
        organization: "Chandigarh University CS Department",
        period: "2022 - Present",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub text: &'static str,
    pub external: bool,
}

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        icon: "fas fa-envelope",
        href: "mailto:phulchand1023@gmail.com",
        text: "phulchand1023@gmail.com",
        external: false,
    },
    ContactLink {
        label: "LinkedIn",
        icon: "fab fa-linkedin-in",
        href: "https://linkedin.com/in/phulchand1023",
        text: "linkedin.com/in/phulchand1023",
        external: true,
    },
    ContactLink {
        label: "GitHub",
        icon: "fab fa-github",
        href: "https://github.com/phulchand1023",
        text: "github.com/phulchand1023",
        external: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        icon: "fab fa-github",
        href: "https://github.com/phulchand1023",
    },
    SocialLink {
        label: "LinkedIn",
        icon: "fab fa-linkedin-in",
        href: "https://linkedin.com/in/phulchand1023",
    },
    SocialLink {
        label: "Twitter",
        icon: "fab fa-twitter",
        href: "#",
    },
    SocialLink {
        label: "Instagram",
        icon: "fab fa-instagram",
        href: "#",
    },
];

pub fn copyright_year() -> &'static str {
    env!("BUILD_YEAR")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let projects = projects();
        let ids = projects.iter().map(|p| p.id.as_str()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn test_tag_color() {
        assert_eq!(tag_color("React"), "bg-blue-100 text-blue-800");
        assert_eq!(tag_color("REACT"), tag_color("react"));
        assert_eq!(tag_color("Firebase"), "bg-red-100 text-red-800");
        assert_eq!(tag_color("Rust"), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_tag_badge_class() {
        assert_eq!(
            tag_badge_class("Django"),
            "bg-yellow-100 text-yellow-800 px-2 py-1 rounded-full text-xs"
        );
        // the tag is only borrowed, so it can still be rendered afterwards
        let tag = String::from("D3.js");
        let class = tag_badge_class(&tag);
        assert!(class.starts_with(tag_color(&tag)));
        assert_eq!(tag, "D3.js");
    }

    #[test]
    fn test_every_project_tag_has_a_color() {
        for project in projects() {
            for tag in &project.tags {
                assert_ne!(tag_color(tag), "bg-gray-100 text-gray-800", "{tag}");
            }
        }
    }

    #[test]
    fn test_project_schema() {
        let project = &projects()[2];
        let json = serde_json::to_value(project).unwrap();
        for key in [
            "id",
            "title",
            "description",
            "tags",
            "liveLink",
            "sourceLink",
            "icon",
            "gradient",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["tags"], serde_json::json!(["TypeScript", "Firebase", "D3.js"]));

        let parsed: Project = serde_json::from_value(json).unwrap();
        assert_eq!(&parsed, project);
    }

    #[test]
    fn test_skill_groups_not_empty() {
        assert!(SKILL_GROUPS.iter().all(|g| !g.skills.is_empty()));
    }

    #[test]
    fn test_copyright_year_is_numeric() {
        assert!(copyright_year().parse::<u16>().is_ok());
    }
}
