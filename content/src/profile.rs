//! Personal profile content: identity, experience timeline, skills,
//! certifications and contact links.

use folio_types::Link;

use crate::Localizer;

const EXPERIENCE_KEYS: &[&str] = &["nimbus", "northwind", "meridian"];

const SKILL_GROUPS: &[(&str, &[&str])] = &[
    (
        "frontend",
        &["React", "TypeScript", "Next.js", "Tailwind CSS"],
    ),
    ("backend", &["Rust", "Go", "Java", "Node.js", "PostgreSQL"]),
    ("cloud", &["AWS", "Kubernetes", "Terraform", "Kafka"]),
    ("iot", &["RFID", "MQTT", "Edge gateways", "BLE"]),
];

const CONTACT_LINKS: &[(&str, &str)] = &[
    ("email", "mailto:hello@folio.dev"),
    ("github", "https://github.com/folio-dev"),
    ("linkedin", "https://www.linkedin.com/in/folio-dev"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    /// Stable, language independent key (`backend`, `cloud`, ...).
    pub key: &'static str,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<String>,
    pub contact: Vec<Link>,
}

impl Profile {
    #[must_use]
    pub fn localized(localizer: &dyn Localizer) -> Self {
        let experience = EXPERIENCE_KEYS
            .iter()
            .map(|key| ExperienceEntry {
                company: localizer
                    .text(&format!("experience.{key}.company"))
                    .into_owned(),
                role: localizer.text(&format!("experience.{key}.role")).into_owned(),
                period: localizer
                    .text(&format!("experience.{key}.period"))
                    .into_owned(),
                highlights: localizer.list(&format!("experience.{key}.highlights")),
            })
            .collect();

        let skills = SKILL_GROUPS
            .iter()
            .map(|(key, items)| SkillGroup {
                key: *key,
                title: localizer.text(&format!("skills.{key}")).into_owned(),
                items: items.iter().map(ToString::to_string).collect(),
            })
            .collect();

        let contact = CONTACT_LINKS
            .iter()
            .map(|(key, url)| Link::new(localizer.text(&format!("contact.{key}")), *url))
            .collect();

        Self {
            name: localizer.text("profile.name").into_owned(),
            role: localizer.text("profile.role").into_owned(),
            location: localizer.text("profile.location").into_owned(),
            summary: localizer.text("profile.summary").into_owned(),
            experience,
            skills,
            certifications: localizer.list("certifications.items"),
            contact,
        }
    }

    /// Skill group by key or by its localized title, case-insensitively.
    #[must_use]
    pub fn skill_group(&self, name: &str) -> Option<&SkillGroup> {
        self.skills.iter().find(|group| {
            group.key.eq_ignore_ascii_case(name) || group.title.eq_ignore_ascii_case(name)
        })
    }
}
