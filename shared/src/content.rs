use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Site content compiled into every binary that depends on `shared`.
pub const BUNDLED_CONTENT: &str = include_str!("../content/content.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

// ===== DOCUMENT =====

/// The whole content document. Field names follow the JSON keys, so any
/// document with `personal`, `experience`, `education`, `skills`, `projects`,
/// `blogPosts` and `social` at the top level loads unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub personal: PersonalProfile,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
    pub social: Vec<SocialLink>,
}

impl SiteContent {
    pub fn from_json(document: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PersonalProfile {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    /// Image URL, rendered verbatim.
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl PersonalProfile {
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: SocialIcon,
}

/// Known social icons. Anything else in the document falls back to `Mail`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    #[serde(other)]
    Mail,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    pub category: String,
    level: i64,
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    pub fn new(name: impl Into<String>, category: impl Into<String>, level: i64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            level,
        }
    }

    /// Proficiency in percent, clamped to `0..=100`.
    pub fn level(&self) -> u8 {
        self.level.clamp(0, i64::from(Self::MAX_LEVEL)) as u8
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

// ===== STORE =====

/// Read-only handle to the loaded content. Cloning shares the same document.
#[derive(Debug, Clone)]
pub struct ContentStore {
    content: Arc<SiteContent>,
}

impl ContentStore {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    pub fn load_bundled() -> Result<Self, ContentError> {
        SiteContent::bundled().map(Self::new)
    }

    pub fn personal(&self) -> &PersonalProfile {
        &self.content.personal
    }

    pub fn social(&self) -> &[SocialLink] {
        &self.content.social
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.content.experience
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.content.education
    }

    pub fn skills(&self) -> &[Skill] {
        &self.content.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.content.projects
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.content.blog_posts
    }

    pub fn post_by_id(&self, id: &str) -> Option<&BlogPost> {
        self.content.blog_posts.iter().find(|post| post.id == id)
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.content.projects.iter().find(|project| project.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const MINIMAL_DOCUMENT: &str = r#"{
        "personal": {
            "name": "Sam Lee", "tagline": "Dev", "bio": "Bio", "avatar": "a.png",
            "email": "sam@example.com", "phone": "+1 555", "location": "Berlin"
        },
        "experience": [],
        "education": [],
        "skills": [{ "name": "Go", "category": "Backend", "level": 140 }],
        "projects": [],
        "blogPosts": [{
            "id": "p1", "title": "Hello", "excerpt": "World",
            "date": "2024-02-29", "tags": ["Intro"], "featured": true
        }],
        "social": [
            { "name": "Mastodon", "url": "https://example.social/@sam", "icon": "mastodon" },
            { "name": "GitHub", "url": "https://github.com/sam", "icon": "github" }
        ]
    }"#;

    #[test]
    fn test_bundled_content_loads() {
        let store = ContentStore::load_bundled().expect("bundled content must parse");
        assert!(!store.personal().name.is_empty());
        assert!(!store.blog_posts().is_empty());
        assert!(!store.skills().is_empty());
    }

    #[test]
    fn test_bundled_ids_are_unique() {
        let store = ContentStore::load_bundled().unwrap();

        let post_ids: HashSet<_> = store.blog_posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(post_ids.len(), store.blog_posts().len());

        let project_ids: HashSet<_> = store.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(project_ids.len(), store.projects().len());
    }

    #[test]
    fn test_unknown_social_icon_falls_back_to_mail() {
        let content = SiteContent::from_json(MINIMAL_DOCUMENT).unwrap();
        assert_eq!(content.social[0].icon, SocialIcon::Mail);
        assert_eq!(content.social[1].icon, SocialIcon::Github);
    }

    #[test]
    fn test_skill_level_is_clamped() {
        let content = SiteContent::from_json(MINIMAL_DOCUMENT).unwrap();
        assert_eq!(content.skills[0].level(), 100);
        assert_eq!(Skill::new("Rust", "Programming Languages", 75).level(), 75);
    }

    #[test]
    fn test_negative_skill_level_loads_as_zero() {
        let document = MINIMAL_DOCUMENT.replace(r#""level": 140"#, r#""level": -5"#);
        let content = SiteContent::from_json(&document).unwrap();
        assert_eq!(content.skills[0].level(), 0);
        assert_eq!(Skill::new("Vim", "Tools", -1).level(), 0);
    }

    #[test]
    fn test_post_date_parses_as_calendar_date() {
        let content = SiteContent::from_json(MINIMAL_DOCUMENT).unwrap();
        assert_eq!(
            content.blog_posts[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let store = ContentStore::new(SiteContent::from_json(MINIMAL_DOCUMENT).unwrap());
        assert_eq!(store.post_by_id("p1").map(|p| p.title.as_str()), Some("Hello"));
        assert!(store.post_by_id("missing").is_none());
        assert!(store.project_by_id("p1").is_none());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let result = SiteContent::from_json(r#"{ "personal": {} }"#);
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_contact_urls() {
        let store = ContentStore::new(SiteContent::from_json(MINIMAL_DOCUMENT).unwrap());
        assert_eq!(store.personal().mailto_url(), "mailto:sam@example.com");
        assert_eq!(store.personal().tel_url(), "tel:+1 555");
    }
}
