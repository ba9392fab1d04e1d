//! List filtering for the blog, projects and skills screens.
//!
//! Every filter is a single stable pass: the result keeps the source order and
//! is recomputed from scratch whenever a parameter changes.

use crate::content::{BlogPost, Project, Skill};
use std::fmt;

/// Maximum number of featured projects shown on the home screen.
pub const FEATURED_PROJECT_LIMIT: usize = 3;
/// Maximum number of featured posts shown on the home screen.
pub const FEATURED_POST_LIMIT: usize = 2;

// ===== SELECTION =====

/// A tag or category selector. `All` is the `"all"` sentinel offered first in
/// every selector list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub const ALL_KEY: &'static str = "all";

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Key used in selector values; `"all"` for the sentinel.
    pub fn key(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Only(value) => value,
        }
    }

    fn admits(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }
}

impl From<&str> for Selection {
    fn from(key: &str) -> Self {
        if key == Self::ALL_KEY {
            Self::All
        } else {
            Self::Only(key.to_string())
        }
    }
}

impl From<String> for Selection {
    fn from(key: String) -> Self {
        if key == Self::ALL_KEY {
            Self::All
        } else {
            Self::Only(key)
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ===== TRAITS =====

/// Records carrying a set of free-text tags.
pub trait Tagged {
    fn tags(&self) -> &[String];

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|own| own == tag)
    }
}

/// Records whose text fields take part in free-text search.
pub trait Searchable {
    fn search_fields(&self) -> [&str; 2];
}

impl Tagged for BlogPost {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.excerpt]
    }
}

impl Tagged for Project {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.description]
    }
}

// ===== QUERIES =====

/// Search text plus tag selector, as driven by the blog and projects screens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagQuery {
    pub search_term: String,
    pub selected_tag: Selection,
}

impl TagQuery {
    pub fn new(search_term: impl Into<String>, selected_tag: impl Into<Selection>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_tag: selected_tag.into(),
        }
    }

    pub fn matches<T: Tagged + Searchable>(&self, item: &T) -> bool {
        let needle = self.search_term.to_lowercase();
        matches_search(item, &needle) && matches_tag(item, &self.selected_tag)
    }
}

fn matches_search<T: Searchable>(item: &T, lowercase_needle: &str) -> bool {
    lowercase_needle.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(lowercase_needle))
}

fn matches_tag<T: Tagged>(item: &T, selected_tag: &Selection) -> bool {
    match selected_tag {
        Selection::All => true,
        Selection::Only(tag) => item.has_tag(tag),
    }
}

/// Items matching `query`, in source order.
pub fn filter_tagged<'a, T: Tagged + Searchable>(items: &'a [T], query: &TagQuery) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}

pub fn filter_posts<'a>(posts: &'a [BlogPost], query: &TagQuery) -> Vec<&'a BlogPost> {
    filter_tagged(posts, query)
}

pub fn filter_projects<'a>(projects: &'a [Project], query: &TagQuery) -> Vec<&'a Project> {
    filter_tagged(projects, query)
}

/// Skills whose category equals the selector exactly (case-sensitive).
pub fn filter_skills<'a>(skills: &'a [Skill], selected_category: &Selection) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|skill| selected_category.admits(&skill.category))
        .collect()
}

// ===== SELECTOR UNIVERSES =====

/// `All` followed by every distinct tag, in first-seen order.
pub fn tag_universe<T: Tagged>(items: &[T]) -> Vec<Selection> {
    universe(items.iter().flat_map(|item| item.tags().iter().map(String::as_str)))
}

/// `All` followed by every distinct skill category, in first-seen order.
pub fn category_universe(skills: &[Skill]) -> Vec<Selection> {
    universe(skills.iter().map(|skill| skill.category.as_str()))
}

fn universe<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Selection> {
    let mut selections = vec![Selection::All];
    for value in values {
        if !selections.iter().any(|seen| matches!(seen, Selection::Only(v) if v == value)) {
            selections.push(Selection::Only(value.to_string()));
        }
    }
    selections
}

// ===== FEATURED =====

pub fn featured_projects(projects: &[Project]) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| project.featured)
        .take(FEATURED_PROJECT_LIMIT)
        .collect()
}

pub fn featured_posts(posts: &[BlogPost]) -> Vec<&BlogPost> {
    posts
        .iter()
        .filter(|post| post.featured)
        .take(FEATURED_POST_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(id: &str, title: &str, excerpt: &str, tags: &[&str], featured: bool) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured,
        }
    }

    fn project(id: &str, featured: bool) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            image: String::new(),
            tags: vec!["Web".to_string()],
            live_url: String::new(),
            github_url: String::new(),
            featured,
        }
    }

    fn sample_posts() -> Vec<BlogPost> {
        vec![
            post("a", "Learning Rust", "Ownership explained", &["Rust", "Learning"], true),
            post("b", "React Patterns", "Hooks and state", &["React"], false),
            post("c", "Databases", "Why rust-postgres is neat", &["Database", "Rust"], true),
            post("d", "Docker basics", "Containers for everyone", &["DevOps", "Learning"], true),
        ]
    }

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|item| id(item).to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, &TagQuery::default());
        assert_eq!(ids(&filtered, |p| &p.id), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let posts = sample_posts();
        for term in ["rust", "RUST", "Rust"] {
            let filtered = filter_posts(&posts, &TagQuery::new(term, Selection::All));
            // "c" matches through its excerpt, not its title
            assert_eq!(ids(&filtered, |p| &p.id), ["a", "c"], "term {term:?}");
        }

        let partial = filter_posts(&posts, &TagQuery::new("ook", Selection::All));
        assert_eq!(ids(&partial, |p| &p.id), ["b"]);
    }

    #[test]
    fn test_tag_and_search_combine() {
        let posts = sample_posts();

        let by_tag = filter_posts(&posts, &TagQuery::new("", "Learning"));
        assert_eq!(ids(&by_tag, |p| &p.id), ["a", "d"]);

        let both = filter_posts(&posts, &TagQuery::new("docker", "Learning"));
        assert_eq!(ids(&both, |p| &p.id), ["d"]);

        let none = filter_posts(&posts, &TagQuery::new("react", "Learning"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let posts = sample_posts();
        let queries = [
            TagQuery::new("", "Rust"),
            TagQuery::new("s", Selection::All),
            TagQuery::new("e", "Learning"),
            TagQuery::new("zzz", Selection::All),
        ];
        for query in &queries {
            let filtered = filter_posts(&posts, query);
            let positions: Vec<usize> = filtered
                .iter()
                .map(|kept| posts.iter().position(|p| p.id == kept.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {query:?}");
        }
    }

    #[test]
    fn test_tag_universe_starts_with_all_and_dedupes() {
        let posts = sample_posts();
        let tags: Vec<String> = tag_universe(&posts).iter().map(|s| s.key().to_string()).collect();
        assert_eq!(tags, ["all", "Rust", "Learning", "React", "Database", "DevOps"]);

        let empty: Vec<BlogPost> = Vec::new();
        assert_eq!(tag_universe(&empty), vec![Selection::All]);
    }

    #[test]
    fn test_skill_filter_uses_exact_category() {
        let skills = vec![
            Skill::new("React", "Frontend", 92),
            Skill::new("Figma", "Frontend Dev", 60),
            Skill::new("Node.js", "Backend", 87),
            Skill::new("Vue", "frontend", 50),
        ];

        assert_eq!(filter_skills(&skills, &Selection::All).len(), 4);

        let frontend = filter_skills(&skills, &Selection::from("Frontend"));
        assert_eq!(ids(&frontend, |s| &s.name), ["React"]);

        assert!(filter_skills(&skills, &Selection::from("Front")).is_empty());
    }

    #[test]
    fn test_category_universe() {
        let skills = vec![
            Skill::new("React", "Frontend", 92),
            Skill::new("Node.js", "Backend", 87),
            Skill::new("CSS", "Frontend", 88),
        ];
        assert_eq!(
            category_universe(&skills),
            vec![
                Selection::All,
                Selection::Only("Frontend".to_string()),
                Selection::Only("Backend".to_string()),
            ]
        );
    }

    #[test]
    fn test_featured_projects_keeps_first_three_in_order() {
        let projects = vec![
            project("1", true),
            project("2", false),
            project("3", true),
            project("4", true),
            project("5", true),
            project("6", true),
        ];
        let featured = featured_projects(&projects);
        assert_eq!(ids(&featured, |p| &p.id), ["1", "3", "4"]);
    }

    #[test]
    fn test_featured_posts_limit() {
        let posts = sample_posts();
        let featured = featured_posts(&posts);
        assert_eq!(ids(&featured, |p| &p.id), ["a", "c"]);
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(Selection::from("all"), Selection::All);
        assert_eq!(Selection::from("Rust".to_string()), Selection::Only("Rust".to_string()));
        assert_eq!(Selection::Only("Rust".to_string()).to_string(), "Rust");
        assert_eq!(Selection::All.key(), "all");
    }

    #[test]
    fn test_projects_share_the_tag_query() {
        let mut projects = vec![project("1", false), project("2", false)];
        projects[1].tags = vec!["Rust".to_string()];
        projects[1].description = "A fast CLI".to_string();

        let by_tag = filter_projects(&projects, &TagQuery::new("", "Rust"));
        assert_eq!(ids(&by_tag, |p| &p.id), ["2"]);

        let by_description = filter_projects(&projects, &TagQuery::new("cli", Selection::All));
        assert_eq!(ids(&by_description, |p| &p.id), ["2"]);

        assert!(TagQuery::new("", "Web").matches(&projects[0]));
    }

    #[test]
    fn test_filter_keeps_exactly_the_matching_items() {
        let posts = sample_posts();
        let query = TagQuery::new("RUST", "Rust");
        let kept = filter_posts(&posts, &query);
        let expected: Vec<&BlogPost> = posts.iter().filter(|post| query.matches(*post)).collect();
        assert_eq!(kept, expected);
        assert_eq!(ids(&kept, |p| &p.id), ["a", "c"]);
    }
}
