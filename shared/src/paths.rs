// Link targets for every screen. The frontend router parses the same paths.

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const SKILLS: &str = "/skills";
pub const PROJECTS: &str = "/projects";
pub const BLOG: &str = "/blog";
pub const CONTACT: &str = "/contact";

pub fn blog_post(post_id: &str) -> String {
    format!("{BLOG}/{post_id}")
}

/// Entries shown in the header, in display order.
pub const NAVIGATION: [(&str, &str); 6] = [
    ("Home", HOME),
    ("About", ABOUT),
    ("Skills", SKILLS),
    ("Projects", PROJECTS),
    ("Blog", BLOG),
    ("Contact", CONTACT),
];

/// Whether a header entry should be highlighted for the current path.
/// Post pages keep the Blog entry active.
pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    if entry_path == HOME {
        return current_path == HOME || current_path.is_empty();
    }
    current_path == entry_path
        || current_path
            .strip_prefix(entry_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_paths() {
        let paths: Vec<&str> = NAVIGATION.iter().map(|(_, path)| *path).collect();
        assert_eq!(
            paths,
            vec!["/", "/about", "/skills", "/projects", "/blog", "/contact"]
        );
    }

    #[test]
    fn test_blog_post_path() {
        assert_eq!(blog_post("learning-rust"), "/blog/learning-rust");
    }

    #[test]
    fn test_active_entry() {
        assert!(is_active(HOME, "/"));
        assert!(!is_active(HOME, "/about"));
        assert!(is_active(BLOG, "/blog"));
        assert!(is_active(BLOG, "/blog/learning-rust"));
        assert!(!is_active(BLOG, "/blogroll"));
        assert!(!is_active(SKILLS, "/"));
    }
}
