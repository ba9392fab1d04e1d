// Glyph tables for the icon kinds the content can reference.

use shared::{CategoryIcon, SkillTier, SocialIcon};

pub fn social_glyph(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::Github => "GH",
        SocialIcon::Linkedin => "in",
        SocialIcon::Twitter => "𝕏",
        SocialIcon::Mail => "✉",
    }
}

pub fn category_glyph(icon: CategoryIcon) -> &'static str {
    match icon {
        CategoryIcon::Code => "</>",
        CategoryIcon::Globe => "🌐",
        CategoryIcon::Server => "🖥",
        CategoryIcon::Database => "🗄",
        CategoryIcon::Wrench => "🔧",
        CategoryIcon::Brain => "🧠",
    }
}

pub fn tier_color(tier: SkillTier) -> &'static str {
    match tier {
        SkillTier::Expert => "rgb(34, 197, 94)",
        SkillTier::Advanced => "rgb(59, 130, 246)",
        SkillTier::Proficient => "rgb(234, 179, 8)",
        SkillTier::Familiar => "rgb(156, 163, 175)",
    }
}

pub const CALENDAR: &str = "📅";
pub const SEARCH: &str = "🔍";
pub const PHONE: &str = "📞";
pub const LOCATION: &str = "📍";
pub const MAIL: &str = "✉";
pub const SEND: &str = "➤";
pub const CHECK: &str = "✔";
pub const ARROW_RIGHT: &str = "→";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_social_icon_has_a_visible_glyph() {
        for icon in [
            SocialIcon::Github,
            SocialIcon::Linkedin,
            SocialIcon::Twitter,
            SocialIcon::Mail,
        ] {
            assert!(!social_glyph(icon).trim().is_empty(), "{icon:?}");
        }
        assert_eq!(social_glyph(SocialIcon::Github), "GH");
    }

    #[test]
    fn test_every_category_icon_has_a_visible_glyph() {
        for icon in [
            CategoryIcon::Code,
            CategoryIcon::Globe,
            CategoryIcon::Server,
            CategoryIcon::Database,
            CategoryIcon::Wrench,
            CategoryIcon::Brain,
        ] {
            assert!(!category_glyph(icon).trim().is_empty(), "{icon:?}");
        }
    }
}
