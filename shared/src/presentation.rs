//! Static lookup tables used by the views. Every table is total: unknown
//! input maps to an explicit fallback.

use crate::content::Skill;

/// Icon shown next to a skill, chosen by its category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryIcon {
    Code,
    Globe,
    Server,
    Database,
    Wrench,
    Brain,
}

impl CategoryIcon {
    pub fn for_category(category: &str) -> Self {
        match category {
            "Programming Languages" => Self::Code,
            "Frontend" => Self::Globe,
            "Backend" => Self::Server,
            "Database" => Self::Database,
            "Cloud & DevOps" => Self::Wrench,
            _ => Self::Brain,
        }
    }
}

/// Proficiency band of a skill level, used to color its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillTier {
    Familiar,
    Proficient,
    Advanced,
    Expert,
}

impl SkillTier {
    pub fn for_level(level: u8) -> Self {
        match level {
            90.. => Self::Expert,
            80..=89 => Self::Advanced,
            70..=79 => Self::Proficient,
            _ => Self::Familiar,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Proficient => "Proficient",
            Self::Familiar => "Familiar",
        }
    }
}

impl Skill {
    pub fn tier(&self) -> SkillTier {
        SkillTier::for_level(self.level())
    }

    pub fn icon(&self) -> CategoryIcon {
        CategoryIcon::for_category(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_icons() {
        assert_eq!(CategoryIcon::for_category("Programming Languages"), CategoryIcon::Code);
        assert_eq!(CategoryIcon::for_category("Frontend"), CategoryIcon::Globe);
        assert_eq!(CategoryIcon::for_category("Backend"), CategoryIcon::Server);
        assert_eq!(CategoryIcon::for_category("Database"), CategoryIcon::Database);
        assert_eq!(CategoryIcon::for_category("Cloud & DevOps"), CategoryIcon::Wrench);
        assert_eq!(CategoryIcon::for_category("Design"), CategoryIcon::Brain);
        assert_eq!(CategoryIcon::for_category("frontend"), CategoryIcon::Brain);
    }

    #[test]
    fn test_skill_tier_boundaries() {
        assert_eq!(SkillTier::for_level(100), SkillTier::Expert);
        assert_eq!(SkillTier::for_level(90), SkillTier::Expert);
        assert_eq!(SkillTier::for_level(89), SkillTier::Advanced);
        assert_eq!(SkillTier::for_level(80), SkillTier::Advanced);
        assert_eq!(SkillTier::for_level(79), SkillTier::Proficient);
        assert_eq!(SkillTier::for_level(70), SkillTier::Proficient);
        assert_eq!(SkillTier::for_level(69), SkillTier::Familiar);
        assert_eq!(SkillTier::for_level(0), SkillTier::Familiar);
    }

    #[test]
    fn test_skill_helpers() {
        let skill = Skill::new("Docker", "Cloud & DevOps", 250);
        assert_eq!(skill.tier(), SkillTier::Expert);
        assert_eq!(skill.icon(), CategoryIcon::Wrench);
        assert_eq!(SkillTier::Proficient.label(), "Proficient");
    }
}
