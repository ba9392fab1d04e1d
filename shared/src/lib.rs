// ===== CONTENT STORE =====

pub mod content;
pub use content::{
    BUNDLED_CONTENT, BlogPost, ContentError, ContentStore, EducationEntry, ExperienceEntry,
    PersonalProfile, Project, SiteContent, Skill, SocialIcon, SocialLink,
};

// ===== FILTER ENGINE =====

pub mod filter;
pub use filter::{
    FEATURED_POST_LIMIT, FEATURED_PROJECT_LIMIT, Searchable, Selection, TagQuery, Tagged,
    category_universe, featured_posts, featured_projects, filter_posts, filter_projects,
    filter_skills, tag_universe,
};

// ===== CONTACT FORM =====

pub mod contact;
pub use contact::{
    CONFIRMATION_DISPLAY_MS, ContactField, ContactFields, ContactForm, SUBMIT_DELAY_MS,
    SubmissionPhase, SubmitRejected,
};

// ===== VIEW HELPERS =====

pub mod format;
pub mod presentation;
pub use presentation::{CategoryIcon, SkillTier};

// ===== NAVIGATION =====

pub mod paths;
