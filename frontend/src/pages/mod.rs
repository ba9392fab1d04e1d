pub mod about;
pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod skills;
