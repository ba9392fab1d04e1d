use crate::components::widgets;
use crate::icons;
use crate::theme;
use shared::{BlogPost, ContentStore, Project, featured_posts, featured_projects, format, paths};
use zoon::*;

pub fn page(content: &ContentStore) -> impl Element {
    Column::new()
        .s(Width::fill())
        .item(hero(content))
        .item(widgets::page_section(featured_projects_section(content.projects())))
        .item(
            El::new()
                .s(Width::fill())
                .s(Background::new().color_signal(theme::band_background()))
                .child(widgets::page_section(latest_posts_section(content.blog_posts()))),
        )
}

fn hero(content: &ContentStore) -> impl Element {
    let profile = content.personal();
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(24).y(80))
        .update_raw_el(|raw_el| raw_el.style("background", theme::HERO_GRADIENT))
        .child(
            Row::new()
                .multiline()
                .s(Width::fill().max(widgets::CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Gap::both(48))
                .item(
                    Column::new()
                        .s(Width::growable())
                        .s(Gap::new().y(20))
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(48)
                                    .weight(FontWeight::Bold)
                                    .color(theme::ON_ACCENT))
                                .child(format!("Hi, I'm {}", profile.name)),
                        )
                        .item(
                            El::new()
                                .s(Font::new().size(22).color(theme::ON_ACCENT_SOFT))
                                .child(profile.tagline.as_str()),
                        )
                        .item(
                            Paragraph::new()
                                .s(Font::new().size(17).color(theme::ON_ACCENT_SOFT))
                                .content(profile.bio.as_str()),
                        )
                        .item(
                            Row::new()
                                .s(Gap::new().x(16))
                                .item(
                                    Link::new()
                                        .s(Padding::new().x(24).y(12))
                                        .s(RoundedCorners::all(8))
                                        .s(Background::new().color(theme::ON_ACCENT))
                                        .s(Font::new()
                                            .weight(FontWeight::SemiBold)
                                            .color(theme::ACCENT_SOLID))
                                        .label(format!("View My Work {}", icons::ARROW_RIGHT))
                                        .to(paths::PROJECTS),
                                )
                                .item(widgets::social_links(content.social())),
                        ),
                )
                .item(
                    El::new()
                        .s(Align::center())
                        .child(widgets::avatar(&profile.avatar, &profile.name, 256)),
                ),
        )
}

fn section_header(title: &str, view_all_path: &str) -> impl Element {
    Row::new()
        .s(Width::fill())
        .item(widgets::section_title(title))
        .item(
            El::new()
                .s(Align::new().right().center_y())
                .child(widgets::internal_link(
                    &format!("View All {}", icons::ARROW_RIGHT),
                    view_all_path,
                )),
        )
}

fn featured_projects_section(projects: &[Project]) -> impl Element {
    Column::new()
        .s(Gap::new().y(32))
        .item(section_header("Featured Projects", paths::PROJECTS))
        .item(
            Row::new()
                .multiline()
                .s(Gap::both(24))
                .items(featured_projects(projects).into_iter().map(project_summary)),
        )
}

fn project_summary(project: &Project) -> impl Element {
    El::new()
        .s(Width::fill().min(300).max(340))
        .child(widgets::card(
            Column::new()
                .s(Gap::new().y(16))
                .item(widgets::cover_image(&project.image, &project.title))
                .item(widgets::card_title(&project.title))
                .item(widgets::body_text(&project.description))
                .item(
                    Row::new()
                        .multiline()
                        .s(Gap::both(8))
                        .items(project.tags.iter().map(|tag| widgets::project_tag(tag))),
                )
                .item(
                    Row::new()
                        .s(Gap::new().x(16))
                        .item(widgets::external_link("Live Demo", &project.live_url))
                        .item(widgets::external_link("GitHub", &project.github_url)),
                ),
        ))
}

fn latest_posts_section(posts: &[BlogPost]) -> impl Element {
    Column::new()
        .s(Gap::new().y(32))
        .item(section_header("Latest Blog Posts", paths::BLOG))
        .item(
            Row::new()
                .multiline()
                .s(Gap::both(24))
                .items(featured_posts(posts).into_iter().map(post_summary)),
        )
}

fn post_summary(post: &BlogPost) -> impl Element {
    El::new()
        .s(Width::fill().min(300).max(520))
        .child(widgets::card(
            Column::new()
                .s(Gap::new().y(12))
                .item(widgets::muted_text(&format!(
                    "{} {}",
                    icons::CALENDAR,
                    format::short_date(post.date)
                )))
                .item(widgets::card_title(&post.title))
                .item(widgets::body_text(&post.excerpt))
                .item(widgets::internal_link(
                    &format!("Read More {}", icons::ARROW_RIGHT),
                    &paths::blog_post(&post.id),
                )),
        ))
}
