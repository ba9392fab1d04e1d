use crate::components::widgets;
use crate::icons;
use crate::theme;
use shared::{BlogPost, ContentStore, format, paths};
use zoon::*;

pub fn page(content: &ContentStore, post_id: &str) -> impl Element {
    let body = match content.post_by_id(post_id) {
        Some(post) => post_body(post).unify(),
        None => unknown_post(post_id).unify(),
    };
    widgets::page_section(
        Column::new()
            .s(Width::fill().max(800))
            .s(Align::new().center_x())
            .s(Gap::new().y(32))
            .item(widgets::internal_link("← Back to Blog", paths::BLOG))
            .item(body),
    )
}

fn post_body(post: &BlogPost) -> impl Element {
    Column::new()
        .s(Gap::new().y(20))
        .item(
            Row::new()
                .multiline()
                .s(Gap::both(8))
                .items(post.tags.iter().map(|tag| widgets::post_tag(tag)))
                .item(post.featured.then(widgets::featured_badge)),
        )
        .item(widgets::page_title(&post.title))
        .item(widgets::muted_text(&format!(
            "{} {}",
            icons::CALENDAR,
            format::long_date(post.date)
        )))
        .item(
            Paragraph::new()
                .s(Font::new().size(19).color_signal(theme::text_body()))
                .content(post.excerpt.as_str()),
        )
}

fn unknown_post(post_id: &str) -> impl Element {
    Column::new()
        .s(Padding::new().y(48))
        .s(Gap::new().y(12))
        .item(widgets::section_title("Post not found"))
        .item(widgets::body_text(&format!(
            "There is no post with the id \"{post_id}\"."
        )))
}
