use crate::components::widgets;
use crate::dataflow::Atom;
use crate::debug_utils::DEBUG_FILTERS;
use crate::icons;
use crate::theme;
use shared::{BlogPost, ContentStore, Selection, TagQuery, filter_posts, format, paths, tag_universe};
use zoon::*;

/// Search text and tag selection of the blog screen. Both reset whenever the
/// screen is mounted again.
#[derive(Clone, Default)]
struct BlogFilters {
    search_term: Atom<String>,
    selected_tag: Atom<Selection>,
}

impl BlogFilters {
    fn query_signal(&self) -> impl Signal<Item = TagQuery> + use<> {
        map_ref! {
            let search_term = self.search_term.signal(),
            let selected_tag = self.selected_tag.signal() =>
            TagQuery::new(search_term.clone(), selected_tag.clone())
        }
    }
}

pub fn page(content: &ContentStore) -> impl Element {
    let filters = BlogFilters::default();

    widgets::page_section(
        Column::new()
            .s(Width::fill().max(900))
            .s(Align::new().center_x())
            .s(Gap::new().y(40))
            .item(
                Column::new()
                    .s(Align::new().center_x())
                    .s(Gap::new().y(12))
                    .item(El::new().s(Align::new().center_x()).child(widgets::page_title("Blog & Updates")))
                    .item(El::new().s(Align::new().center_x()).child(widgets::body_text(
                        "Thoughts on development, technology, and learning",
                    ))),
            )
            .item(search_input(&filters.search_term))
            .item(widgets::selection_pills(
                tag_universe(content.blog_posts()),
                "All",
                theme::EMERALD_SOLID,
                &filters.selected_tag,
            ))
            .item_signal({
                let content = content.clone();
                filters.query_signal().map(move |query| {
                    let visible = filter_posts(content.blog_posts(), &query);
                    debug_log!(
                        DEBUG_FILTERS,
                        "Posts for '{}' in '{}': {}",
                        query.search_term,
                        query.selected_tag,
                        visible.len()
                    );
                    if visible.is_empty() {
                        no_posts_found().unify()
                    } else {
                        Column::new()
                            .s(Gap::new().y(32))
                            .items(visible.into_iter().map(post_card))
                            .unify()
                    }
                })
            })
            .after_remove(move |_| drop(filters)),
    )
}

fn search_input(search_term: &Atom<String>) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(12).y(12))
        .s(Gap::new().x(8))
        .s(RoundedCorners::all(8))
        .s(Background::new().color_signal(theme::input_background()))
        .s(Borders::all_signal(
            theme::border().map(|color| Border::new().width(1).color(color)),
        ))
        .item(widgets::muted_text(icons::SEARCH))
        .item(
            TextInput::new()
                .s(Width::fill())
                .s(Background::new().color("transparent"))
                .s(Borders::new())
                .s(Font::new().size(16).color_signal(theme::text_strong()))
                .label_hidden("Search posts")
                .placeholder(
                    Placeholder::new("Search posts...")
                        .s(Font::new().color_signal(theme::text_muted())),
                )
                .text_signal(search_term.signal())
                .on_change({
                    let search_term = search_term.clone();
                    move |text| search_term.set(text)
                }),
        )
}

fn post_card(post: &BlogPost) -> impl Element {
    let post_path = paths::blog_post(&post.id);
    widgets::card(
        Column::new()
            .s(Gap::new().y(16))
            .item(
                Row::new()
                    .multiline()
                    .s(Gap::both(8))
                    .items(post.tags.iter().map(|tag| widgets::post_tag(tag)))
                    .item(post.featured.then(widgets::featured_badge)),
            )
            .item(
                Link::new()
                    .s(Font::new()
                        .size(24)
                        .weight(FontWeight::Bold)
                        .color_signal(theme::text_strong()))
                    .label(post.title.as_str())
                    .to(post_path.clone()),
            )
            .item(widgets::body_text(&post.excerpt))
            .item(
                Row::new()
                    .item(widgets::muted_text(&format!(
                        "{} {}",
                        icons::CALENDAR,
                        format::long_date(post.date)
                    )))
                    .item(
                        El::new()
                            .s(Align::new().right())
                            .child(widgets::internal_link(
                                &format!("Read More {}", icons::ARROW_RIGHT),
                                &post_path,
                            )),
                    ),
            ),
    )
}

fn no_posts_found() -> impl Element {
    Column::new()
        .s(Padding::new().y(80))
        .s(Gap::new().y(8))
        .s(Align::new().center_x())
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(56))
                .child("📝"),
        )
        .item(El::new().s(Align::new().center_x()).child(widgets::section_title("No posts found")))
        .item(El::new().s(Align::new().center_x()).child(widgets::body_text(
            "Try adjusting your search terms or filters",
        )))
}
