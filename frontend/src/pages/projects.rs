use crate::components::widgets;
use crate::dataflow::Atom;
use crate::debug_utils::DEBUG_FILTERS;
use crate::theme;
use shared::{ContentStore, Project, Selection, TagQuery, filter_projects, tag_universe};
use zoon::*;

pub fn page(content: &ContentStore) -> impl Element {
    let selected_tag: Atom<Selection> = Atom::default();

    widgets::page_section(
        Column::new()
            .s(Gap::new().y(40))
            .item(
                Column::new()
                    .s(Align::new().center_x())
                    .s(Gap::new().y(12))
                    .item(El::new().s(Align::new().center_x()).child(widgets::page_title("Projects")))
                    .item(El::new().s(Align::new().center_x()).child(widgets::body_text(
                        "Things I have built, from side projects to production systems",
                    ))),
            )
            .item(
                El::new().s(Align::new().center_x()).child(widgets::selection_pills(
                    tag_universe(content.projects()),
                    "All",
                    theme::ACCENT_SOLID,
                    &selected_tag,
                )),
            )
            .item_signal({
                let content = content.clone();
                selected_tag.signal().map(move |tag| {
                    let query = TagQuery::new(String::new(), tag);
                    let visible = filter_projects(content.projects(), &query);
                    debug_log!(DEBUG_FILTERS, "Projects for '{}': {}", query.selected_tag, visible.len());
                    Row::new()
                        .multiline()
                        .s(Gap::both(24))
                        .items(visible.into_iter().map(project_card))
                        .unify()
                })
            })
            .after_remove(move |_| drop(selected_tag)),
    )
}

fn project_card(project: &Project) -> impl Element {
    El::new().s(Width::fill().min(300).max(340)).child(widgets::card(
        Column::new()
            .s(Gap::new().y(16))
            .item(widgets::cover_image(&project.image, &project.title))
            .item(
                Row::new()
                    .s(Gap::new().x(8))
                    .item(widgets::card_title(&project.title))
                    .item(
                        project
                            .featured
                            .then(|| El::new().s(Align::new().right()).child(widgets::featured_badge())),
                    ),
            )
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
