use crate::components::widgets;
use crate::dataflow::Atom;
use crate::debug_utils::DEBUG_FILTERS;
use crate::icons;
use crate::theme;
use shared::{ContentStore, Selection, Skill, category_universe, filter_skills};
use zoon::*;

const SUMMARY_FIGURES: [(&str, &str); 3] = [
    ("5+", "Years Experience"),
    ("50+", "Projects Completed"),
    ("100%", "Commitment"),
];

pub fn page(content: &ContentStore) -> impl Element {
    let selected_category: Atom<Selection> = Atom::default();

    widgets::page_section(
        Column::new()
            .s(Gap::new().y(40))
            .item(
                Column::new()
                    .s(Align::new().center_x())
                    .s(Gap::new().y(12))
                    .item(El::new().s(Align::new().center_x()).child(widgets::page_title("Skills & Expertise")))
                    .item(
                        El::new()
                            .s(Align::new().center_x())
                            .child(widgets::body_text("Technologies and tools I work with")),
                    ),
            )
            .item(
                El::new().s(Align::new().center_x()).child(widgets::selection_pills(
                    category_universe(content.skills()),
                    "All Skills",
                    theme::ACCENT_SOLID,
                    &selected_category,
                )),
            )
            .item_signal({
                let content = content.clone();
                selected_category.signal().map(move |category| {
                    let visible = filter_skills(content.skills(), &category);
                    debug_log!(DEBUG_FILTERS, "Skills for '{}': {}", category, visible.len());
                    Row::new()
                        .multiline()
                        .s(Gap::both(24))
                        .items(visible.into_iter().map(skill_card))
                        .unify()
                })
            })
            .item(summary(content.skills().len()))
            .after_remove(move |_| drop(selected_category)),
    )
}

fn skill_card(skill: &Skill) -> impl Element {
    let level = skill.level();
    El::new().s(Width::fill().min(280).max(340)).child(widgets::card(
        Column::new()
            .s(Gap::new().y(16))
            .item(
                Row::new()
                    .s(Gap::new().x(12))
                    .item(
                        El::new()
                            .s(Font::new().size(18).color_signal(theme::accent()))
                            .child(icons::category_glyph(skill.icon())),
                    )
                    .item(widgets::card_title(&skill.name))
                    .item(
                        El::new()
                            .s(Align::new().right())
                            .child(widgets::muted_text(&format!("{level}%"))),
                    ),
            )
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Height::exact(12))
                    .s(RoundedCorners::all_max())
                    .s(Background::new().color_signal(theme::border()))
                    .child(
                        El::new()
                            .s(Width::percent(level as f64))
                            .s(Height::fill())
                            .s(RoundedCorners::all_max())
                            .s(Background::new().color(icons::tier_color(skill.tier()))),
                    ),
            )
            .item(
                Row::new()
                    .item(widgets::muted_text(&skill.category))
                    .item(
                        El::new()
                            .s(Align::new().right())
                            .child(widgets::muted_text(skill.tier().label())),
                    ),
            ),
    ))
}

fn summary(technology_count: usize) -> impl Element {
    let technologies = format!("{technology_count}+");
    Column::new()
        .s(Width::fill())
        .s(Padding::all(32))
        .s(Gap::new().y(24))
        .s(RoundedCorners::all(16))
        .s(Font::new().color(theme::ON_ACCENT))
        .update_raw_el(|raw_el| raw_el.style("background", theme::HERO_GRADIENT))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(30).weight(FontWeight::Bold))
                .child("Constantly Learning & Growing"),
        )
        .item(
            Paragraph::new()
                .s(Font::new().size(18).center().color(theme::ON_ACCENT_SOFT))
                .content(
                    "I believe in continuous learning and staying up-to-date with the latest \
                     technologies and best practices in software development.",
                ),
        )
        .item(
            Row::new()
                .multiline()
                .s(Align::new().center_x())
                .s(Gap::both(48))
                .item(figure(&technologies, "Technologies"))
                .items(SUMMARY_FIGURES.iter().map(|(value, label)| figure(value, label))),
        )
}

fn figure(value: &str, label: &str) -> impl Element {
    Column::new()
        .s(Gap::new().y(4))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(30).weight(FontWeight::Bold))
                .child(value),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().color(theme::ON_ACCENT_SOFT))
                .child(label),
        )
}
