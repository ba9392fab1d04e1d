use crate::components::widgets;
use crate::icons;
use crate::theme;
use shared::{ContentStore, EducationEntry, ExperienceEntry, PersonalProfile};
use zoon::*;

pub fn page(content: &ContentStore) -> impl Element {
    widgets::page_section(
        Column::new()
            .s(Gap::new().y(48))
            .item(widgets::page_title("About Me"))
            .item(profile_card(content.personal()))
            .item(
                Column::new()
                    .s(Gap::new().y(24))
                    .item(widgets::section_title("Work Experience"))
                    .items(content.experience().iter().map(experience_entry)),
            )
            .item(
                Column::new()
                    .s(Gap::new().y(24))
                    .item(widgets::section_title("Education"))
                    .items(content.education().iter().map(education_entry)),
            ),
    )
}

fn profile_card(profile: &PersonalProfile) -> impl Element {
    widgets::card(
        Row::new()
            .multiline()
            .s(Gap::both(32))
            .item(
                El::new()
                    .s(Align::new().top())
                    .child(widgets::avatar(&profile.avatar, &profile.name, 160)),
            )
            .item(
                Column::new()
                    .s(Width::growable())
                    .s(Gap::new().y(12))
                    .item(widgets::section_title(&profile.name))
                    .item(
                        El::new()
                            .s(Font::new().size(18).color_signal(theme::accent()))
                            .child(profile.tagline.as_str()),
                    )
                    .item(widgets::body_text(&profile.bio))
                    .item(
                        Row::new()
                            .multiline()
                            .s(Gap::both(20))
                            .item(widgets::external_link(
                                &format!("{} {}", icons::MAIL, profile.email),
                                &profile.mailto_url(),
                            ))
                            .item(widgets::muted_text(&format!("{} {}", icons::PHONE, profile.phone)))
                            .item(widgets::muted_text(&format!(
                                "{} {}",
                                icons::LOCATION,
                                profile.location
                            ))),
                    ),
            ),
    )
}

fn timeline_entry(title: &str, place: &str, period: &str, description: &str) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().left(20))
        .s(Borders::new().left(Border::new().width(3).color(theme::ACCENT_SOLID)))
        .child(
            Column::new()
                .s(Gap::new().y(6))
                .item(widgets::card_title(title))
                .item(
                    El::new()
                        .s(Font::new().weight(FontWeight::Medium).color_signal(theme::accent()))
                        .child(place),
                )
                .item(widgets::muted_text(period))
                .item(widgets::body_text(description)),
        )
}

fn experience_entry(entry: &ExperienceEntry) -> impl Element {
    timeline_entry(&entry.position, &entry.company, &entry.duration, &entry.description)
}

fn education_entry(entry: &EducationEntry) -> impl Element {
    timeline_entry(&entry.degree, &entry.institution, &entry.year, &entry.description)
}
