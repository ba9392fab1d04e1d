use crate::components::widgets;
use crate::theme;
use shared::{ContentStore, format};
use zoon::*;

pub fn footer(content: &ContentStore) -> impl Element {
    let profile = content.personal();
    let year = js_sys::Date::new_0().get_full_year() as i32;

    Column::new()
        .s(Width::fill())
        .s(Padding::new().x(24).y(40))
        .s(Gap::new().y(16))
        .s(Background::new().color_signal(theme::band_background()))
        .s(Borders::new().top_signal(
            theme::border().map(|color| Border::new().width(1).color(color)),
        ))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new()
                    .size(18)
                    .weight(FontWeight::SemiBold)
                    .color_signal(theme::text_strong()))
                .child(profile.name.as_str()),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .child(widgets::muted_text(&profile.tagline)),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .child(widgets::social_links(content.social())),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .child(widgets::muted_text(&format::copyright_line(year, &profile.name))),
        )
}
