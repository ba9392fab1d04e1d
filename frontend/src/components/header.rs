use crate::dataflow::Actor;
use crate::router::RouteState;
use crate::theme::{self, Theme};
use shared::{PersonalProfile, paths};
use zoon::*;

pub fn header(profile: &PersonalProfile, route_state: &Actor<RouteState>) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(24).y(16))
        .s(Gap::new().x(24))
        .s(Background::new().color_signal(theme::surface()))
        .s(Borders::new().bottom_signal(
            theme::border().map(|color| Border::new().width(1).color(color)),
        ))
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "sticky")
                .style("top", "0")
                .style("z-index", "10")
        })
        .item(
            Link::new()
                .s(Font::new()
                    .size(20)
                    .weight(FontWeight::Bold)
                    .color_signal(theme::text_strong()))
                .label(profile.name.as_str())
                .to(paths::HOME),
        )
        .item(
            Row::new()
                .s(Align::new().right())
                .s(Gap::new().x(24))
                .items(
                    paths::NAVIGATION
                        .iter()
                        .map(|&(label, path)| nav_link(label, path, route_state)),
                )
                .item(theme_toggle()),
        )
}

fn nav_link(label: &'static str, path: &'static str, route_state: &Actor<RouteState>) -> impl Element {
    let is_active = || {
        route_state
            .signal_ref(move |state| {
                state
                    .current_path()
                    .is_some_and(|current_path| paths::is_active(path, &current_path))
            })
            .dedupe()
    };
    Link::new()
        .s(Font::new()
            .size(15)
            .weight(FontWeight::Medium)
            .color_signal(map_ref! {
                let active = is_active(),
                let accent = theme::accent(),
                let idle = theme::text_body() => if *active { *accent } else { *idle }
            }))
        .s(Borders::new().bottom_signal(is_active().map(|active| {
            Border::new()
                .width(2)
                .color(if active { theme::ACCENT_SOLID } else { "transparent" })
        })))
        .label(label)
        .to(path)
}

fn theme_toggle() -> impl Element {
    Button::new()
        .s(Width::exact(36))
        .s(Height::exact(36))
        .s(RoundedCorners::all_max())
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Background::new().color_signal(theme::band_background()))
        .s(Font::new().size(16).center().color_signal(theme::text_strong()))
        .update_raw_el(|raw_el| raw_el.attr("aria-label", "Toggle theme"))
        .label_signal(theme::theme().map(|theme| match theme {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }))
        .on_press(theme::toggle_theme)
}
