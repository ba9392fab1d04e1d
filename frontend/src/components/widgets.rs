// Small building blocks shared by the screens.

use crate::dataflow::Atom;
use crate::icons;
use crate::theme;
use shared::{Selection, SocialLink};
use zoon::*;

pub const CONTENT_MAX_WIDTH: u32 = 1100;

/// Centered, width-limited column every screen body sits in.
pub fn page_section(content: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(24).y(48))
        .child(
            El::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .child(content),
        )
}

pub fn page_title(title: &str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(36)
            .weight(FontWeight::Bold)
            .color_signal(theme::text_strong()))
        .child(title)
}

pub fn section_title(title: &str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(28)
            .weight(FontWeight::Bold)
            .color_signal(theme::text_strong()))
        .child(title)
}

pub fn card_title(title: &str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(20)
            .weight(FontWeight::SemiBold)
            .color_signal(theme::text_strong()))
        .child(title)
}

pub fn body_text(text: &str) -> impl Element {
    Paragraph::new()
        .s(Font::new().size(16).color_signal(theme::text_body()))
        .content(text)
}

pub fn muted_text(text: &str) -> impl Element {
    El::new()
        .s(Font::new().size(14).color_signal(theme::text_muted()))
        .child(text)
}

pub fn card(content: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::all(24))
        .s(RoundedCorners::all(12))
        .s(Background::new().color_signal(theme::surface()))
        .s(Borders::all_signal(
            theme::border().map(|color| Border::new().width(1).color(color)),
        ))
        .s(Shadows::new([Shadow::new()
            .y(4)
            .blur(6)
            .spread(-1)
            .color("rgb(0 0 0 / 0.08)")]))
        .child(content)
}

pub fn cover_image(url: &str, description: &str) -> impl Element {
    Image::new()
        .s(Width::fill())
        .s(Height::exact(192))
        .s(RoundedCorners::all(8))
        .update_raw_el(|raw_el| raw_el.style("object-fit", "cover"))
        .url(url)
        .description(description)
}

pub fn avatar(url: &str, description: &str, size: u32) -> impl Element {
    Image::new()
        .s(Width::exact(size))
        .s(Height::exact(size))
        .s(RoundedCorners::all_max())
        .update_raw_el(|raw_el| raw_el.style("object-fit", "cover"))
        .url(url)
        .description(description)
}

// ===== LINKS =====

fn opens_new_tab(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Link to a screen of this site.
pub fn internal_link(label: &str, path: &str) -> impl Element {
    Link::new()
        .s(Font::new()
            .weight(FontWeight::Medium)
            .color_signal(theme::accent()))
        .label(label)
        .to(path)
}

/// Outbound link rendered verbatim. Web URLs open in a new tab.
pub fn external_link(label: &str, url: &str) -> impl Element {
    let new_tab = opens_new_tab(url);
    Link::new()
        .s(Font::new()
            .weight(FontWeight::Medium)
            .color_signal(theme::accent()))
        .label(label)
        .to(url)
        .update_raw_el(move |raw_el| {
            if new_tab {
                raw_el.attr("target", "_blank").attr("rel", "noopener noreferrer")
            } else {
                raw_el
            }
        })
}

pub fn social_links(links: &[SocialLink]) -> impl Element {
    Row::new()
        .s(Gap::new().x(16))
        .items(links.iter().map(|social_link| {
            let new_tab = opens_new_tab(&social_link.url);
            Link::new()
                .s(Width::exact(40))
                .s(Height::exact(40))
                .s(RoundedCorners::all_max())
                .s(Background::new().color_signal(theme::band_background()))
                .s(Font::new()
                    .size(18)
                    .center()
                    .color_signal(theme::text_body()))
                .label(El::new().s(Align::center()).child(icons::social_glyph(social_link.icon)))
                .to(social_link.url.clone())
                .update_raw_el({
                    let name = social_link.name.clone();
                    move |raw_el| {
                        let raw_el = raw_el.attr("aria-label", &name).attr("title", &name);
                        if new_tab {
                            raw_el.attr("target", "_blank").attr("rel", "noopener noreferrer")
                        } else {
                            raw_el
                        }
                    }
                })
        }))
}

// ===== TAGS & PILLS =====

pub fn post_tag(tag: &str) -> impl Element {
    El::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all_max())
        .s(Background::new().color_signal(theme::tag_background()))
        .s(Font::new().size(12).color_signal(theme::tag_text()))
        .child(tag)
}

pub fn project_tag(tag: &str) -> impl Element {
    El::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all_max())
        .s(Background::new().color_signal(theme::project_tag_background()))
        .s(Font::new().size(12).color_signal(theme::project_tag_text()))
        .child(tag)
}

pub fn featured_badge() -> impl Element {
    El::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all_max())
        .s(Background::new().color(theme::FEATURED_BADGE))
        .s(Font::new().size(12).color(theme::FEATURED_BADGE_TEXT))
        .child("Featured")
}

/// One pill per option; pressing a pill makes it the selection.
/// `all_label` is shown for the `All` sentinel.
pub fn selection_pills(
    options: Vec<Selection>,
    all_label: &'static str,
    selected_color: &'static str,
    selected: &Atom<Selection>,
) -> impl Element {
    Row::new()
        .multiline()
        .s(Gap::both(8))
        .items(options.into_iter().map(|option| {
            let is_selected = || {
                let option = option.clone();
                selected.signal().map(move |current| current == option).dedupe()
            };
            let label = if option.is_all() {
                all_label.to_string()
            } else {
                option.to_string()
            };
            Button::new()
                .s(Padding::new().x(16).y(8))
                .s(RoundedCorners::all_max())
                .s(Cursor::new(CursorIcon::Pointer))
                .s(Background::new().color_signal(theme::pill_background(is_selected(), selected_color)))
                .s(Font::new()
                    .size(14)
                    .weight(FontWeight::Medium)
                    .color_signal(theme::pill_text(is_selected())))
                .label(label)
                .on_press({
                    let selected = selected.clone();
                    move || selected.set(option.clone())
                })
        }))
}
