use crate::components::widgets;
use shared::paths;
use zoon::*;

pub fn page() -> impl Element {
    widgets::page_section(
        Column::new()
            .s(Align::new().center_x())
            .s(Gap::new().y(16))
            .item(El::new().s(Align::new().center_x()).child(widgets::page_title("404")))
            .item(El::new().s(Align::new().center_x()).child(widgets::body_text(
                "The page you are looking for does not exist.",
            )))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(widgets::internal_link("Go Home", paths::HOME)),
            ),
    )
}

/// Shown instead of the whole site when the content document fails to load.
pub fn content_unavailable() -> impl Element {
    widgets::page_section(
        Column::new()
            .s(Align::new().center_x())
            .s(Gap::new().y(16))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(widgets::page_title("Content unavailable")),
            )
            .item(El::new().s(Align::new().center_x()).child(widgets::body_text(
                "The site content could not be loaded. Please try again later.",
            ))),
    )
}
