//! Personal portfolio frontend.

#[macro_use]
mod debug_utils;

mod app;
mod components;
mod dataflow;
mod icons;
mod pages;
mod router;
mod theme;

use shared::ContentStore;
use zoon::*;

pub fn main() {
    theme::init_theme();

    match ContentStore::load_bundled() {
        Ok(content) => {
            let app = app::PortfolioApp::new(content);
            router::router();
            start_app("app", move || app.root());
        }
        Err(error) => {
            zoon::eprintln!("Failed to load site content: {error}");
            start_app("app", pages::not_found::content_unavailable);
        }
    }
}
