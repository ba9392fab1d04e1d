//! Application root: owns the content handle and the current route, and
//! switches screens when the route changes.

use crate::components;
use crate::dataflow::{Actor, relay};
use crate::debug_utils::DEBUG_ROUTING;
use crate::pages;
use crate::router::{self, Route, RouteState};
use crate::theme;
use futures::StreamExt;
use shared::ContentStore;
use zoon::*;

pub struct PortfolioApp {
    content: ContentStore,
    route_state: Actor<RouteState>,
}

impl PortfolioApp {
    /// Installs the route relay, so this must run before the router starts.
    pub fn new(content: ContentStore) -> Self {
        let (route_changed_relay, mut route_changed_stream) = relay::<RouteState>();
        router::install_route_relay(route_changed_relay);

        let route_state = Actor::new(RouteState::default(), async move |state| {
            while let Some(route_state) = route_changed_stream.next().await {
                state.set_neq(route_state);
            }
        });

        Self {
            content,
            route_state,
        }
    }

    pub fn root(self) -> impl Element {
        let Self {
            content,
            route_state,
        } = self;

        Column::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Background::new().color_signal(theme::page_background()))
            .s(Font::new().family([FontFamily::new("Inter"), FontFamily::SansSerif]))
            .item(components::header(content.personal(), &route_state))
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Height::growable())
                    .child_signal({
                        let content = content.clone();
                        route_state
                            .signal()
                            .map(move |route_state| screen(&content, route_state))
                    }),
            )
            .item(components::footer(&content))
            .after_remove(move |_| drop(route_state))
    }
}

fn screen(content: &ContentStore, route_state: RouteState) -> Option<RawElOrText> {
    debug_log!(DEBUG_ROUTING, "Showing {:?}", route_state);
    let screen = match route_state {
        RouteState::Resolving => return None,
        RouteState::NotFound => pages::not_found::page().unify(),
        RouteState::Matched(route) => match route {
            Route::Home => pages::home::page(content).unify(),
            Route::About => pages::about::page(content).unify(),
            Route::Skills => pages::skills::page(content).unify(),
            Route::Projects => pages::projects::page(content).unify(),
            Route::Blog => pages::blog::page(content).unify(),
            Route::BlogPost { post_id } => pages::blog_post::page(content, &post_id).unify(),
            Route::Contact => pages::contact::page(content).unify(),
        },
    };
    Some(screen)
}
