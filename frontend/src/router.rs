use crate::dataflow::Relay;
use crate::debug_utils::DEBUG_ROUTING;
use shared::paths;
use std::sync::OnceLock;
use zoon::*;

// More specific routes first; the first matching variant wins.
#[route]
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    #[route("blog", post_id)]
    BlogPost { post_id: String },
    #[route("blog")]
    Blog,
    #[route("about")]
    About,
    #[route("skills")]
    Skills,
    #[route("projects")]
    Projects,
    #[route("contact")]
    Contact,
    #[route()]
    Home,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => paths::HOME.to_string(),
            Route::About => paths::ABOUT.to_string(),
            Route::Skills => paths::SKILLS.to_string(),
            Route::Projects => paths::PROJECTS.to_string(),
            Route::Blog => paths::BLOG.to_string(),
            Route::BlogPost { post_id } => paths::blog_post(post_id),
            Route::Contact => paths::CONTACT.to_string(),
        }
    }
}

/// What the address bar currently points at.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RouteState {
    /// The router has not reported the initial URL yet.
    #[default]
    Resolving,
    Matched(Route),
    NotFound,
}

impl RouteState {
    pub fn current_path(&self) -> Option<String> {
        match self {
            RouteState::Matched(route) => Some(route.path()),
            RouteState::Resolving | RouteState::NotFound => None,
        }
    }
}

static ROUTE_CHANGED_RELAY: OnceLock<Relay<RouteState>> = OnceLock::new();

/// Must run before the first `router()` call, otherwise the initial URL is lost.
pub fn install_route_relay(route_changed_relay: Relay<RouteState>) {
    if ROUTE_CHANGED_RELAY.set(route_changed_relay).is_err() {
        zoon::eprintln!("Route relay installed twice; keeping the first one");
    }
}

pub fn router() -> &'static Router<Route> {
    static ROUTER: Lazy<Router<Route>> = Lazy::new(|| {
        Router::new(|route: Option<Route>| async move {
            debug_log!(DEBUG_ROUTING, "Route changed: {:?}", route);
            let route_state = match route {
                Some(route) => RouteState::Matched(route),
                None => RouteState::NotFound,
            };
            match ROUTE_CHANGED_RELAY.get() {
                Some(route_changed_relay) => route_changed_relay.send(route_state),
                None => zoon::eprintln!("Route changed before the app was ready"),
            }
        })
    });
    &ROUTER
}
