// Light/dark theme with reactive color tokens.
// The choice is remembered in local storage between visits.

use zoon::*;

const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Light));

/// Restores the stored theme. Anything other than `"dark"` means light.
pub fn init_theme() {
    let stored_theme: String = local_storage()
        .get(THEME_STORAGE_KEY)
        .unwrap_or(Ok(String::new()))
        .unwrap_or_default();

    THEME.set(match stored_theme.as_str() {
        "dark" => Theme::Dark,
        _ => Theme::Light,
    });
}

pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

pub fn toggle_theme() {
    let new_theme = THEME.get().toggled();
    THEME.set(new_theme);
    if let Err(error) = local_storage().insert(THEME_STORAGE_KEY, new_theme.storage_value()) {
        zoon::eprintln!("Failed to persist theme: {:?}", error);
    }
}

fn tone(light: &'static str, dark: &'static str) -> impl Signal<Item = &'static str> {
    theme().map(move |t| match t {
        Theme::Light => light,
        Theme::Dark => dark,
    })
}

// ===== COLOR TOKENS =====

pub fn page_background() -> impl Signal<Item = &'static str> {
    tone("rgb(255, 255, 255)", "rgb(17, 24, 39)")
}

pub fn band_background() -> impl Signal<Item = &'static str> {
    tone("rgb(249, 250, 251)", "rgb(31, 41, 55)")
}

pub fn surface() -> impl Signal<Item = &'static str> {
    tone("rgb(255, 255, 255)", "rgb(17, 24, 39)")
}

pub fn text_strong() -> impl Signal<Item = &'static str> {
    tone("rgb(17, 24, 39)", "rgb(255, 255, 255)")
}

pub fn text_body() -> impl Signal<Item = &'static str> {
    tone("rgb(75, 85, 99)", "rgb(156, 163, 175)")
}

pub fn text_muted() -> impl Signal<Item = &'static str> {
    tone("rgb(107, 114, 128)", "rgb(107, 114, 128)")
}

pub fn accent() -> impl Signal<Item = &'static str> {
    tone("rgb(37, 99, 235)", "rgb(96, 165, 250)")
}

pub fn border() -> impl Signal<Item = &'static str> {
    tone("rgb(229, 231, 235)", "rgb(55, 65, 81)")
}

pub fn input_background() -> impl Signal<Item = &'static str> {
    tone("rgb(255, 255, 255)", "rgb(31, 41, 55)")
}

pub fn tag_background() -> impl Signal<Item = &'static str> {
    tone("rgb(209, 250, 229)", "rgb(6, 78, 59)")
}

pub fn tag_text() -> impl Signal<Item = &'static str> {
    tone("rgb(6, 95, 70)", "rgb(167, 243, 208)")
}

pub fn project_tag_background() -> impl Signal<Item = &'static str> {
    tone("rgb(219, 234, 254)", "rgb(30, 58, 138)")
}

pub fn project_tag_text() -> impl Signal<Item = &'static str> {
    tone("rgb(30, 64, 175)", "rgb(191, 219, 254)")
}

// Theme-independent colors

pub const HERO_GRADIENT: &str = "linear-gradient(to right, rgb(37, 99, 235), rgb(147, 51, 234))";
pub const ACCENT_SOLID: &str = "rgb(37, 99, 235)";
pub const EMERALD_SOLID: &str = "rgb(5, 150, 105)";
pub const FEATURED_BADGE: &str = "rgb(254, 243, 199)";
pub const FEATURED_BADGE_TEXT: &str = "rgb(146, 64, 14)";
pub const SUCCESS: &str = "rgb(34, 197, 94)";
pub const ERROR: &str = "rgb(220, 38, 38)";
pub const ON_ACCENT: &str = "rgb(255, 255, 255)";
pub const ON_ACCENT_SOFT: &str = "rgb(219, 234, 254)";

/// Selected pills use the given solid color; idle pills follow the theme.
pub fn pill_background(
    is_selected: impl Signal<Item = bool>,
    selected_color: &'static str,
) -> impl Signal<Item = &'static str> {
    map_ref! {
        let is_selected = is_selected,
        let theme = theme() => match (*is_selected, *theme) {
            (true, _) => selected_color,
            (false, Theme::Light) => "rgb(229, 231, 235)",
            (false, Theme::Dark) => "rgb(55, 65, 81)",
        }
    }
}

pub fn pill_text(is_selected: impl Signal<Item = bool>) -> impl Signal<Item = &'static str> {
    map_ref! {
        let is_selected = is_selected,
        let theme = theme() => match (*is_selected, *theme) {
            (true, _) => ON_ACCENT,
            (false, Theme::Light) => "rgb(55, 65, 81)",
            (false, Theme::Dark) => "rgb(209, 213, 219)",
        }
    }
}
