//! Theme-specific class helpers for consistent styling across pages.

use crate::domain::Theme;

pub fn root(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "app theme-dark",
        Theme::Light => "app theme-light",
    }
}

pub fn panel(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "panel panel-dark",
        Theme::Light => "panel panel-light",
    }
}

pub fn text_muted(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "muted muted-dark",
        Theme::Light => "muted muted-light",
    }
}

pub fn nav_button(theme: Theme, active: bool) -> &'static str {
    match (theme, active) {
        (Theme::Dark, true) => "nav-btn nav-btn-dark active",
        (Theme::Dark, false) => "nav-btn nav-btn-dark",
        (Theme::Light, true) => "nav-btn nav-btn-light active",
        (Theme::Light, false) => "nav-btn nav-btn-light",
    }
}

pub fn btn_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "btn btn-primary-dark",
        Theme::Light => "btn btn-primary-light",
    }
}

pub fn input(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "input input-dark",
        Theme::Light => "input input-light",
    }
}
