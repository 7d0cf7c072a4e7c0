use std::sync::Arc;

use dioxus::prelude::*;

use crate::app::{use_locale, Route};
use crate::domain::{Bundles, Preferences, Text, Theme};
use crate::ui::theme;
use crate::util::version::version_label;

#[component]
pub fn Shell(children: Element) -> Element {
    let preferences = use_context::<Signal<Preferences>>();
    let bundles = use_context::<Arc<Bundles>>();
    let locale = use_locale();
    let theme = preferences.with(|prefs| prefs.theme);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let title = bundles.text(locale, Text::AppTitle).to_string();
    let version = version_label();

    rsx! {
        div { class: "shell",
            header { class: "header",
                h1 { class: "title", "{title}" }
                nav { class: "nav",
                    NavButton {
                        active: matches!(current_route, Route::Items {}),
                        onclick: move |_| { nav.push(Route::Items {}); },
                        label: bundles.text(locale, Text::NavItems).to_string(),
                        theme: theme,
                    }
                    NavButton {
                        active: matches!(current_route, Route::Traders {}),
                        onclick: move |_| { nav.push(Route::Traders {}); },
                        label: bundles.text(locale, Text::NavTraders).to_string(),
                        theme: theme,
                    }
                    NavButton {
                        active: matches!(current_route, Route::Maps {}),
                        onclick: move |_| { nav.push(Route::Maps {}); },
                        label: bundles.text(locale, Text::NavMaps).to_string(),
                        theme: theme,
                    }
                    NavButton {
                        active: matches!(current_route, Route::Settings {}),
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: bundles.text(locale, Text::NavSettings).to_string(),
                        theme: theme,
                    }
                }
            }
            main { class: "content",
                {children}
            }
            footer { class: "{theme::text_muted(theme)} footer",
                "Data provided by tarkov.dev · {version}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: String, theme: Theme) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(theme, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
