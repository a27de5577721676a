//! Fixed top navigation with active-route highlighting and a mobile drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `UiState` for the drawer and scrolled styling. The window scroll
//! listener lives here for the lifetime of the app shell; route changes close
//! the drawer.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::site::{NAV_ITEMS, is_active};
use crate::state::ui::UiState;

use super::logo::Logo;
use super::theme_toggle::ThemeToggle;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    // Close the drawer whenever the route changes.
    Effect::new(move || {
        pathname.track();
        if ui.get_untracked().menu_open {
            ui.update(UiState::close_menu);
        }
    });

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let mut next = ui.get_untracked();
            if next.apply_scroll(offset) {
                ui.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let links = move |drawer: bool| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let path = item.path;
                view! {
                    <a
                        href=path
                        class=if drawer { "navbar__drawer-link" } else { "navbar__link" }
                        class:navbar__link--active=move || is_active(path, &pathname.get())
                        on:click=move |_| on_nav_click(path, &pathname.get_untracked())
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar" class:navbar--scrolled=move || ui.get().scrolled>
            <div class="navbar__inner">
                <Logo/>
                <div class="navbar__links">
                    {links(false)}
                    <ThemeToggle/>
                </div>
                <div class="navbar__mobile-controls">
                    <ThemeToggle/>
                    <button
                        class="navbar__menu-button"
                        aria-label="Toggle menu"
                        aria-expanded=move || ui.get().menu_open.to_string()
                        on:click=move |_| ui.update(UiState::toggle_menu)
                    >
                        {move || if ui.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <div class="navbar__drawer" class:navbar__drawer--open=move || ui.get().menu_open>
                <button
                    class="navbar__drawer-close"
                    aria-label="Close menu"
                    on:click=move |_| ui.update(UiState::close_menu)
                >
                    "✕"
                </button>
                <div class="navbar__drawer-links">{links(true)}</div>
            </div>
        </nav>
    }
}

/// Clicking the link for the page already shown scrolls back to the top.
fn on_nav_click(target: &str, current: &str) {
    if target != current {
        return;
    }
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
