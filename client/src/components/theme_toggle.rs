//! Sun/moon button that flips the site theme.

use leptos::prelude::*;

use crate::util::theme::{ThemePreference, ThemeStore};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = expect_context::<ThemeStore>();
    let theme = expect_context::<RwSignal<ThemePreference>>();
    let is_dark = move || theme.get().mode.is_dark();

    view! {
        <button
            class="theme-toggle"
            class:theme-toggle--dark=is_dark
            aria-label=move || if is_dark() { "Enable light mode" } else { "Enable dark mode" }
            on:click=move |_| store.toggle()
        >
            <span class="theme-toggle__icon">{move || if is_dark() { "☾" } else { "☀" }}</span>
        </button>
    }
}
