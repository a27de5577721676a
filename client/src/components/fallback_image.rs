//! `<img>` that swaps to a placeholder block when the asset fails to load.

use leptos::prelude::*;

use crate::util::assets::AssetFallback;

/// Image with an explicit load-failure policy.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    fallback: AssetFallback,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let fallback_class = format!("{} {class}", fallback.class());
    let label = fallback.label().map(str::to_owned);
    let fallback_alt = alt.clone();

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || {
                view! {
                    <div class=fallback_class.clone() role="img" aria-label=fallback_alt.clone()>
                        {label.clone()}
                    </div>
                }
            }
        >
            <img
                src=src.clone()
                alt=alt.clone()
                class=class.clone()
                loading="lazy"
                on:error=move |_| {
                    log::debug!("asset failed to load, using fallback");
                    failed.set(true);
                }
            />
        </Show>
    }
}
