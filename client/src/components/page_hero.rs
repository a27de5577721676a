//! Full-width banner with a background image at the top of inner pages.

use leptos::prelude::*;

use crate::util::assets::AssetFallback;

use super::fallback_image::FallbackImage;

#[component]
pub fn PageHero(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(into)] image: String,
) -> impl IntoView {
    view! {
        <header class="page-hero">
            <div class="page-hero__backdrop">
                <FallbackImage
                    src=image
                    alt=title.clone()
                    fallback=AssetFallback::Placeholder
                    class="page-hero__image"
                />
                <div class="page-hero__shade"></div>
            </div>
            <div class="page-hero__content">
                <h1 class="page-hero__title">{title}</h1>
                {subtitle.map(|s| view! { <p class="page-hero__subtitle">{s}</p> })}
            </div>
        </header>
    }
}
