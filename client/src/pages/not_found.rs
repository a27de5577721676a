//! Catch-all 404 view rendered by the router fallback.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::LinkButton;
use crate::content::site::page_title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=page_title("Page Not Found")/>
        <section class="section not-found">
            <div class="not-found__code">"404"</div>
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <LinkButton href="/">"Back to Home"</LinkButton>
            <p class="not-found__hint">
                "Lost? Explore our " <a href="/projects">"projects"</a> " or "
                <a href="/contact">"contact us"</a> " for assistance."
            </p>
        </section>
    }
}
