//! Renders a list of headed legal sections (privacy policy, terms).

use leptos::prelude::*;

use crate::content::legal::{LAST_UPDATED, LegalSection};

#[component]
pub fn LegalDocument(#[prop(into)] title: String, sections: &'static [LegalSection]) -> impl IntoView {
    view! {
        <article class="legal">
            <h1 class="legal__title">{title}</h1>
            <p class="legal__updated">{format!("Last updated: {LAST_UPDATED}")}</p>
            {sections
                .iter()
                .enumerate()
                .map(|(i, section)| {
                    view! {
                        <section class="legal__section">
                            <h2 class="legal__heading">{format!("{}. {}", i + 1, section.heading)}</h2>
                            {section.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                            {(!section.bullets.is_empty())
                                .then(|| {
                                    view! {
                                        <ul class="legal__list">
                                            {section.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                        </ul>
                                    }
                                })}
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}
