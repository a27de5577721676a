//! Eyebrow + title + underline + description block used atop page sections.

use leptos::prelude::*;

use super::animated_section::AnimatedSection;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    fn modifier(self) -> &'static str {
        match self {
            Self::Left => "section-heading--left",
            Self::Center => "section-heading--center",
            Self::Right => "section-heading--right",
        }
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] alignment: Alignment,
    #[prop(default = true)] underline: bool,
) -> impl IntoView {
    view! {
        <AnimatedSection class=format!("section-heading {}", alignment.modifier())>
            {subtitle.map(|s| view! { <span class="section-heading__eyebrow">{s.to_uppercase()}</span> })}
            <h2 class="section-heading__title">{title}</h2>
            {underline.then(|| view! { <div class="section-heading__rule"></div> })}
            {description.map(|d| view! { <p class="section-heading__description">{d}</p> })}
        </AnimatedSection>
    }
}
