//! Portfolio tile linking to a project's detail page.

use leptos::prelude::*;

use crate::content::projects::Project;
use crate::util::assets::AssetFallback;
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

use super::animated_section::AnimatedSection;
use super::fallback_image::FallbackImage;

/// Per-card stagger in a grid.
const STAGGER_MS: u32 = 200;

#[component]
pub fn ProjectCard(project: &'static Project, #[prop(optional)] index: usize) -> impl IntoView {
    let delay_ms = stagger_delay_ms(index, STAGGER_MS);

    view! {
        <AnimatedSection variant=RevealVariant::FadeUp delay_ms=delay_ms class="project-card">
            <div class="project-card__media">
                <FallbackImage
                    src=project.thumbnail
                    alt=project.title
                    fallback=AssetFallback::Caption(project.title.to_owned())
                    class="project-card__image"
                />
                <div class="project-card__overlay"></div>
            </div>
            <div class="project-card__body">
                <span class="project-card__category">{project.category}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <div class="project-card__meta">
                    <span>{project.location}</span>
                    <span class="project-card__dot">"•"</span>
                    <span>{project.year}</span>
                </div>
                <p class="project-card__summary">{project.summary}</p>
                <a href=project.href() class="project-card__link">
                    "View Project"
                    <span class="project-card__arrow">"→"</span>
                </a>
            </div>
        </AnimatedSection>
    }
}
