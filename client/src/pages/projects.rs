//! Project portfolio with category tabs.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{ButtonSize, LinkButton};
use crate::components::category_tabs::CategoryTabs;
use crate::components::page_hero::PageHero;
use crate::components::project_card::ProjectCard;
use crate::components::section_heading::{Alignment, SectionHeading};
use crate::content::filter::{CategoryFilter, filter_by_category};
use crate::content::projects::{PROJECT_FILTERS, PROJECTS};
use crate::content::site::page_title;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::All);
    let on_select = Callback::new(move |next: CategoryFilter| filter.set(next));

    let grid = move || {
        let matches = filter_by_category(PROJECTS, filter.get());
        if matches.is_empty() {
            return view! {
                <div class="empty-state">
                    <h3>"No projects found"</h3>
                    <p>"Please try another filter or check back later."</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="project-grid">
                {matches
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| view! { <ProjectCard project=project index=i/> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <Title text=page_title("Projects")/>
        <PageHero
            title="Our Projects"
            subtitle="Explore our diverse portfolio of architectural projects spanning residential, commercial, and public spaces."
            image="/assets/images/projects-hero.jpg"
        />
        <section class="section">
            <SectionHeading title="Featured Projects" subtitle="Our Portfolio" alignment=Alignment::Center/>
            <CategoryTabs labels=PROJECT_FILTERS active=filter on_select=on_select/>
            {grid}
        </section>
        <section class="section section--alt cta">
            <h2 class="cta__title">"Have a project in mind?"</h2>
            <p class="cta__text">
                "We'd love to hear about your vision. Contact us today to discuss how we can bring your architectural dreams to life."
            </p>
            <LinkButton href="/contact" size=ButtonSize::Large>"Start a Conversation"</LinkButton>
        </section>
    }
}
