//! Case-study page for a single project, keyed by the `:id` route segment.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::animated_section::AnimatedSection;
use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::fallback_image::FallbackImage;
use crate::components::page_hero::PageHero;
use crate::components::project_card::ProjectCard;
use crate::components::section_heading::{Alignment, SectionHeading};
use crate::content::projects::{Project, RELATED_LIMIT, find_project, related_projects};
use crate::content::site::page_title;
use crate::util::assets::AssetFallback;
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

const NOT_FOUND_TITLE: &str = "Project Not Found";

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || params.read().get("id").and_then(|id| find_project(&id));

    view! {
        <Title text=move || page_title(project().map_or(NOT_FOUND_TITLE, |p| p.title))/>
        {move || match project() {
            Some(project) => view! { <ProjectDetailView project=project/> }.into_any(),
            None => view! { <ProjectNotFound/> }.into_any(),
        }}
    }
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    view! {
        <section class="section not-found not-found--project">
            <h2>{NOT_FOUND_TITLE}</h2>
            <p>"We couldn't find the project you're looking for."</p>
            <LinkButton href="/projects">"Back to Projects"</LinkButton>
        </section>
    }
}

#[component]
fn ProjectDetailView(project: &'static Project) -> impl IntoView {
    let detail = project.detail.as_ref();
    let related = related_projects(project, RELATED_LIMIT);

    view! {
        <PageHero title=project.title subtitle=project.summary image=project.thumbnail/>
        <div class="project-meta-bar">
            <span>{project.location}</span>
            <span>{project.year}</span>
            <span>{project.category}</span>
        </div>

        {match detail {
            Some(detail) => {
                view! {
                    <section class="section project-detail">
                        <div class="project-detail__main">
                            <SectionHeading title="Project Overview" subtitle="The Challenge"/>
                            <p>{detail.description}</p>
                            <p>{detail.challenge}</p>
                            <SectionHeading title="Our Approach" subtitle="The Solution"/>
                            <p>{detail.solution}</p>
                            <AnimatedSection class="project-detail__features">
                                <h3>"Key Features"</h3>
                                <ul>{detail.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
                            </AnimatedSection>
                        </div>
                        <AnimatedSection variant=RevealVariant::SlideRight class="project-detail__facts">
                            <h3>"Project Details"</h3>
                            <dl>
                                <dt>"Client"</dt>
                                <dd>{detail.client}</dd>
                                <dt>"Location"</dt>
                                <dd>{project.location}</dd>
                                <dt>"Year"</dt>
                                <dd>{project.year}</dd>
                                <dt>"Category"</dt>
                                <dd>{project.category}</dd>
                                <dt>"Area"</dt>
                                <dd>{detail.area}</dd>
                            </dl>
                            <h3>"Interested in a similar project?"</h3>
                            <p>"Contact us to discuss how we can bring your vision to life."</p>
                            <LinkButton href="/contact">"Get in Touch"</LinkButton>
                        </AnimatedSection>
                    </section>
                    <section class="section section--alt">
                        <SectionHeading
                            title="Project Gallery"
                            subtitle="Visual Showcase"
                            description="Explore the details and features of this architectural project."
                            alignment=Alignment::Center
                        />
                        <div class="image-grid">
                            {detail
                                .images
                                .iter()
                                .enumerate()
                                .map(|(i, src)| {
                                    view! {
                                        <AnimatedSection
                                            variant=RevealVariant::ZoomIn
                                            delay_ms=stagger_delay_ms(i, 100)
                                            class="image-grid__item"
                                        >
                                            <FallbackImage
                                                src=*src
                                                alt=format!("{} image {}", project.title, i + 1)
                                                fallback=AssetFallback::Placeholder
                                            />
                                        </AnimatedSection>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                }
                    .into_any()
            }
            None => {
                view! {
                    <section class="section project-detail project-detail--summary">
                        <SectionHeading title="Project Overview" subtitle=project.category/>
                        <p>{project.summary}</p>
                        <LinkButton href="/contact">"Ask About This Project"</LinkButton>
                    </section>
                }
                    .into_any()
            }
        }}

        {(!related.is_empty())
            .then(|| {
                view! {
                    <section class="section">
                        <SectionHeading
                            title="Related Projects"
                            subtitle="Explore More"
                            description="Discover similar projects in our portfolio."
                            alignment=Alignment::Center
                        />
                        <div class="project-grid">
                            {related
                                .into_iter()
                                .enumerate()
                                .map(|(i, p)| view! { <ProjectCard project=p index=i/> })
                                .collect_view()}
                        </div>
                        <div class="section__actions">
                            <LinkButton href="/projects" variant=ButtonVariant::Outline>
                                "View All Projects"
                            </LinkButton>
                        </div>
                    </section>
                }
            })}
    }
}
