//! Service catalogue and the six-phase design process.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::animated_section::AnimatedSection;
use crate::components::button::{ButtonSize, LinkButton};
use crate::components::fallback_image::FallbackImage;
use crate::components::page_hero::PageHero;
use crate::components::section_heading::{Alignment, SectionHeading};
use crate::content::services::{PROCESS_STEPS, SERVICES};
use crate::content::site::page_title;
use crate::util::assets::AssetFallback;
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text=page_title("Services")/>
        <PageHero
            title="Our Services"
            subtitle="Comprehensive architectural solutions from concept to completion."
            image="/assets/images/services-hero.jpg"
        />

        <section class="section">
            <SectionHeading
                title="What We Offer"
                subtitle="Our Expertise"
                description="Each engagement is shaped around the client's goals, site and budget."
                alignment=Alignment::Center
            />
            {SERVICES
                .iter()
                .enumerate()
                .map(|(i, service)| {
                    let variant = if i % 2 == 0 { RevealVariant::SlideLeft } else { RevealVariant::SlideRight };
                    view! {
                        <article id=service.id class="service-detail" class:service-detail--reversed={i % 2 == 1}>
                            <AnimatedSection variant=variant class="service-detail__media">
                                <FallbackImage
                                    src=service.image
                                    alt=service.title
                                    fallback=AssetFallback::Caption(service.title.to_owned())
                                />
                            </AnimatedSection>
                            <AnimatedSection class="service-detail__body">
                                <h3 class="service-detail__title">{service.title}</h3>
                                <p>{service.description}</p>
                                <h4>"Our Process"</h4>
                                <ul>{service.process.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}</ul>
                                <h4>"Example Projects"</h4>
                                <ul class="service-detail__projects">
                                    {service.projects.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                </ul>
                            </AnimatedSection>
                        </article>
                    }
                })
                .collect_view()}
        </section>

        <section class="section section--alt">
            <SectionHeading
                title="Our Design Process"
                subtitle="How We Work"
                description="A structured approach that keeps clients involved at every stage."
                alignment=Alignment::Center
            />
            <div class="process-grid">
                {PROCESS_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        view! {
                            <AnimatedSection delay_ms=stagger_delay_ms(i, 100) class="process-step">
                                <span class="process-step__number">{step.number}</span>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section cta">
            <h2 class="cta__title">"Ready to start your project?"</h2>
            <LinkButton href="/contact" size=ButtonSize::Large>"Contact Us"</LinkButton>
        </section>
    }
}
