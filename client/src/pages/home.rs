//! Landing page: hero, featured work, studio stats, services, testimonials.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::animated_section::AnimatedSection;
use crate::components::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::components::fallback_image::FallbackImage;
use crate::components::project_card::ProjectCard;
use crate::components::section_heading::{Alignment, SectionHeading};
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::content::projects::featured_projects;
use crate::content::services::highlighted_services;
use crate::content::site::{FIRM_NAME, STATS, page_title};
use crate::util::assets::AssetFallback;
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=page_title("Home")/>
        <Hero/>

        <section id="featured-projects" class="section">
            <SectionHeading
                title="Featured Projects"
                subtitle="Our Recent Work"
                description="Explore our portfolio of innovative architectural projects that showcase our expertise in design and execution."
                alignment=Alignment::Center
            />
            <div class="project-grid">
                {featured_projects()
                    .iter()
                    .enumerate()
                    .map(|(i, project)| view! { <ProjectCard project=project index=i/> })
                    .collect_view()}
            </div>
            <div class="section__actions">
                <LinkButton href="/projects" variant=ButtonVariant::Outline>
                    "View All Projects"
                </LinkButton>
            </div>
        </section>

        <section class="section section--alt about-summary">
            <AnimatedSection variant=RevealVariant::SlideLeft class="about-summary__text">
                <SectionHeading title=format!("About {FIRM_NAME}") subtitle="Our Journey"/>
                <p>
                    "Founded in 2008, Bhardwaj Architect has established itself as a premier architectural firm specializing in innovative design solutions across residential, commercial, and public sectors."
                </p>
                <p>
                    "Our philosophy centers on creating harmonious spaces that blend functionality, aesthetics, and sustainability."
                </p>
                <LinkButton href="/about">"Learn More About Us"</LinkButton>
            </AnimatedSection>
            <div class="stats">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(i, stat)| {
                        view! {
                            <AnimatedSection
                                variant=RevealVariant::ZoomIn
                                delay_ms=stagger_delay_ms(i, 100)
                                class="stats__item"
                            >
                                <span class="stats__value">{stat.value}"+"</span>
                                <p class="stats__label">{stat.label}</p>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <SectionHeading
                title="Our Services"
                subtitle="What We Offer"
                description="We provide comprehensive architectural services tailored to your unique needs and vision."
                alignment=Alignment::Center
            />
            <div class="service-grid">
                {highlighted_services()
                    .iter()
                    .enumerate()
                    .map(|(i, service)| {
                        view! {
                            <AnimatedSection delay_ms=stagger_delay_ms(i, 100) class="service-card">
                                <h3 class="service-card__title">{service.title}</h3>
                                <p class="service-card__text">{service.short_description}</p>
                                <a class="service-card__link" href=format!("/services#{}", service.id)>
                                    "Learn more →"
                                </a>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section section--alt">
            <SectionHeading
                title="Client Testimonials"
                subtitle="What Our Clients Say"
                description="Don't just take our word for it. Here's what our clients have to say about their experience working with Bhardwaj Architect."
                alignment=Alignment::Center
            />
            <AnimatedSection variant=RevealVariant::FadeIn>
                <TestimonialCarousel/>
            </AnimatedSection>
        </section>

        <AnimatedSection class="section cta">
            <h2 class="cta__title">"Ready to Transform Your " <span class="accent">"Vision"</span> "?"</h2>
            <p class="cta__text">
                "Let's collaborate to bring your architectural dreams to life. Our team of expert architects and designers are ready to create exceptional spaces just for you."
            </p>
            <LinkButton href="/contact" size=ButtonSize::Large>"Get in Touch"</LinkButton>
        </AnimatedSection>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero__backdrop">
                <FallbackImage
                    src="/assets/images/hero-bg.jpg"
                    alt="Architecture Background"
                    fallback=AssetFallback::Placeholder
                    class="hero__image"
                />
                <div class="hero__shade"></div>
            </div>
            <div class="hero__content">
                <span class="hero__eyebrow">"ELEVATING ARCHITECTURE TO NEW HEIGHTS"</span>
                <h1 class="hero__title">
                    "Crafting Exceptional " <br/> <span class="accent">"Architectural"</span> " Experiences"
                </h1>
                <p class="hero__text">
                    "From concept to completion, we transform architectural visions into breathtaking realities that inspire and endure."
                </p>
                <div class="hero__actions">
                    <LinkButton href="/projects" size=ButtonSize::Large>"View Our Projects"</LinkButton>
                    <LinkButton href="/contact" variant=ButtonVariant::Outline size=ButtonSize::Large>
                        "Contact Us"
                    </LinkButton>
                </div>
                <a href="#featured-projects" class="hero__scroll-cue">"Discover More"</a>
            </div>
        </header>
    }
}
