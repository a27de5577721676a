//! Studio story, timeline, team and values.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::animated_section::AnimatedSection;
use crate::components::fallback_image::FallbackImage;
use crate::components::page_hero::PageHero;
use crate::components::section_heading::{Alignment, SectionHeading};
use crate::content::site::{STATS, page_title};
use crate::content::team::{TEAM, TIMELINE, VALUES};
use crate::util::assets::AssetFallback;
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=page_title("About Us")/>
        <PageHero
            title="About Us"
            subtitle="Discover our story, our team, and the values that drive our architectural excellence."
            image="/assets/images/about-hero.jpg"
        />

        <section class="section about-story">
            <AnimatedSection variant=RevealVariant::SlideLeft class="about-story__text">
                <SectionHeading title="Our Story" subtitle="Who We Are"/>
                <p>
                    "Founded in 2008 by Vikram Bhardwaj, our firm began with a simple vision: to create architectural spaces that inspire, endure, and enhance the lives of those who experience them."
                </p>
                <p>
                    "What started as a small studio has grown into a full-service practice working across residential, commercial, and public sectors throughout India."
                </p>
                <p>
                    "Our philosophy centers on creating harmonious spaces that blend functionality, aesthetics, and sustainability."
                </p>
            </AnimatedSection>
            <AnimatedSection variant=RevealVariant::SlideRight class="about-story__media">
                <FallbackImage
                    src="/assets/images/about-story.jpg"
                    alt="Bhardwaj Architect studio"
                    fallback=AssetFallback::Placeholder
                />
            </AnimatedSection>
        </section>

        <section class="section section--alt stats">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <AnimatedSection variant=RevealVariant::ZoomIn class="stats__item">
                            <span class="stats__value">{stat.value}"+"</span>
                            <p class="stats__label">{stat.label}</p>
                        </AnimatedSection>
                    }
                })
                .collect_view()}
        </section>

        <section class="section">
            <SectionHeading title="Our Journey" subtitle="Milestones" alignment=Alignment::Center/>
            <ol class="timeline">
                {TIMELINE
                    .iter()
                    .enumerate()
                    .map(|(i, milestone)| {
                        let variant = if i % 2 == 0 { RevealVariant::SlideLeft } else { RevealVariant::SlideRight };
                        view! {
                            <li class="timeline__item">
                                <AnimatedSection variant=variant>
                                    <span class="timeline__year">{milestone.year}</span>
                                    <h3 class="timeline__title">{milestone.title}</h3>
                                    <p>{milestone.description}</p>
                                </AnimatedSection>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>

        <section class="section section--alt">
            <SectionHeading
                title="Meet Our Team"
                subtitle="The Minds Behind Our Designs"
                description="Our talented team of architects, designers, and planners brings diverse expertise and a shared passion for exceptional design."
                alignment=Alignment::Center
            />
            <div class="team-grid">
                {TEAM
                    .iter()
                    .enumerate()
                    .map(|(i, member)| {
                        view! {
                            <AnimatedSection delay_ms=stagger_delay_ms(i, 150) class="team-card">
                                <FallbackImage
                                    src=member.image
                                    alt=member.name
                                    fallback=AssetFallback::initials_for(member.name)
                                    class="team-card__photo"
                                />
                                <h3 class="team-card__name">{member.name}</h3>
                                <p class="team-card__role">{member.role}</p>
                                <p class="team-card__bio">{member.bio}</p>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="section">
            <SectionHeading title="Our Values" subtitle="What We Stand For" alignment=Alignment::Center/>
            <div class="values-grid">
                {VALUES
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        view! {
                            <AnimatedSection variant=RevealVariant::FadeUp delay_ms=stagger_delay_ms(i, 100) class="value-card">
                                <h3>{value.title}</h3>
                                <p>{value.description}</p>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
