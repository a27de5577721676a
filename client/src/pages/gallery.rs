//! Image gallery with category tabs and a keyboard-driven lightbox.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::animated_section::AnimatedSection;
use crate::components::category_tabs::CategoryTabs;
use crate::components::fallback_image::FallbackImage;
use crate::components::page_hero::PageHero;
use crate::components::section_heading::{Alignment, SectionHeading};
use crate::content::filter::CategoryFilter;
use crate::content::gallery::GALLERY_FILTERS;
use crate::content::site::page_title;
use crate::state::gallery::GalleryState;
use crate::util::assets::AssetFallback;
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::default());
    let on_select = Callback::new(move |next: CategoryFilter| gallery.update(|g| g.set_filter(next)));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let mut next = gallery.get_untracked();
            if next.handle_key(&ev.key()) {
                ev.prevent_default();
                gallery.set(next);
            }
        });
        Effect::new(move || set_page_scroll_locked(gallery.with(GalleryState::is_open)));
        on_cleanup(move || {
            handle.remove();
            set_page_scroll_locked(false);
        });
    }

    // Keyed on the filter so opening or stepping the lightbox leaves the grid mounted.
    let filter = Memo::new(move |_| gallery.with(|g| g.filter));
    let grid = move || {
        GalleryState::images_for(filter.get())
            .into_iter()
            .enumerate()
            .map(|(i, image)| {
                view! {
                    <AnimatedSection variant=RevealVariant::ZoomIn delay_ms=stagger_delay_ms(i % 6, 80) class="gallery-grid__item">
                        <button
                            class="gallery-grid__button"
                            aria-label=format!("Open {}", image.alt)
                            on:click=move |_| gallery.update(|g| g.open_at(i))
                        >
                            <FallbackImage src=image.src alt=image.alt fallback=AssetFallback::Placeholder/>
                            <span class="gallery-grid__caption">
                                <strong>{image.alt}</strong>
                                <span>{image.category}</span>
                            </span>
                        </button>
                    </AnimatedSection>
                }
            })
            .collect_view()
    };

    let lightbox = move || {
        let image = gallery.get().current()?;
        Some(view! {
            <div class="lightbox" role="dialog" aria-modal="true" on:click=move |_| gallery.update(GalleryState::close)>
                <button class="lightbox__close" aria-label="Close" on:click=move |_| gallery.update(GalleryState::close)>
                    "✕"
                </button>
                <button
                    class="lightbox__nav lightbox__nav--prev"
                    aria-label="Previous image"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        gallery.update(GalleryState::prev);
                    }
                >
                    "‹"
                </button>
                <figure class="lightbox__figure" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    <FallbackImage src=image.src alt=image.alt fallback=AssetFallback::Placeholder class="lightbox__image"/>
                    <figcaption>
                        <h3>{image.alt}</h3>
                        <p>{image.description}</p>
                    </figcaption>
                </figure>
                <button
                    class="lightbox__nav lightbox__nav--next"
                    aria-label="Next image"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        gallery.update(GalleryState::next);
                    }
                >
                    "›"
                </button>
            </div>
        })
    };

    view! {
        <Title text=page_title("Gallery")/>
        <PageHero
            title="Our Gallery"
            subtitle="A visual journey through our interiors, buildings and landscapes."
            image="/assets/images/gallery-hero.jpg"
        />
        <section class="section">
            <SectionHeading title="Visual Showcase" subtitle="Explore Our Work" alignment=Alignment::Center/>
            <CategoryTabs labels=GALLERY_FILTERS active=filter on_select=on_select/>
            <div class="gallery-grid">{grid}</div>
        </section>
        {lightbox}
    }
}

/// Stop the page behind the lightbox from scrolling.
#[cfg(feature = "csr")]
fn set_page_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.style().set_property("overflow", if locked { "hidden" } else { "" });
}
