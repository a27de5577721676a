//! Home-page testimonial slider with wrap-around arrows and autoplay.

use leptos::prelude::*;

use crate::content::testimonials::TESTIMONIALS;
use crate::util::assets::AssetFallback;
use crate::util::carousel::cycle_index;

use super::fallback_image::FallbackImage;

#[cfg(feature = "csr")]
const AUTOPLAY_MS: u64 = 5_000;

#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let index = RwSignal::new(0_usize);
    let step = move |delta: isize| {
        if let Some(next) = cycle_index(TESTIMONIALS.len(), index.get_untracked(), delta) {
            index.set(next);
        }
    };

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(AUTOPLAY_MS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                step(1);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let slide = move || {
        let t = TESTIMONIALS.get(index.get())?;
        Some(view! {
            <figure class="testimonial">
                <blockquote class="testimonial__quote">{format!("\"{}\"", t.quote)}</blockquote>
                <figcaption class="testimonial__author">
                    <FallbackImage
                        src=t.image
                        alt=t.author
                        fallback=AssetFallback::initials_for(t.author)
                        class="testimonial__avatar"
                    />
                    <div>
                        <h4 class="testimonial__name">{t.author}</h4>
                        <p class="testimonial__position">{t.position}</p>
                    </div>
                </figcaption>
            </figure>
        })
    };

    view! {
        <div class="testimonial-carousel">
            <button class="testimonial-carousel__arrow" aria-label="Previous testimonial" on:click=move |_| step(-1)>
                "‹"
            </button>
            {slide}
            <button class="testimonial-carousel__arrow" aria-label="Next testimonial" on:click=move |_| step(1)>
                "›"
            </button>
            <div class="testimonial-carousel__dots">
                {(0..TESTIMONIALS.len())
                    .map(|i| {
                        view! {
                            <button
                                class="testimonial-carousel__dot"
                                class:testimonial-carousel__dot--active=move || index.get() == i
                                aria-label=format!("Show testimonial {}", i + 1)
                                on:click=move |_| index.set(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
