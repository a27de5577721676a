//! Contact details, enquiry form and FAQ.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is the site's only async boundary: `ContactFormState` gates the
//! in-flight submission, and the success notice is cleared by a timer that
//! checks a liveness flag so nothing touches state after the page unmounts.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::animated_section::AnimatedSection;
use crate::components::button::{ButtonSize, ButtonVariant, LinkButton, button_class};
use crate::components::page_hero::PageHero;
use crate::components::section_heading::{Alignment, SectionHeading};
use crate::content::site::{ADDRESS_LINES, DIRECTIONS_URL, EMAILS, FAQS, HOURS, PHONES, WHATSAPP_URL, page_title};
use crate::state::contact::{ContactField, ContactFormState};
use crate::util::reveal::{RevealVariant, stagger_delay_ms};

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    #[cfg(feature = "csr")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            use crate::state::contact::SUCCESS_NOTICE_MS;
            use std::sync::atomic::Ordering;

            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_contact(&payload).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let succeeded = outcome.is_ok();
                form.update(|f| f.finish_submit(outcome));
                if !succeeded {
                    return;
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SUCCESS_NOTICE_MS))).await;
                if alive.load(Ordering::Relaxed) {
                    form.update(ContactFormState::clear_success);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
        }
    };

    view! {
        <Title text=page_title("Contact Us")/>
        <PageHero
            title="Contact Us"
            subtitle="Let's discuss your next project. We'd love to hear from you."
            image="/assets/images/contact-hero.jpg"
        />

        <section class="section contact-info">
            <InfoCard title="Our Office" index=0>
                {ADDRESS_LINES.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                <a href=DIRECTIONS_URL target="_blank" rel="noopener noreferrer">"Get Directions"</a>
            </InfoCard>
            <InfoCard title="Call Us" index=1>
                {PHONES
                    .iter()
                    .map(|(tel, display)| view! { <p><a href=format!("tel:{tel}")>{*display}</a></p> })
                    .collect_view()}
                <a href=WHATSAPP_URL target="_blank" rel="noopener noreferrer">"Chat on WhatsApp"</a>
            </InfoCard>
            <InfoCard title="Email Us" index=2>
                {EMAILS
                    .iter()
                    .map(|email| view! { <p><a href=format!("mailto:{email}")>{*email}</a></p> })
                    .collect_view()}
            </InfoCard>
            <InfoCard title="Working Hours" index=3>
                {HOURS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
            </InfoCard>
        </section>

        <section class="section section--alt contact-form-section">
            <SectionHeading
                title="Send Us a Message"
                subtitle="Get In Touch"
                description="Fill out the form below and our team will get back to you as soon as possible."
                alignment=Alignment::Center
            />
            <AnimatedSection variant=RevealVariant::FadeUp class="contact-form-wrap">
                <Show when=move || form.with(|f| f.submitted)>
                    <div class="form-notice form-notice--success" role="status">
                        "Thank you! Your message has been sent successfully. We'll get back to you soon."
                    </div>
                </Show>
                {move || {
                    form.with(|f| f.banner)
                        .map(|message| {
                            view! {
                                <div class="form-notice form-notice--error" role="alert">
                                    <span>{message}</span>
                                    <button
                                        class="form-notice__dismiss"
                                        aria-label="Dismiss"
                                        on:click=move |_| form.update(ContactFormState::dismiss_banner)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                }}
                <form class="contact-form" novalidate=true on:submit=on_submit>
                    <div class="contact-form__row">
                        <FormField form=form field=ContactField::Name label="Your Name" required=true/>
                        <FormField form=form field=ContactField::Email label="Email Address" kind="email" required=true/>
                    </div>
                    <div class="contact-form__row">
                        <FormField form=form field=ContactField::Phone label="Phone Number" kind="tel"/>
                        <FormField form=form field=ContactField::Subject label="Subject" required=true/>
                    </div>
                    <FormField form=form field=ContactField::Message label="Message" kind="textarea" required=true/>
                    <button
                        type="submit"
                        class=button_class(ButtonVariant::Primary, ButtonSize::Large)
                        disabled=move || form.with(|f| f.submitting)
                    >
                        {move || if form.with(|f| f.submitting) { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </AnimatedSection>
        </section>

        <section class="section">
            <SectionHeading title="Frequently Asked Questions" subtitle="FAQ" alignment=Alignment::Center/>
            <div class="faq">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(i, faq)| {
                        view! {
                            <AnimatedSection delay_ms=stagger_delay_ms(i, 100) class="faq__item">
                                <h3 class="faq__question">{faq.question}</h3>
                                <p class="faq__answer">{faq.answer}</p>
                            </AnimatedSection>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="section__actions">
                <LinkButton href=WHATSAPP_URL variant=ButtonVariant::Outline external=true>
                    "Still have questions? Message us"
                </LinkButton>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(children: Children, title: &'static str, index: usize) -> impl IntoView {
    view! {
        <AnimatedSection variant=RevealVariant::FadeUp delay_ms=stagger_delay_ms(index, 100) class="info-card">
            <h3 class="info-card__title">{title}</h3>
            {children()}
        </AnimatedSection>
    }
}

/// One labelled input bound to a form field, with its inline error.
#[component]
fn FormField(
    form: RwSignal<ContactFormState>,
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let key = field.key();
    let value = move || form.with(|f| f.fields.get(field).to_owned());
    let error = move || form.with(|f| f.errors.get(field));
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));

    let control = if kind == "textarea" {
        view! {
            <textarea
                id=key
                name=key
                rows="5"
                class="form-control"
                class:form-control--invalid=move || error().is_some()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=key
                name=key
                type=kind
                class="form-control"
                class:form-control--invalid=move || error().is_some()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=key>{label} {required.then_some(" *")}</label>
            {control}
            {move || error().map(|message| view! { <p class="form-field__error">{message}</p> })}
        </div>
    }
}
