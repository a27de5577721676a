//! Privacy policy and terms of service.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::legal_document::LegalDocument;
use crate::content::legal::{PRIVACY_SECTIONS, TERMS_SECTIONS};
use crate::content::site::page_title;

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <Title text=page_title("Privacy Policy")/>
        <section class="section legal-page">
            <LegalDocument title="Privacy Policy" sections=PRIVACY_SECTIONS/>
        </section>
    }
}

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! {
        <Title text=page_title("Terms of Service")/>
        <section class="section legal-page">
            <LegalDocument title="Terms of Service" sections=TERMS_SECTIONS/>
        </section>
    }
}
