//! Site footer: blurb, social links, quick links, services, contact details.

use leptos::prelude::*;

use crate::content::services::SERVICES;
use crate::content::site::{ADDRESS_LINES, EMAILS, FIRM_NAME, NAV_ITEMS, PHONES, SOCIAL_LINKS, WHATSAPP_URL};

use super::logo::Logo;

/// Services linked from the footer column.
const FOOTER_SERVICE_COUNT: usize = 6;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = match current_year() {
        Some(year) => format!("© {year} {FIRM_NAME}. All rights reserved."),
        None => format!("© {FIRM_NAME}. All rights reserved."),
    };

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__column">
                    <Logo/>
                    <p class="footer__blurb">
                        "Excellence in architectural design and innovation, creating spaces that inspire and endure."
                    </p>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.url target="_blank" rel="noopener noreferrer" class="footer__social-link">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__list">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| view! { <li><a href=item.path>{item.label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Our Services"</h4>
                    <ul class="footer__list">
                        {SERVICES
                            .iter()
                            .take(FOOTER_SERVICE_COUNT)
                            .map(|s| view! { <li><a href=format!("/services#{}", s.id)>{s.title}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Contact Information"</h4>
                    <ul class="footer__list footer__list--contact">
                        <li>{ADDRESS_LINES.join(", ")}</li>
                        {PHONES
                            .first()
                            .map(|(tel, display)| view! { <li><a href=format!("tel:{tel}")>{*display}</a></li> })}
                        {EMAILS
                            .first()
                            .map(|email| view! { <li><a href=format!("mailto:{email}")>{*email}</a></li> })}
                        <li>
                            <a href=WHATSAPP_URL target="_blank" rel="noopener noreferrer">"WhatsApp"</a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer__bottom">
                <p class="footer__copyright">{copyright}</p>
                <div class="footer__legal">
                    <a href="/privacy-policy">"Privacy Policy"</a>
                    <a href="/terms-of-service">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}

fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
