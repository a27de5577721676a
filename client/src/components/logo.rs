//! Firm wordmark linking home.

use leptos::prelude::*;

use crate::util::assets::AssetFallback;
use crate::util::theme::ThemePreference;

use super::fallback_image::FallbackImage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    Small,
    #[default]
    Default,
    Large,
}

impl LogoSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "logo__mark--small",
            Self::Default => "logo__mark--default",
            Self::Large => "logo__mark--large",
        }
    }
}

#[component]
pub fn Logo(#[prop(optional)] size: LogoSize) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemePreference>>();

    view! {
        <a href="/" class="logo" class:logo--dark=move || theme.get().mode.is_dark()>
            <span class="logo__mark">
                <FallbackImage
                    src="/assets/images/logo.png"
                    alt="Bhardwaj Architect"
                    fallback=AssetFallback::Hide
                    class=size.class()
                />
            </span>
            <span class="logo__text">
                <span class="logo__name">"Bhardwaj"</span>
                <span class="logo__tagline">"Architect"</span>
            </span>
        </a>
    }
}
