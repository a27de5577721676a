//! Anchor styled as a button, for internal routes and external links.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Outline => "btn--outline",
        ButtonVariant::Ghost => "btn--ghost",
        ButtonVariant::Link => "btn--link",
    };
    let size = match size {
        ButtonSize::Small => "btn--small",
        ButtonSize::Medium => "btn--medium",
        ButtonSize::Large => "btn--large",
    };
    format!("btn {variant} {size}")
}

/// Link button. `external` opens in a new tab with `noopener`.
#[component]
pub fn LinkButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    let class = button_class(variant, size);
    if external {
        view! {
            <a href=href class=class target="_blank" rel="noopener noreferrer">
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <a href=href class=class>
                {children()}
            </a>
        }
        .into_any()
    }
}
