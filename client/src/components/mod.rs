//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and content blocks while reading shared
//! state (theme, reveal coordinator, ui chrome) from Leptos context providers.

pub mod animated_section;
pub mod button;
pub mod category_tabs;
pub mod fallback_image;
pub mod footer;
pub mod legal_document;
pub mod logo;
pub mod navbar;
pub mod page_hero;
pub mod project_card;
pub mod section_heading;
pub mod testimonial_carousel;
pub mod theme_toggle;
