//! Firm-wide constants: navigation, contact details, stats and FAQ.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

pub const FIRM_NAME: &str = "Bhardwaj Architect";

pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Projects", path: "/projects" },
    NavItem { label: "About", path: "/about" },
    NavItem { label: "Gallery", path: "/gallery" },
    NavItem { label: "Services", path: "/services" },
    NavItem { label: "Contact", path: "/contact" },
];

/// Whether the nav link for `item_path` should be highlighted at `current`.
///
/// Home matches only `/`; every other section also matches its sub-routes,
/// so `/projects/modern-villa` keeps "Projects" active.
pub fn is_active(item_path: &str, current: &str) -> bool {
    let current = match current.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    if item_path == "/" {
        return current == "/";
    }
    current == item_path || current.strip_prefix(item_path).is_some_and(|rest| rest.starts_with('/'))
}

/// Document title for a page.
pub fn page_title(page: &str) -> String {
    format!("{page} | {FIRM_NAME}")
}

pub const ADDRESS_LINES: &[&str] = &["123 Architecture Avenue", "Delhi", "India"];
pub const PHONES: &[(&str, &str)] = &[("+919876543210", "+91 98765 43210"), ("+919998887770", "+91 99988 87770")];
pub const EMAILS: &[&str] = &["info@bhardwajarchitect.com", "careers@bhardwajarchitect.com"];
pub const HOURS: &[&str] = &[
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 10:00 AM - 4:00 PM",
    "Sunday: Closed",
];
pub const WHATSAPP_URL: &str = "https://wa.me/919876543210";
pub const DIRECTIONS_URL: &str = "https://www.google.com/maps";

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", url: "https://facebook.com" },
    SocialLink { label: "Twitter", url: "https://twitter.com" },
    SocialLink { label: "Instagram", url: "https://instagram.com" },
    SocialLink { label: "LinkedIn", url: "https://linkedin.com" },
    SocialLink { label: "WhatsApp", url: WHATSAPP_URL },
];

pub struct Stat {
    pub value: u32,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: 15, label: "Years of Experience" },
    Stat { value: 200, label: "Projects Completed" },
    Stat { value: 45, label: "Team Members" },
    Stat { value: 18, label: "Design Awards" },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What services do you provide?",
        answer: "We offer a comprehensive range of architectural services including architectural design, interior design, urban planning, landscape design, project management, 3D visualization, and sustainable design solutions.",
    },
    Faq {
        question: "How do I start a project with your firm?",
        answer: "Contact us through our form, phone, or email to schedule an initial consultation. We'll discuss your vision, requirements, and budget to develop a tailored approach for your project.",
    },
    Faq {
        question: "Do you work on projects outside of Delhi?",
        answer: "Yes, we work on projects throughout India and have experience with international projects as well. Our team handles remote consultations and site visits as required.",
    },
    Faq {
        question: "What is your design process?",
        answer: "Our design process includes six key phases: Discovery, Concept Design, Design Development, Documentation, Implementation, and Completion, with client collaboration at every stage.",
    },
];
