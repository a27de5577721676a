//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::content::site::FIRM_NAME;
use crate::pages::{
    about::AboutPage,
    contact::ContactPage,
    gallery::GalleryPage,
    home::HomePage,
    legal::{PrivacyPolicyPage, TermsOfServicePage},
    not_found::NotFoundPage,
    project_detail::ProjectDetailPage,
    projects::ProjectsPage,
    services::ServicesPage,
};
use crate::state::ui::UiState;
use crate::util::reveal::RevealHandle;
use crate::util::theme::{environment_store, watch_system_theme};

/// Root application component.
///
/// Creates the theme store and reveal coordinator once, provides them and the
/// shared chrome state as contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme_store = environment_store();
    let theme = RwSignal::new(theme_store.preference());
    theme_store.subscribe(move |preference| theme.set(preference)).detach();
    watch_system_theme(&theme_store);

    provide_context(theme_store);
    provide_context(theme);
    provide_context(RevealHandle::for_environment());
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text=FIRM_NAME/>

        <Router>
            <div class="site">
                <Navbar/>
                <main class="site__main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("gallery") view=GalleryPage/>
                        <Route path=StaticSegment("services") view=ServicesPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                        <Route path=StaticSegment("privacy-policy") view=PrivacyPolicyPage/>
                        <Route path=StaticSegment("terms-of-service") view=TermsOfServicePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
