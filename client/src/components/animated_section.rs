//! Scroll-revealed wrapper around a block of content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registers a target with the shared `RevealHandle` on mount and renders the
//! inline style for its current state. In the browser each target gets its
//! own `IntersectionObserver`, held in a thread-local registry keyed by
//! `TargetId` and torn down when the component is cleaned up.

use leptos::prelude::*;

use crate::util::reveal::{DEFAULT_THRESHOLD, RevealConfig, RevealHandle, RevealVariant};

#[component]
pub fn AnimatedSection(
    children: Children,
    #[prop(optional)] variant: RevealVariant,
    #[prop(optional)] delay_ms: u32,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(default = true)] trigger_once: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    let config = RevealConfig::new(variant)
        .with_threshold(threshold)
        .with_trigger_once(trigger_once)
        .with_delay_ms(delay_ms);
    let id = reveal.observe(config);
    let state = RwSignal::new(reveal.state(id).unwrap_or_default());
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let reveal = reveal.clone();
        Effect::new(move || {
            let Some(el) = node_ref.get() else {
                return;
            };
            observer::attach(&reveal, id, config.threshold, &el, state);
        });
    }

    on_cleanup(move || {
        #[cfg(feature = "csr")]
        observer::detach(id);
        reveal.release(id);
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("animated-section {class}")
            data-reveal=variant.as_str()
            style=move || config.style_for(state.get())
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "csr")]
mod observer {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::util::reveal::{RevealHandle, RevealState, TargetId};

    type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    thread_local! {
        static OBSERVERS: RefCell<HashMap<TargetId, (IntersectionObserver, EntryCallback)>> =
            RefCell::new(HashMap::new());
    }

    pub(super) fn attach(
        reveal: &RevealHandle,
        id: TargetId,
        threshold: f64,
        el: &web_sys::Element,
        state: RwSignal<RevealState>,
    ) {
        if !reveal.is_observing(id) || OBSERVERS.with(|map| map.borrow().contains_key(&id)) {
            return;
        }

        let handle = reveal.clone();
        let callback: EntryCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if let Some(next) = handle.update(id, entry.intersection_ratio()) {
                    state.set(next);
                }
            }
            // The closure stays in the registry until cleanup; only stop the observer here.
            if !handle.is_observing(id) {
                observer.disconnect();
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(el);
                OBSERVERS.with(|map| map.borrow_mut().insert(id, (observer, callback)));
            }
            Err(e) => {
                log::warn!("reveal: observer construction failed, revealing immediately: {e:?}");
                if let Some(next) = reveal.force_reveal(id) {
                    state.set(next);
                }
            }
        }
    }

    pub(super) fn detach(id: TargetId) {
        let entry = OBSERVERS.with(|map| map.borrow_mut().remove(&id));
        if let Some((observer, _callback)) = entry {
            observer.disconnect();
        }
    }
}
