//! Theme preference store and broadcaster.
//!
//! Resolves light/dark mode from `localStorage`, falling back to the OS
//! `prefers-color-scheme` signal, and keeps the `<html>` element's `dark`
//! class and `data-theme` attribute in sync. One store is created at the
//! composition root and handed to consumers through Leptos context.
//!
//! TRADE-OFFS
//! ==========
//! Every browser access is best-effort. Storage or media-query failures read
//! as "not set" and the store settles on light mode; nothing here returns an
//! error to the UI. Non-browser builds use the in-memory seams below so the
//! store behaves identically in native tests.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// `localStorage` key holding the literal `dark` or `light`.
pub const STORAGE_KEY: &str = "bhardwaj-theme";

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Light or dark rendering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than `dark`/`light` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Where the current mode came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeSource {
    /// The user toggled at some point; the OS signal is ignored.
    Explicit,
    /// No stored choice; the mode follows the OS signal.
    #[default]
    SystemDefault,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub mode: ThemeMode,
    pub source: ThemeSource,
}

/// Single-key durable storage for the theme preference.
///
/// Implementations swallow their own failures: `load` returns `None` and
/// `save` becomes a no-op.
pub trait PreferenceStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// OS-level dark-mode signal. `None` means the query is unsupported.
pub trait SystemThemeSignal {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Document-level styling hook applied on every mode change.
pub trait ThemeSurface: Send + Sync {
    fn apply(&self, mode: ThemeMode);
}

type Listener = Arc<dyn Fn(ThemePreference) + Send + Sync>;

struct StoreState {
    preference: ThemePreference,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Shared theme store. Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct ThemeStore {
    state: Arc<Mutex<StoreState>>,
    storage: Arc<dyn PreferenceStorage>,
    surface: Arc<dyn ThemeSurface>,
}

impl ThemeStore {
    /// Resolve the initial preference and apply it to the surface.
    pub fn init(
        storage: impl PreferenceStorage + 'static,
        system: &impl SystemThemeSignal,
        surface: impl ThemeSurface + 'static,
    ) -> Self {
        let storage: Arc<dyn PreferenceStorage> = Arc::new(storage);
        let preference = match storage.load().as_deref().and_then(ThemeMode::parse) {
            Some(mode) => ThemePreference { mode, source: ThemeSource::Explicit },
            None => ThemePreference {
                mode: ThemeMode::from_dark(system.prefers_dark().unwrap_or(false)),
                source: ThemeSource::SystemDefault,
            },
        };
        log::debug!("theme resolved: {preference:?}");

        surface.apply(preference.mode);
        Self {
            state: Arc::new(Mutex::new(StoreState { preference, listeners: Vec::new(), next_listener_id: 0 })),
            storage,
            surface: Arc::new(surface),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.lock().preference
    }

    /// Flip the mode, mark it explicit, persist it and notify subscribers.
    pub fn toggle(&self) {
        let (next, listeners) = {
            let mut state = self.lock();
            state.preference =
                ThemePreference { mode: state.preference.mode.flipped(), source: ThemeSource::Explicit };
            (state.preference, snapshot(&state.listeners))
        };
        self.storage.save(next.mode.as_str());
        self.surface.apply(next.mode);
        for listener in listeners {
            listener(next);
        }
    }

    /// Register a change listener. Dropping the returned handle unsubscribes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(ThemePreference) + Send + Sync + 'static) -> Subscription {
        let mut state = self.lock();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push((id, Arc::new(listener)));
        Subscription { state: Arc::clone(&self.state), id, active: true }
    }

    /// OS signal changed. Only honoured while the user has never toggled.
    pub fn on_system_change(&self, prefers_dark: bool) {
        if self.storage.load().as_deref().and_then(ThemeMode::parse).is_some() {
            return;
        }
        let (next, listeners) = {
            let mut state = self.lock();
            let mode = ThemeMode::from_dark(prefers_dark);
            if state.preference.source == ThemeSource::Explicit || state.preference.mode == mode {
                return;
            }
            state.preference.mode = mode;
            (state.preference, snapshot(&state.listeners))
        };
        self.surface.apply(next.mode);
        for listener in listeners {
            listener(next);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn snapshot(listeners: &[(u64, Listener)]) -> Vec<Listener> {
    listeners.iter().map(|(_, listener)| Arc::clone(listener)).collect()
}

/// Disposer returned by [`ThemeStore::subscribe`].
pub struct Subscription {
    state: Arc<Mutex<StoreState>>,
    id: u64,
    active: bool,
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the store.
    pub fn detach(mut self) {
        self.active = false;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.listeners.retain(|(id, _)| *id != self.id);
    }
}

// =============================================================
// In-memory seams (tests and non-browser builds)
// =============================================================

/// In-memory storage. Clones share the same slot.
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
    available: bool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self { slot: Arc::new(Mutex::new(None)), available: true }
    }
}

impl MemoryStorage {
    pub fn with_value(value: &str) -> Self {
        let storage = Self::default();
        *storage.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_owned());
        storage
    }

    /// Storage that fails every access, like a locked-down browser profile.
    pub fn unavailable() -> Self {
        Self { slot: Arc::new(Mutex::new(None)), available: false }
    }

    pub fn value(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        if !self.available {
            return None;
        }
        self.value()
    }

    fn save(&self, value: &str) {
        if self.available {
            *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_owned());
        }
    }
}

/// OS signal with a fixed answer (`None` = media queries unsupported).
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedSystemTheme(pub Option<bool>);

impl SystemThemeSignal for FixedSystemTheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSurface;

impl ThemeSurface for NoopSurface {
    fn apply(&self, _mode: ThemeMode) {}
}

// =============================================================
// Browser seams
// =============================================================

/// `window.localStorage` under [`STORAGE_KEY`].
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl PreferenceStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }

    fn save(&self, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::debug!("theme: localStorage unavailable, preference not persisted");
            return;
        };
        if storage.set_item(STORAGE_KEY, value).is_err() {
            log::debug!("theme: localStorage write rejected");
        }
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSystemTheme;

#[cfg(feature = "csr")]
impl SystemThemeSignal for BrowserSystemTheme {
    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
}

/// Toggles the `dark` class and `data-theme` attribute on `<html>`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

#[cfg(feature = "csr")]
impl ThemeSurface for DocumentSurface {
    fn apply(&self, mode: ThemeMode) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let _ = el.class_list().toggle_with_force("dark", mode.is_dark());
        let _ = el.set_attribute("data-theme", mode.as_str());
    }
}

/// Store wired to the current environment.
pub fn environment_store() -> ThemeStore {
    #[cfg(feature = "csr")]
    {
        ThemeStore::init(BrowserStorage, &BrowserSystemTheme, DocumentSurface)
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemeStore::init(MemoryStorage::default(), &FixedSystemTheme::default(), NoopSurface)
    }
}

/// Forward OS `prefers-color-scheme` changes into the store for the page lifetime.
pub fn watch_system_theme(store: &ThemeStore) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
            log::debug!("theme: matchMedia unsupported, OS changes not tracked");
            return;
        };
        let store = store.clone();
        let mq_for_cb = mq.clone();
        let cb = Closure::<dyn FnMut()>::new(move || store.on_system_change(mq_for_cb.matches()));
        if mq
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
    }
}
