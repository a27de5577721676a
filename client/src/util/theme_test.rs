use super::*;

use std::sync::Mutex as StdMutex;

#[derive(Clone, Default)]
struct RecordingSurface {
    applied: Arc<StdMutex<Vec<ThemeMode>>>,
}

impl RecordingSurface {
    fn applied(&self) -> Vec<ThemeMode> {
        self.applied.lock().unwrap().clone()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, mode: ThemeMode) {
        self.applied.lock().unwrap().push(mode);
    }
}

fn store_with(storage: MemoryStorage, system: Option<bool>) -> ThemeStore {
    ThemeStore::init(storage, &FixedSystemTheme(system), NoopSurface)
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn mode_parse_accepts_persisted_literals_only() {
    assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("true"), None);
    assert_eq!(ThemeMode::parse(""), None);
}

#[test]
fn mode_round_trips_through_storage_string() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn init_prefers_persisted_value_over_system() {
    let store = store_with(MemoryStorage::with_value("light"), Some(true));
    assert_eq!(
        store.preference(),
        ThemePreference { mode: ThemeMode::Light, source: ThemeSource::Explicit }
    );
}

#[test]
fn init_falls_back_to_system_signal() {
    let store = store_with(MemoryStorage::default(), Some(true));
    assert_eq!(
        store.preference(),
        ThemePreference { mode: ThemeMode::Dark, source: ThemeSource::SystemDefault }
    );
}

#[test]
fn init_defaults_to_light_when_everything_is_unavailable() {
    let store = store_with(MemoryStorage::unavailable(), None);
    assert_eq!(store.preference(), ThemePreference::default());
    assert_eq!(store.preference().source, ThemeSource::SystemDefault);
}

#[test]
fn init_treats_garbage_storage_as_unset() {
    let store = store_with(MemoryStorage::with_value("purple"), Some(true));
    assert_eq!(store.preference().mode, ThemeMode::Dark);
    assert_eq!(store.preference().source, ThemeSource::SystemDefault);
}

#[test]
fn init_is_idempotent_for_same_persisted_value() {
    let storage = MemoryStorage::with_value("dark");
    let surface_a = RecordingSurface::default();
    let surface_b = RecordingSurface::default();
    let first = ThemeStore::init(storage.clone(), &FixedSystemTheme(Some(false)), surface_a.clone());
    let second = ThemeStore::init(storage, &FixedSystemTheme(Some(false)), surface_b.clone());

    assert_eq!(first.preference(), second.preference());
    assert_eq!(surface_a.applied(), vec![ThemeMode::Dark]);
    assert_eq!(surface_b.applied(), vec![ThemeMode::Dark]);
}

#[test]
fn init_does_not_persist_system_default() {
    let storage = MemoryStorage::default();
    let _store = store_with(storage.clone(), Some(true));
    assert_eq!(storage.value(), None);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_parity_and_source_become_explicit() {
    for start_dark in [false, true] {
        let store = store_with(MemoryStorage::default(), Some(start_dark));
        let initial = store.preference().mode;
        for n in 1..=7 {
            store.toggle();
            let expected = if n % 2 == 0 { initial } else { initial.flipped() };
            assert_eq!(store.preference().mode, expected, "after {n} toggles");
            assert_eq!(store.preference().source, ThemeSource::Explicit);
        }
    }
}

#[test]
fn toggle_persists_literal_value() {
    let storage = MemoryStorage::default();
    let store = store_with(storage.clone(), Some(false));
    store.toggle();
    assert_eq!(storage.value().as_deref(), Some("dark"));
    store.toggle();
    assert_eq!(storage.value().as_deref(), Some("light"));
}

#[test]
fn toggle_applies_surface_every_time() {
    let surface = RecordingSurface::default();
    let store = ThemeStore::init(MemoryStorage::default(), &FixedSystemTheme(None), surface.clone());
    store.toggle();
    store.toggle();
    assert_eq!(surface.applied(), vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]);
}

#[test]
fn toggle_survives_unavailable_storage() {
    let store = store_with(MemoryStorage::unavailable(), None);
    store.toggle();
    assert_eq!(
        store.preference(),
        ThemePreference { mode: ThemeMode::Dark, source: ThemeSource::Explicit }
    );
}

// =============================================================
// Subscribers
// =============================================================

#[test]
fn subscribers_notified_in_order_before_toggle_returns() {
    let store = store_with(MemoryStorage::default(), None);
    let log = Arc::new(StdMutex::new(Vec::new()));

    let log_a = Arc::clone(&log);
    let _a = store.subscribe(move |pref| log_a.lock().unwrap().push(("a", pref.mode)));
    let log_b = Arc::clone(&log);
    let _b = store.subscribe(move |pref| log_b.lock().unwrap().push(("b", pref.mode)));

    store.toggle();
    assert_eq!(*log.lock().unwrap(), vec![("a", ThemeMode::Dark), ("b", ThemeMode::Dark)]);
}

#[test]
fn listener_can_read_store_during_notification() {
    let store = store_with(MemoryStorage::default(), None);
    let seen = Arc::new(StdMutex::new(None));
    let seen_cb = Arc::clone(&seen);
    let reader = store.clone();
    let _sub = store.subscribe(move |_| *seen_cb.lock().unwrap() = Some(reader.preference()));

    store.toggle();
    assert_eq!(*seen.lock().unwrap(), Some(store.preference()));
}

#[test]
fn dropping_subscription_unsubscribes() {
    let store = store_with(MemoryStorage::default(), None);
    let hits = Arc::new(StdMutex::new(0));
    let hits_cb = Arc::clone(&hits);
    let sub = store.subscribe(move |_| *hits_cb.lock().unwrap() += 1);

    store.toggle();
    drop(sub);
    store.toggle();

    assert_eq!(*hits.lock().unwrap(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn detached_subscription_stays_registered() {
    let store = store_with(MemoryStorage::default(), None);
    store.subscribe(|_| {}).detach();
    assert_eq!(store.subscriber_count(), 1);
}

// =============================================================
// OS signal
// =============================================================

#[test]
fn system_change_tracked_while_system_default() {
    let store = store_with(MemoryStorage::default(), Some(false));
    let hits = Arc::new(StdMutex::new(Vec::new()));
    let hits_cb = Arc::clone(&hits);
    let _sub = store.subscribe(move |pref| hits_cb.lock().unwrap().push(pref.mode));

    store.on_system_change(true);
    assert_eq!(store.preference().mode, ThemeMode::Dark);
    assert_eq!(store.preference().source, ThemeSource::SystemDefault);

    store.on_system_change(true);
    assert_eq!(*hits.lock().unwrap(), vec![ThemeMode::Dark]);
}

#[test]
fn system_change_ignored_once_explicit() {
    let store = store_with(MemoryStorage::default(), Some(false));
    store.toggle();
    let after_toggle = store.preference();

    store.on_system_change(false);
    store.on_system_change(true);
    store.on_system_change(false);

    assert_eq!(store.preference(), after_toggle);
}

#[test]
fn system_change_ignored_when_explicit_but_storage_failed() {
    let store = store_with(MemoryStorage::unavailable(), Some(false));
    store.toggle();
    store.on_system_change(false);
    assert_eq!(store.preference().mode, ThemeMode::Dark);
}

#[test]
fn system_change_ignored_when_value_persisted_elsewhere() {
    let storage = MemoryStorage::default();
    let store = store_with(storage.clone(), Some(false));
    storage.save("light");

    store.on_system_change(true);
    assert_eq!(store.preference().mode, ThemeMode::Light);
}

#[cfg(not(feature = "csr"))]
#[test]
fn environment_store_is_light_outside_browser() {
    let store = environment_store();
    assert_eq!(store.preference(), ThemePreference::default());
    watch_system_theme(&store);
}

#[test]
fn entry_page_applies_stored_theme_before_mount() {
    let html = include_str!("../../index.html");
    let script_at = html.find("<script>").expect("inline theme script");
    let bundle_at = html.find(r#"rel="rust""#).expect("wasm bundle link");
    assert!(script_at < bundle_at);
    assert!(html.contains(&format!("getItem(\"{STORAGE_KEY}\")")));
    assert!(html.contains(r#"classList.toggle("dark""#));
}
