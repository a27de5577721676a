use super::*;

// =============================================================
// Variants
// =============================================================

#[test]
fn variant_parse_round_trips_known_names() {
    for variant in RevealVariant::ALL {
        assert_eq!(RevealVariant::parse(variant.as_str()), variant);
    }
}

#[test]
fn variant_parse_unknown_falls_back_to_fade_up() {
    assert_eq!(RevealVariant::parse("scale-up"), RevealVariant::FadeUp);
    assert_eq!(RevealVariant::parse(""), RevealVariant::FadeUp);
}

#[test]
fn variant_hidden_params_match_table() {
    let h = RevealVariant::FadeUp.hidden();
    assert_eq!((h.opacity, h.offset_y), (0.0, 50.0));
    assert_eq!(RevealVariant::FadeDown.hidden().offset_y, -50.0);
    assert_eq!(RevealVariant::SlideLeft.hidden().offset_x, -100.0);
    assert_eq!(RevealVariant::SlideRight.hidden().offset_x, 100.0);
    assert_eq!(RevealVariant::ZoomIn.hidden().scale, 0.9);
    assert_eq!(RevealVariant::ZoomOut.hidden().scale, 1.1);
    assert_eq!(RevealVariant::FadeIn.hidden(), VisualParams { opacity: 0.0, ..VisualParams::VISIBLE });
}

#[test]
fn every_variant_becomes_fully_visible() {
    for variant in RevealVariant::ALL {
        assert_eq!(variant.visible(), VisualParams::VISIBLE);
        assert_eq!(variant.hidden().opacity, 0.0);
    }
}

#[test]
fn style_for_renders_params_and_transition() {
    let config = RevealConfig::new(RevealVariant::FadeUp).with_delay_ms(200);
    assert_eq!(
        config.style_for(RevealState::Hidden),
        "opacity: 0; transform: translate3d(0px, 50px, 0) scale(1); \
         transition: opacity 800ms ease-out 200ms, transform 800ms ease-out 200ms;"
    );
    assert!(config.style_for(RevealState::Revealed).starts_with("opacity: 1;"));
}

// =============================================================
// Config
// =============================================================

#[test]
fn config_defaults() {
    let config = RevealConfig::default();
    assert_eq!(config.threshold, 0.1);
    assert!(config.trigger_once);
    assert_eq!(config.variant, RevealVariant::FadeUp);
    assert_eq!(config.duration_ms, 800);
}

#[test]
fn config_threshold_is_clamped() {
    assert_eq!(RevealConfig::default().with_threshold(1.5).threshold, 1.0);
    assert_eq!(RevealConfig::default().with_threshold(-0.2).threshold, 0.0);
    assert_eq!(RevealConfig::default().with_threshold(f64::NAN).threshold, DEFAULT_THRESHOLD);
}

#[test]
fn stagger_delay_scales_and_saturates() {
    assert_eq!(stagger_delay_ms(0, 200), 0);
    assert_eq!(stagger_delay_ms(3, 200), 600);
    assert_eq!(stagger_delay_ms(usize::MAX, 200), u32::MAX);
}

// =============================================================
// Coordinator transitions
// =============================================================

#[test]
fn observe_starts_hidden_and_observing() {
    let mut c = RevealCoordinator::new();
    let id = c.observe(RevealConfig::default());
    assert_eq!(c.state(id), Some(RevealState::Hidden));
    assert!(c.is_observing(id));
}

#[test]
fn threshold_boundary() {
    let mut c = RevealCoordinator::new();
    let id = c.observe(RevealConfig::default().with_threshold(0.1));

    assert_eq!(c.update(id, 0.09), None);
    assert_eq!(c.state(id), Some(RevealState::Hidden));

    assert_eq!(c.update(id, 0.10), Some(RevealState::Revealed));
    assert_eq!(c.state(id), Some(RevealState::Revealed));
}

#[test]
fn trigger_once_never_hides_again() {
    let mut c = RevealCoordinator::new();
    let id = c.observe(RevealConfig::default().with_trigger_once(true));

    assert_eq!(c.update(id, 0.5), Some(RevealState::Revealed));
    assert!(!c.is_observing(id));

    for ratio in [0.0, 0.05, 0.8, 0.0, 1.0] {
        assert_eq!(c.update(id, ratio), None);
        assert_eq!(c.state(id), Some(RevealState::Revealed));
    }
}

#[test]
fn repeating_target_hides_and_reveals() {
    let mut c = RevealCoordinator::new();
    let id = c.observe(RevealConfig::default().with_trigger_once(false).with_threshold(0.3));

    assert_eq!(c.update(id, 0.4), Some(RevealState::Revealed));
    assert_eq!(c.update(id, 0.9), None);
    assert_eq!(c.update(id, 0.1), Some(RevealState::Hidden));
    assert_eq!(c.update(id, 0.0), None);
    assert_eq!(c.update(id, 0.3), Some(RevealState::Revealed));
    assert!(c.is_observing(id));
}

#[test]
fn nan_ratio_reads_as_zero() {
    let mut c = RevealCoordinator::new();
    let id = c.observe(RevealConfig::default().with_threshold(0.0));
    assert_eq!(c.update(id, f64::NAN), Some(RevealState::Revealed));
}

#[test]
fn targets_are_independent() {
    let mut c = RevealCoordinator::new();
    let a = c.observe(RevealConfig::default());
    let b = c.observe(RevealConfig::default().with_threshold(0.9));

    c.update(a, 0.5);
    c.update(b, 0.5);

    assert_eq!(c.state(a), Some(RevealState::Revealed));
    assert_eq!(c.state(b), Some(RevealState::Hidden));
}

#[test]
fn unsupported_coordinator_fails_open() {
    let mut c = RevealCoordinator::unsupported();
    let id = c.observe(RevealConfig::default());
    assert!(!c.is_supported());
    assert_eq!(c.state(id), Some(RevealState::Revealed));
    assert!(!c.is_observing(id));
    assert_eq!(c.update(id, 0.0), None);
}

#[test]
fn force_reveal_stops_observation() {
    let mut c = RevealCoordinator::new();
    let id = c.observe(RevealConfig::default().with_trigger_once(false));
    assert_eq!(c.force_reveal(id), Some(RevealState::Revealed));
    assert_eq!(c.force_reveal(id), None);
    assert_eq!(c.update(id, 0.0), None);
    assert_eq!(c.state(id), Some(RevealState::Revealed));
}

// =============================================================
// Release
// =============================================================

#[test]
fn release_removes_target() {
    let mut c = RevealCoordinator::new();
    let id = c.observe(RevealConfig::default());
    assert!(c.release(id));
    assert!(!c.release(id));
    assert_eq!(c.state(id), None);
    assert_eq!(c.update(id, 1.0), None);
}

#[test]
fn release_all_tears_down_page() {
    let mut c = RevealCoordinator::new();
    let ids = (0..4).map(|_| c.observe(RevealConfig::default())).collect::<Vec<_>>();
    assert_eq!(c.len(), 4);
    c.release_all();
    assert!(c.is_empty());
    assert!(ids.iter().all(|id| c.state(*id).is_none()));
}

#[test]
fn ids_are_not_reused_after_release() {
    let mut c = RevealCoordinator::new();
    let a = c.observe(RevealConfig::default());
    c.release(a);
    let b = c.observe(RevealConfig::default());
    assert_ne!(a, b);
}

#[test]
fn handle_shares_one_coordinator() {
    let handle = RevealHandle::default();
    let other = handle.clone();
    let id = handle.observe(RevealConfig::default());
    assert_eq!(other.update(id, 1.0), Some(RevealState::Revealed));
    assert_eq!(handle.state(id), Some(RevealState::Revealed));
    assert_eq!(handle.active_targets(), 1);
    other.release(id);
    assert_eq!(handle.active_targets(), 0);
}
