//! Scroll-reveal coordination.
//!
//! Regions register with a [`RevealCoordinator`] when they mount and feed it
//! intersection ratios as the viewport moves. The coordinator owns the
//! hidden/revealed state machine; the `AnimatedSection` component owns the
//! browser `IntersectionObserver` and renders the style this module computes.
//!
//! DESIGN
//! ======
//! The coordinator is engine-agnostic: it never touches the DOM, so state
//! transitions are unit-testable natively. When intersection observation is
//! unavailable the coordinator fails open and registers every target as
//! already revealed, so content is never stuck invisible.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_DURATION_MS: u32 = 800;
pub const DEFAULT_EASING: &str = "ease-out";

/// Entrance animation applied when a region is revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealVariant {
    FadeIn,
    #[default]
    FadeUp,
    FadeDown,
    SlideLeft,
    SlideRight,
    ZoomIn,
    ZoomOut,
}

impl RevealVariant {
    pub const ALL: [Self; 7] = [
        Self::FadeIn,
        Self::FadeUp,
        Self::FadeDown,
        Self::SlideLeft,
        Self::SlideRight,
        Self::ZoomIn,
        Self::ZoomOut,
    ];

    /// Parse a kebab-case name; unknown names fall back to fade-up.
    pub fn parse(name: &str) -> Self {
        match name {
            "fade-in" => Self::FadeIn,
            "fade-down" => Self::FadeDown,
            "slide-left" => Self::SlideLeft,
            "slide-right" => Self::SlideRight,
            "zoom-in" => Self::ZoomIn,
            "zoom-out" => Self::ZoomOut,
            _ => Self::FadeUp,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::FadeUp => "fade-up",
            Self::FadeDown => "fade-down",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
        }
    }

    /// Visual parameters while the region is hidden.
    pub fn hidden(self) -> VisualParams {
        let base = VisualParams { opacity: 0.0, ..VisualParams::VISIBLE };
        match self {
            Self::FadeIn => base,
            Self::FadeUp => VisualParams { offset_y: 50.0, ..base },
            Self::FadeDown => VisualParams { offset_y: -50.0, ..base },
            Self::SlideLeft => VisualParams { offset_x: -100.0, ..base },
            Self::SlideRight => VisualParams { offset_x: 100.0, ..base },
            Self::ZoomIn => VisualParams { scale: 0.9, ..base },
            Self::ZoomOut => VisualParams { scale: 1.1, ..base },
        }
    }

    /// Visual parameters once revealed. Identical for every variant.
    pub fn visible(self) -> VisualParams {
        VisualParams::VISIBLE
    }
}

/// Opacity, translation (px) and scale for one visual state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl VisualParams {
    pub const VISIBLE: Self = Self { opacity: 1.0, offset_x: 0.0, offset_y: 0.0, scale: 1.0 };

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.offset_x, self.offset_y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Per-target observation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub trigger_once: bool,
    pub variant: RevealVariant,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            trigger_once: true,
            variant: RevealVariant::default(),
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            easing: DEFAULT_EASING,
        }
    }
}

impl RevealConfig {
    pub fn new(variant: RevealVariant) -> Self {
        Self { variant, ..Self::default() }
    }

    /// Threshold is clamped to `[0, 1]`; NaN resets to the default.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        self
    }

    #[must_use]
    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Inline style for `state`, including the transition timing.
    pub fn style_for(&self, state: RevealState) -> String {
        let params = match state {
            RevealState::Hidden => self.variant.hidden(),
            RevealState::Revealed => self.variant.visible(),
        };
        format!(
            "{} transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            params.to_css(),
            d = self.duration_ms,
            e = self.easing,
            delay = self.delay_ms,
        )
    }
}

/// Entrance delay for the `index`-th item of a staggered grid.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Registry handle for one observed region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(u64);

#[derive(Clone, Copy, Debug)]
struct RevealTarget {
    config: RevealConfig,
    state: RevealState,
    observing: bool,
}

/// Registry of observed regions and their reveal state.
#[derive(Debug)]
pub struct RevealCoordinator {
    targets: HashMap<TargetId, RevealTarget>,
    next_id: u64,
    supported: bool,
}

impl Default for RevealCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealCoordinator {
    pub fn new() -> Self {
        Self { targets: HashMap::new(), next_id: 0, supported: true }
    }

    /// Coordinator for environments without intersection observation.
    pub fn unsupported() -> Self {
        Self { supported: false, ..Self::new() }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Register a target. Observation starts immediately.
    pub fn observe(&mut self, config: RevealConfig) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        let target = if self.supported {
            RevealTarget { config, state: RevealState::Hidden, observing: true }
        } else {
            RevealTarget { config, state: RevealState::Revealed, observing: false }
        };
        self.targets.insert(id, target);
        id
    }

    /// Feed an intersection ratio. Returns the new state when it changed.
    pub fn update(&mut self, id: TargetId, ratio: f64) -> Option<RevealState> {
        let target = self.targets.get_mut(&id)?;
        if !target.observing {
            return None;
        }
        let ratio = if ratio.is_nan() { 0.0 } else { ratio };
        let once = target.config.trigger_once;

        if ratio >= target.config.threshold {
            if target.state == RevealState::Revealed {
                return None;
            }
            target.state = RevealState::Revealed;
            if once {
                target.observing = false;
            }
            return Some(RevealState::Revealed);
        }

        if !once && target.state == RevealState::Revealed {
            target.state = RevealState::Hidden;
            return Some(RevealState::Hidden);
        }
        None
    }

    /// Reveal and stop observing regardless of ratio. Used when the browser
    /// refuses to create an observer for this target.
    pub fn force_reveal(&mut self, id: TargetId) -> Option<RevealState> {
        let target = self.targets.get_mut(&id)?;
        target.observing = false;
        if target.state == RevealState::Revealed {
            return None;
        }
        target.state = RevealState::Revealed;
        Some(RevealState::Revealed)
    }

    pub fn state(&self, id: TargetId) -> Option<RevealState> {
        self.targets.get(&id).map(|t| t.state)
    }

    pub fn config(&self, id: TargetId) -> Option<RevealConfig> {
        self.targets.get(&id).map(|t| t.config)
    }

    pub fn is_observing(&self, id: TargetId) -> bool {
        self.targets.get(&id).is_some_and(|t| t.observing)
    }

    /// Stop tracking a target. Returns `false` if it was already released.
    pub fn release(&mut self, id: TargetId) -> bool {
        self.targets.remove(&id).is_some()
    }

    pub fn release_all(&mut self) {
        self.targets.clear();
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Cloneable, context-friendly handle around a shared coordinator.
#[derive(Clone, Debug, Default)]
pub struct RevealHandle {
    inner: Arc<Mutex<RevealCoordinator>>,
}

impl RevealHandle {
    pub fn new(coordinator: RevealCoordinator) -> Self {
        Self { inner: Arc::new(Mutex::new(coordinator)) }
    }

    /// Coordinator matching the current environment's capabilities.
    pub fn for_environment() -> Self {
        #[cfg(feature = "csr")]
        {
            let supported = web_sys::window().is_some_and(|w| {
                js_sys::Reflect::has(&w, &wasm_bindgen::JsValue::from_str("IntersectionObserver")).unwrap_or(false)
            });
            if !supported {
                log::info!("reveal: IntersectionObserver unavailable, all sections visible");
                return Self::new(RevealCoordinator::unsupported());
            }
        }
        Self::new(RevealCoordinator::new())
    }

    pub fn observe(&self, config: RevealConfig) -> TargetId {
        self.lock().observe(config)
    }

    pub fn update(&self, id: TargetId, ratio: f64) -> Option<RevealState> {
        self.lock().update(id, ratio)
    }

    pub fn force_reveal(&self, id: TargetId) -> Option<RevealState> {
        self.lock().force_reveal(id)
    }

    pub fn state(&self, id: TargetId) -> Option<RevealState> {
        self.lock().state(id)
    }

    pub fn is_observing(&self, id: TargetId) -> bool {
        self.lock().is_observing(id)
    }

    pub fn release(&self, id: TargetId) -> bool {
        self.lock().release(id)
    }

    pub fn active_targets(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, RevealCoordinator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
