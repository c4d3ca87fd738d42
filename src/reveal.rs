/// Visible fraction a block must reach before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Length of the reveal transition.
pub const REVEAL_DURATION_MS: u32 = 600;

const BASE_CLASSES: &str = "reveal transition-all ease-out";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn new() -> Self {
        Self::Hidden
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }

    /// Feeds one intersection observation in. Returns `true` only for the
    /// observation that moves the block from hidden to visible.
    pub fn observe(&mut self, ratio: f64, is_intersecting: bool) -> bool {
        if self.is_visible() || !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        *self = RevealState::Visible;
        true
    }

    /// Used when intersection observation isn't available.
    pub fn force_visible(&mut self) -> bool {
        let changed = !self.is_visible();
        *self = RevealState::Visible;
        changed
    }

    pub fn classes(&self) -> String {
        let state = match self {
            RevealState::Hidden => "opacity-0 translate-y-12",
            RevealState::Visible => "opacity-100 translate-y-0",
        };
        format!("{BASE_CLASSES} {state}")
    }

    /// Inline style carrying [`REVEAL_DURATION_MS`].
    pub fn transition_style() -> String {
        format!("transition-duration: {REVEAL_DURATION_MS}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let state = RevealState::new();
        assert!(!state.is_visible());
        assert!(state.classes().contains("opacity-0"));
    }

    #[test]
    fn test_fires_once() {
        let mut state = RevealState::new();
        assert!(state.observe(0.25, true));
        assert!(state.is_visible());

        // scrolling away and back again never fires a second time
        assert!(!state.observe(0.0, false));
        assert!(state.is_visible());
        assert!(!state.observe(0.5, true));
        assert!(!state.observe(1.0, true));
        assert!(state.is_visible());
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut state = RevealState::new();
        assert!(!state.observe(0.05, true));
        assert!(!state.observe(0.5, false));
        assert!(!state.is_visible());
        assert!(state.observe(REVEAL_THRESHOLD, true));
    }

    #[test]
    fn test_many_crossings_fire_at_most_once() {
        let mut state = RevealState::new();
        let fired = (0..20)
            .map(|i| {
                let ratio = if i % 2 == 0 { 0.0 } else { 0.4 };
                state.observe(ratio, i % 2 == 1)
            })
            .filter(|fired| *fired)
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_force_visible() {
        let mut state = RevealState::new();
        assert!(state.force_visible());
        assert!(!state.force_visible());
        assert!(!state.observe(1.0, true));
        assert!(state.classes().contains("opacity-100"));
    }

    #[test]
    fn test_no_observer_shows_block_without_any_entry() {
        // the wrapper forces blocks visible when IntersectionObserver is missing
        let mut state = RevealState::new();
        assert!(state.force_visible());
        assert!(state.is_visible());
        assert!(!state.observe(0.0, false));
        assert!(state.is_visible());
    }

    #[test]
    fn test_transition_style_uses_duration() {
        assert_eq!(RevealState::transition_style(), "transition-duration: 600ms");
        assert!(!RevealState::new().classes().contains("duration-"));
    }
}
