//! Cross-cycle classifier state.
//!
//! Everything the classifier remembers between cycles lives here and
//! nowhere else: the latches that debounce alerts, the steering-unpressed
//! counter and a short history of "intent to enable" button presses.  The
//! classifier passes it by `&mut` into the rule functions, so which rules
//! are stateful is visible from their signatures.

use heapless::Deque;

/// Samples of cruise-button history kept for brands that gate enablement
/// on recent driver intent.
pub const PREV_BUTTON_SAMPLES: usize = 8;

// ---------------------------------------------------------------------------
// Button window
// ---------------------------------------------------------------------------

/// Fixed-capacity FIFO of per-cycle booleans.
///
/// Pushing into a full window evicts the oldest sample.  The capacity is a
/// type parameter and never changes.
#[derive(Debug, Clone, Default)]
pub struct ButtonWindow<const N: usize> {
    samples: Deque<bool, N>,
}

impl<const N: usize> ButtonWindow<N> {
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Record one cycle's sample.
    pub fn push(&mut self, pressed: bool) {
        if self.samples.is_full() {
            let _ = self.samples.pop_front();
        }
        // Cannot fail: one slot was freed above if the deque was full.
        let _ = self.samples.push_back(pressed);
    }

    /// `true` if any retained sample is set.
    pub fn any(&self) -> bool {
        self.samples.iter().any(|&s| s)
    }

    /// Number of retained samples (at most `N`).
    #[cfg(test)]
    fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[cfg(test)]
    const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> PartialEq for ButtonWindow<N> {
    fn eq(&self, other: &Self) -> bool {
        self.samples.iter().eq(other.samples.iter())
    }
}

// ---------------------------------------------------------------------------
// Hysteresis state
// ---------------------------------------------------------------------------

/// Mutable latches owned by one classifier instance.
#[derive(Debug, Clone, PartialEq)]
pub struct HysteresisState {
    /// Low-speed steering alert latch (brands with a speed band).
    pub low_speed_alert: bool,
    /// Driver is overriding through a temporary steering fault; stay quiet.
    pub no_steer_warning: bool,
    /// Current temporary steering fault is being reported silently.
    pub silent_steer_warning: bool,
    /// Consecutive cycles without driver steering input.
    pub steering_unpressed: u32,
    /// Per-cycle "intent to enable" button history.
    pub cruise_buttons: ButtonWindow<PREV_BUTTON_SAMPLES>,
}

impl Default for HysteresisState {
    fn default() -> Self {
        Self::new()
    }
}

impl HysteresisState {
    pub const fn new() -> Self {
        Self {
            low_speed_alert: false,
            no_steer_warning: false,
            // A fault already present at startup must not alert loudly.
            silent_steer_warning: true,
            steering_unpressed: 0,
            cruise_buttons: ButtonWindow::new(),
        }
    }
}
