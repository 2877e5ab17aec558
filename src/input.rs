//! Input sampling boundary
//!
//! The core consumes four already-debounced level signals, sampled once per
//! tick. How keys are captured (event listeners, polling, replay files) is
//! the platform's business, not the simulation's.

/// Boolean key-state queries consumed by the update loop
pub trait InputSource {
    /// Move-left level signal
    fn is_left_pressed(&self) -> bool;
    /// Move-right level signal
    fn is_right_pressed(&self) -> bool;
    /// Pause request (ESC-equivalent)
    fn is_pause_pressed(&self) -> bool;
    /// Confirm (space-equivalent): resumes from pause, restarts from an end
    /// state
    fn is_confirm_pressed(&self) -> bool;
}

/// Plain key latch for platform bindings and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub pause: bool,
    pub confirm: bool,
}

impl KeyState {
    /// Release every key (e.g. on window blur)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl InputSource for KeyState {
    fn is_left_pressed(&self) -> bool {
        self.left
    }

    fn is_right_pressed(&self) -> bool {
        self.right
    }

    fn is_pause_pressed(&self) -> bool {
        self.pause
    }

    fn is_confirm_pressed(&self) -> bool {
        self.confirm
    }
}
