//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Periodic timers (the spawn interval)
//! - Frame scheduling
//! - Canvas sizing and pointer coordinates

#[cfg(target_arch = "wasm32")]
pub mod web;

/// A periodic host timer owned by exactly one session.
///
/// `cancel` must stop future callbacks. Implementations also cancel on drop,
/// and calling `cancel` more than once is harmless.
pub trait ScopedTimer {
    fn cancel(&mut self);
}

/// Timer driven by hand, for headless runs and tests
#[derive(Debug, Default)]
pub struct ManualTimer {
    cancelled: std::rc::Rc<std::cell::Cell<u32>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared counter of `cancel` calls, readable after the timer is gone
    pub fn cancel_count(&self) -> std::rc::Rc<std::cell::Cell<u32>> {
        self.cancelled.clone()
    }
}

impl ScopedTimer for ManualTimer {
    fn cancel(&mut self) {
        self.cancelled.set(self.cancelled.get() + 1);
    }
}
