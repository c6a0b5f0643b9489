//! Cancellable one-shot timers for UI transitions.
//!
//! DESIGN
//! ======
//! A scheduler hands back a guard for each armed timer. Dropping the guard
//! cancels the timer, so whoever owns the guard decides its lifetime and every
//! exit path releases it. Elapse is reported by token so an owner can ignore
//! a timer it has already replaced.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Identifies one armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionToken(pub u64);

/// Arms one-shot timers that report back with their token.
pub trait TransitionScheduler {
    /// Keeps the timer alive; dropping it cancels the timer.
    type Guard;

    fn schedule(&self, token: TransitionToken, after_ms: u32) -> Self::Guard;
}

/// Browser scheduler backed by `gloo_timers` timeouts.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct TimeoutScheduler {
    on_elapsed: std::rc::Rc<dyn Fn(TransitionToken)>,
}

#[cfg(feature = "hydrate")]
impl TimeoutScheduler {
    pub fn new(on_elapsed: std::rc::Rc<dyn Fn(TransitionToken)>) -> Self {
        Self { on_elapsed }
    }
}

#[cfg(feature = "hydrate")]
impl TransitionScheduler for TimeoutScheduler {
    type Guard = gloo_timers::callback::Timeout;

    fn schedule(&self, token: TransitionToken, after_ms: u32) -> Self::Guard {
        let on_elapsed = std::rc::Rc::clone(&self.on_elapsed);
        gloo_timers::callback::Timeout::new(after_ms, move || on_elapsed(token))
    }
}

/// Scheduler whose timers never fire. Used for server renders, where the
/// sidebar never leaves `Closed`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertScheduler;

impl TransitionScheduler for InertScheduler {
    type Guard = ();

    fn schedule(&self, _token: TransitionToken, _after_ms: u32) -> Self::Guard {}
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;
