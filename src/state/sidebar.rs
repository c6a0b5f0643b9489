//! Mobile sidebar visibility state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the slide-in overlay shown below the responsive breakpoint. The
//! `MobileSidebar` component owns one controller, feeds it user intents and
//! timer elapses, and publishes the boolean it reports into the session store.
//!
//! TRANSITIONS
//! ===========
//! `Closed -> Opening` on open, `Opening -> Open` on timer, `Open -> Closing`
//! on close, `Closing -> Closed` on timer. A close while `Opening` drops the
//! open timer and starts closing at once; an open while `Closing` reverses.
//! Only the pending timer's token is honoured, so a cancelled timer that still
//! reports in cannot move the machine.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::util::timer::{TransitionScheduler, TransitionToken};

/// Visible phase of the mobile sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl SidebarPhase {
    /// Overlay is in the DOM. Once `Closed`, it is removed entirely.
    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Overlay accepts pointer input and is faded in.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Why a close was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseCause {
    OverlayTap,
    CloseButton,
    RouteChange,
}

/// Where a tap landed inside the mobile sidebar overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapTarget {
    /// The sliding panel or anything inside it.
    Panel,
    /// The dimmed backdrop around the panel.
    Overlay,
}

pub struct SidebarController<S: TransitionScheduler> {
    phase: SidebarPhase,
    duration_ms: u32,
    scheduler: S,
    pending: Option<(TransitionToken, S::Guard)>,
    next_token: u64,
}

impl<S: TransitionScheduler> SidebarController<S> {
    pub fn new(scheduler: S, duration_ms: u32) -> Self {
        Self { phase: SidebarPhase::Closed, duration_ms, scheduler, pending: None, next_token: 0 }
    }

    pub fn phase(&self) -> SidebarPhase {
        self.phase
    }

    /// Token of the armed transition timer, if any.
    pub fn pending_token(&self) -> Option<TransitionToken> {
        self.pending.as_ref().map(|(token, _)| *token)
    }

    /// Hamburger tap. Returns the open flag to publish, or `None` when the
    /// request changes nothing.
    pub fn request_open(&mut self) -> Option<bool> {
        match self.phase {
            SidebarPhase::Closed | SidebarPhase::Closing => {
                self.enter(SidebarPhase::Opening);
                Some(true)
            }
            SidebarPhase::Opening | SidebarPhase::Open => None,
        }
    }

    /// Close request from any source. Idempotent while closed or closing.
    pub fn request_close(&mut self, cause: CloseCause) -> Option<bool> {
        match self.phase {
            SidebarPhase::Opening | SidebarPhase::Open => {
                leptos::logging::log!("sidebar closing ({cause:?})");
                self.enter(SidebarPhase::Closing);
                Some(false)
            }
            SidebarPhase::Closed | SidebarPhase::Closing => None,
        }
    }

    /// Tap routed from the overlay subtree. Taps on the panel never reach
    /// the overlay's dismiss handler.
    pub fn tap(&mut self, target: TapTarget) -> Option<bool> {
        match target {
            TapTarget::Panel => None,
            TapTarget::Overlay => self.request_close(CloseCause::OverlayTap),
        }
    }

    /// Route changed while the sidebar may be showing.
    pub fn route_changed(&mut self) -> Option<bool> {
        self.request_close(CloseCause::RouteChange)
    }

    /// Follow an open flag written to the session by someone else.
    pub fn sync(&mut self, open: bool) -> Option<bool> {
        if open { self.request_open() } else { self.request_close(CloseCause::CloseButton) }
    }

    /// Timer elapse. Tokens other than the pending one are ignored.
    pub fn transition_elapsed(&mut self, token: TransitionToken) {
        if self.pending_token() != Some(token) {
            return;
        }
        self.pending = None;
        self.phase = match self.phase {
            SidebarPhase::Opening => SidebarPhase::Open,
            SidebarPhase::Closing => SidebarPhase::Closed,
            settled => settled,
        };
    }

    fn enter(&mut self, phase: SidebarPhase) {
        // Dropping the previous guard cancels its timer before the new one is armed.
        self.pending = None;
        self.next_token += 1;
        let token = TransitionToken(self.next_token);
        let guard = self.scheduler.schedule(token, self.duration_ms);
        self.pending = Some((token, guard));
        self.phase = phase;
    }
}
