//! Slide-in navigation drawer for narrow viewports.
//!
//! DESIGN
//! ======
//! The drawer's lifecycle lives in a [`SidebarController`] kept in a local
//! stored value; this component only forwards taps, route changes, and timer
//! elapses into it and mirrors the resulting phase into a signal for
//! rendering. The session's open flag is the shared request channel: the
//! navbar sets it, the controller reports back whenever it commits to opening
//! or closing.

#[cfg(test)]
#[path = "mobile_sidebar_test.rs"]
mod mobile_sidebar_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::config::ClientConfig;
use crate::state::session::{Session, SessionAction};
use crate::state::sidebar::{CloseCause, SidebarController, SidebarPhase, TapTarget};
use crate::util::timer::TransitionToken;

#[cfg(feature = "hydrate")]
type Scheduler = crate::util::timer::TimeoutScheduler;
#[cfg(not(feature = "hydrate"))]
type Scheduler = crate::util::timer::InertScheduler;

type Controller = SidebarController<Scheduler>;

fn make_scheduler(on_elapsed: Rc<dyn Fn(TransitionToken)>) -> Scheduler {
    #[cfg(feature = "hydrate")]
    {
        crate::util::timer::TimeoutScheduler::new(on_elapsed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_elapsed;
        crate::util::timer::InertScheduler
    }
}

fn overlay_class(phase: SidebarPhase) -> &'static str {
    match phase {
        SidebarPhase::Opening | SidebarPhase::Open => "mobile-sidebar mobile-sidebar--visible",
        SidebarPhase::Closed | SidebarPhase::Closing => "mobile-sidebar",
    }
}

fn panel_class(phase: SidebarPhase) -> &'static str {
    match phase {
        SidebarPhase::Open => "mobile-sidebar__panel mobile-sidebar__panel--in",
        SidebarPhase::Opening => "mobile-sidebar__panel mobile-sidebar__panel--entering",
        SidebarPhase::Closing => "mobile-sidebar__panel mobile-sidebar__panel--leaving",
        SidebarPhase::Closed => "mobile-sidebar__panel",
    }
}

#[component]
pub fn MobileSidebar(#[prop(into)] session: Signal<Session>, dispatch: Callback<SessionAction>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let phase = RwSignal::new(SidebarPhase::Closed);
    let controller = StoredValue::new_local(None::<Controller>);

    let refresh = move || {
        let current = controller.with_value(|c| c.as_ref().map_or(SidebarPhase::Closed, Controller::phase));
        if phase.get_untracked() != current {
            phase.set(current);
        }
    };

    let on_elapsed: Rc<dyn Fn(TransitionToken)> = Rc::new(move |token| {
        controller.update_value(|c| {
            if let Some(c) = c.as_mut() {
                c.transition_elapsed(token);
            }
        });
        refresh();
    });
    controller.set_value(Some(SidebarController::new(make_scheduler(on_elapsed), config.sidebar_transition_ms)));

    let apply = move |step: &dyn Fn(&mut Controller) -> Option<bool>| {
        let flag = controller.try_update_value(|c| c.as_mut().and_then(|c| step(c))).flatten();
        refresh();
        if let Some(open) = flag {
            dispatch.run(SessionAction::SetOpenSidebar(open));
        }
    };

    Effect::new(move || {
        let open = session.with(|s| s.is_sidebar_open);
        apply(&move |c: &mut Controller| c.sync(open));
    });

    let pathname = use_location().pathname;
    Effect::new(move |previous: Option<String>| {
        let path = pathname.get();
        if previous.is_some_and(|p| p != path) {
            apply(&|c: &mut Controller| c.route_changed());
        }
        path
    });

    view! {
        <Show when=move || phase.get().is_mounted()>
            <div class=move || overlay_class(phase.get()) on:click=move |_| apply(&|c: &mut Controller| c.tap(TapTarget::Overlay))>
                <div
                    class=move || panel_class(phase.get())
                    on:click=move |ev| {
                        ev.stop_propagation();
                        apply(&|c: &mut Controller| c.tap(TapTarget::Panel));
                    }
                >
                    <div class="mobile-sidebar__header">
                        <button
                            class="mobile-sidebar__close"
                            title="Close menu"
                            on:click=move |_| apply(&|c: &mut Controller| c.request_close(CloseCause::CloseButton))
                        >
                            "✕"
                        </button>
                    </div>
                    <Sidebar/>
                </div>
            </div>
        </Show>
    }
}
