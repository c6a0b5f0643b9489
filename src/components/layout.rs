//! Guarded layout route: the authenticated shell or a redirect to login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders inside this component's `<Outlet/>`. The
//! guard outcome is a memo over the session and the current location; when
//! it turns unauthenticated the requested location is remembered in the
//! session and the router replaces the entry with the login page. Nothing
//! renders while the stored session is still loading.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::mobile_sidebar::MobileSidebar;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::routes;
use crate::state::guard::{self, GuardOutcome};
use crate::state::session::{SessionAction, SessionStore};

#[component]
pub fn Layout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let location = use_location();
    let (pathname, search, hash) = (location.pathname, location.search, location.hash);
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let path = routes::attempted_path(&pathname.get(), &search.get(), &hash.get());
        session.with(|s| guard::evaluate(s.session(), &path))
    });

    Effect::new(move || {
        let GuardOutcome::Unauthenticated(redirect) = outcome.get() else {
            return;
        };
        if session.with_untracked(|s| guard::should_remember(s.session(), &redirect)) {
            session.maybe_update(|s| s.dispatch(SessionAction::RememberReturnPath(redirect.from.clone())));
        }
        leptos::logging::log!("no session for {}; redirecting to {}", redirect.from, redirect.to);
        navigate(redirect.to, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    move || match outcome.get() {
        GuardOutcome::Pending => ().into_any(),
        GuardOutcome::Authenticated => view! { <Shell/> }.into_any(),
        GuardOutcome::Unauthenticated(_) => {
            view! { <div class="layout__redirect">"Redirecting to login..."</div> }.into_any()
        }
    }
}

#[component]
fn Shell() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let session_view = Signal::derive(move || session.with(|s| s.session().clone()));
    let dispatch = Callback::new(move |action: SessionAction| {
        session.maybe_update(|s| s.dispatch(action));
    });

    view! {
        <div class="shell">
            <aside class="shell__sidebar">
                <Sidebar/>
            </aside>
            <MobileSidebar session=session_view dispatch=dispatch/>
            <div class="shell__main">
                <Navbar/>
                <div class="shell__content">
                    <Outlet/>
                </div>
            </div>
        </div>
    }
}
