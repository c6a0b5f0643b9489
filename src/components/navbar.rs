//! Top bar: drawer toggle, page title, and the signed-in user's menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::routes::{AppRoute, LOGIN_PATH};
use crate::state::session::{SESSION_STORAGE_KEY, SessionAction, SessionStore};
use crate::util::scroll::is_below_breakpoint;
use crate::util::storage;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<ClientConfig>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let title = move || AppRoute::parse(&pathname.get()).title();
    let user = move || session.with(|s| s.session().user.clone());

    let on_toggle_drawer = move |_| {
        if is_below_breakpoint(config.mobile_breakpoint_px) {
            session.maybe_update(|s| s.dispatch(SessionAction::SetOpenSidebar(true)));
        }
    };

    let on_logout = move |_| {
        menu_open.set(false);
        storage::remove(SESSION_STORAGE_KEY);
        session.maybe_update(|s| s.dispatch(SessionAction::Logout));
        leptos::logging::log!("signed out");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <button class="navbar__menu" title="Open menu" on:click=on_toggle_drawer>
                "☰"
            </button>
            <h1 class="navbar__title">{title}</h1>
            <div class="navbar__user">
                <button class="navbar__avatar" title="Account" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    {move || user().map(|u| u.initials()).unwrap_or_default()}
                </button>
                <div class=move || {
                    if menu_open.get() { "navbar__dropdown navbar__dropdown--open" } else { "navbar__dropdown" }
                }>
                    <div class="navbar__identity">
                        <span class="navbar__name">{move || user().map(|u| u.name).unwrap_or_default()}</span>
                        <span class="navbar__email">{move || user().map(|u| u.email).unwrap_or_default()}</span>
                    </div>
                    <button class="navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
