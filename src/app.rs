//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::toaster::Toaster;
use crate::config::ClientConfig;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, task_details::TaskDetailsPage,
    tasks::TasksPage, team::TeamPage, trash::TrashPage,
};
use crate::routes::DASHBOARD_PATH;
use crate::state::session::{SESSION_STORAGE_KEY, SessionAction, SessionStore};
use crate::state::tasks::TasksState;
use crate::state::team::TeamState;
use crate::state::toast::ToastQueue;
use crate::types::UserRef;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, session, data stores, and the toast queue, then sets up
/// routing with every page except login behind the [`Layout`] guard. The
/// stored user is read back in an effect once the app is mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let session = RwSignal::new(SessionStore::loading());
    let team = RwSignal::new(TeamState::default());

    provide_context(config);
    provide_context(session);
    provide_context(RwSignal::new(TasksState::default()));
    provide_context(team);
    provide_context(RwSignal::new(ToastQueue::new(config.toast_duration_ms)));

    // Runs after mount; the server render and the first client render both
    // see a loading session.
    Effect::new(move || {
        let restored = storage::load_json::<UserRef>(SESSION_STORAGE_KEY);
        if let Some(user) = &restored {
            leptos::logging::log!("restored session for {}", user.email);
            team.update(|t| t.ensure_member(user));
        }
        session.maybe_update(|s| s.dispatch(SessionAction::Restored(restored)));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/taskmanager.css"/>
        <Title text="TaskMe"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <ParentRoute path=StaticSegment("") view=Layout>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("tasks") view=TasksPage/>
                        <Route path=(StaticSegment("completed"), ParamSegment("status")) view=TasksPage/>
                        <Route path=(StaticSegment("in-progress"), ParamSegment("status")) view=TasksPage/>
                        <Route path=(StaticSegment("todo"), ParamSegment("status")) view=TasksPage/>
                        <Route path=StaticSegment("team") view=TeamPage/>
                        <Route path=StaticSegment("trashed") view=TrashPage/>
                        <Route path=(StaticSegment("task"), ParamSegment("id")) view=TaskDetailsPage/>
                    </ParentRoute>
                    <Route path=StaticSegment("log-in") view=LoginPage/>
                </Routes>
                <Toaster/>
                <ScrollTopButton/>
            </main>
        </Router>
    }
}
