use leptos::prelude::*;

use crate::routes::DASHBOARD_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found."</h1>
            <a href=DASHBOARD_PATH>"Go to dashboard"</a>
        </div>
    }
}
