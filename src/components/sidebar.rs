//! Navigation link list shared by the desktop column and the mobile drawer.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{NAV_LINKS, is_active_link};

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"TaskMe"</div>
            <ul class="sidebar__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let link = *link;
                        let class = move || {
                            if is_active_link(&link, &pathname.get()) {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <li>
                                <a href=link.href class=class>
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
