//! Floating scroll-to-top button.

use leptos::prelude::*;

use crate::util::scroll::scroll_to_top;

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    view! {
        <button class="scroll-top" title="Scroll to top" on:click=move |_| scroll_to_top()>
            "↑"
        </button>
    }
}
