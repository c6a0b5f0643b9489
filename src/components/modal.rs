//! Backdrop + dialog frame shared by the create/update forms.

use leptos::prelude::*;

/// Modal frame. Clicking the backdrop closes it; clicks inside the dialog
/// stop at the dialog.
#[component]
pub fn ModalWrapper(on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
