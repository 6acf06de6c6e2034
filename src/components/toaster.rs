//! Toaster Component
//!
//! Bottom-center stack of notifications pushed through `AppContext`.

use leptos::prelude::*;

use crate::context::{AppContext, Toast};

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (id, class) = (toast.id, toast.class());
                    view! {
                        <div class=class role="status">
                            <span class="toast-message">{toast.message}</span>
                            <button type="button" class="toast-close" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
