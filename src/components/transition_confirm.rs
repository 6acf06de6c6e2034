//! Transition Confirm Component
//!
//! Suspend or recover button with a confirmation dialog. The row decides
//! which one to show from the record's current flag.

use election_admin_core::{submit, AdminEntity, FieldErrors, Transition};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::modal::{DialogSignal, Modal};
use crate::commands::RestService;
use crate::context::AppContext;

#[component]
pub fn TransitionConfirm<E: AdminEntity>(
    record: E,
    service: RestService<E>,
    refresh: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let dialog = DialogSignal::new();
    let transition = Transition::for_flag(record.is_active());
    let id = record.id();
    let prompt = transition.prompt(E::SINGULAR, record.name());
    let service = StoredValue::new(service);

    let confirm = move |_| {
        let service = service.get_value();
        spawn_local(async move {
            submit(
                &dialog,
                &FieldErrors::new(),
                move || async move { transition.apply::<E, _>(&service, id).await },
                &ctx,
                move || refresh.run(()),
            )
            .await;
        });
    };

    let button_class = match transition {
        Transition::Suspend => "btn btn-destructive",
        Transition::Recover => "btn btn-outline",
    };

    view! {
        <button type="button" class=button_class on:click=move |_| dialog.open()>
            {transition.label()}
        </button>
        <Modal title=format!("{} {}", transition.label(), E::SINGULAR) dialog=dialog>
            <p class="confirm-prompt">{prompt.clone()}</p>
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| dialog.close()>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class=button_class
                    disabled=move || dialog.is_submitting()
                    on:click=confirm
                >
                    {move || if dialog.is_submitting() { "Working..." } else { transition.label() }}
                </button>
            </div>
        </Modal>
    }
}
