//! Entity Form Component
//!
//! Create/edit dialog for any `AdminEntity`. Fields come from the entity's
//! `FORM` declaration and are validated on every keystroke; a field's error
//! shows once it was touched or a submit was attempted.

use std::collections::BTreeSet;

use election_admin_core::{submit, validate, AdminEntity, EntityService, FieldErrors, FormValues};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::modal::{DialogSignal, Modal};
use crate::commands::RestService;
use crate::context::AppContext;

/// What the form submits
#[derive(Debug, Clone)]
pub enum FormMode<E> {
    Create,
    Edit(E),
}

#[component]
pub fn EntityForm<E: AdminEntity>(
    mode: FormMode<E>,
    service: RestService<E>,
    refresh: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let dialog = DialogSignal::new();

    let initial = match &mode {
        FormMode::Create => FormValues::blank(E::FORM),
        FormMode::Edit(record) => record.form_values(),
    };
    let is_create = matches!(mode, FormMode::Create);
    let (trigger_label, trigger_class, title) = if is_create {
        ("Create".to_string(), "btn btn-primary", format!("Create {}", E::SINGULAR))
    } else {
        ("Edit".to_string(), "btn btn-outline", format!("Edit {}", E::SINGULAR))
    };

    let values = RwSignal::new(initial.clone());
    let touched = RwSignal::new(BTreeSet::<&'static str>::new());
    let errors = Memo::new(move |_| values.with(|values| validate(E::FORM, values)));
    let initial = StoredValue::new(initial);
    let mode = StoredValue::new(mode);
    let service = StoredValue::new(service);

    let open_dialog = move |_| {
        // edits always start from the record; a half-typed create survives
        if !is_create {
            values.set(initial.get_value());
        }
        touched.set(BTreeSet::new());
        dialog.open();
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let errors = errors.get_untracked();
        let current = values.get_untracked();
        let mode = mode.get_value();
        let service = service.get_value();

        spawn_local(async move {
            let outcome = submit(
                &dialog,
                &errors,
                move || async move {
                    match mode {
                        FormMode::Create => service.create(&E::draft(&current)).await,
                        FormMode::Edit(record) => service.update(&record.with_edits(&current)).await,
                    }
                },
                &ctx,
                move || refresh.run(()),
            )
            .await;
            if is_create && outcome.succeeded() {
                values.try_set(FormValues::blank(E::FORM));
                touched.try_set(BTreeSet::new());
            }
        });
    };

    view! {
        <button type="button" class=trigger_class on:click=open_dialog>
            {trigger_label}
        </button>
        <Modal title=title dialog=dialog>
            <form class="entity-form" novalidate=true on:submit=on_submit>
                {fields::<E>(values, touched, errors, dialog)}
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| dialog.close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || dialog.is_submitting()>
                        {move || if dialog.is_submitting() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

fn fields<E: AdminEntity>(
    values: RwSignal<FormValues>,
    touched: RwSignal<BTreeSet<&'static str>>,
    errors: Memo<FieldErrors>,
    dialog: DialogSignal,
) -> impl IntoView {
    E::FORM
        .iter()
        .map(|field| {
            let key = field.key;
            let touch = move || touched.update(|keys| {
                keys.insert(key);
            });
            let message = move || {
                let visible = dialog.show_all_errors() || touched.with(|keys| keys.contains(key));
                visible
                    .then(|| errors.with(|errors| errors.get(key).cloned()))
                    .flatten()
            };
            view! {
                <label class="form-field">
                    <span class="form-label">{field.label}</span>
                    <input
                        type="text"
                        name=key
                        class=move || if message().is_some() { "input input-invalid" } else { "input" }
                        prop:value=move || values.with(|values| values.get(key).to_string())
                        on:input=move |ev| {
                            values.update(|values| values.set(key, event_target_value(&ev)));
                            touch();
                        }
                        on:blur=move |_| touch()
                    />
                    {move || message().map(|text| view! { <span class="form-error">{text}</span> })}
                </label>
            }
        })
        .collect_view()
}
