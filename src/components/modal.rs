//! Modal Component
//!
//! Dialog shell shared by the form and confirm dialogs, plus the reactive
//! owner of their `DialogState`.

use election_admin_core::{DialogHost, DialogState};
use leptos::prelude::*;

/// `DialogState` held in a signal
///
/// Requests outlive the row that started them (a refresh re-renders the
/// table), so writes to a disposed signal are dropped.
#[derive(Clone, Copy)]
pub struct DialogSignal(pub RwSignal<DialogState>);

impl DialogSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(DialogState::default()))
    }

    pub fn is_open(&self) -> bool {
        self.0.with(|state| state.open)
    }

    pub fn is_submitting(&self) -> bool {
        self.0.with(|state| state.submitting)
    }

    pub fn show_all_errors(&self) -> bool {
        self.0.with(|state| state.show_all_errors)
    }

    pub fn open(&self) {
        self.0.update(|state| state.open());
    }

    pub fn close(&self) {
        self.0.update(|state| state.close());
    }
}

impl DialogHost for DialogSignal {
    fn update_dialog<R>(&self, f: impl FnOnce(&mut DialogState) -> R) -> R {
        let mut state = self.0.try_get_untracked().unwrap_or_default();
        let result = f(&mut state);
        self.0.try_set(state);
        result
    }
}

/// Overlay with a title bar; clicking the backdrop or × closes it
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    dialog: DialogSignal,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || dialog.is_open()>
            <div class="modal-backdrop" on:click=move |_| dialog.close()>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <header class="modal-header">
                        <h2>{title.clone()}</h2>
                        <button type="button" class="modal-close" on:click=move |_| dialog.close()>
                            "×"
                        </button>
                    </header>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
