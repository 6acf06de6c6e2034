//! Status Tabs Component
//!
//! All / Active / Archived switcher over one entity collection.

use election_admin_core::StatusFilter;
use leptos::prelude::*;

#[component]
pub fn StatusTabs(active: RwSignal<StatusFilter>) -> impl IntoView {
    view! {
        <div class="tabs" role="tablist">
            {StatusFilter::TABS
                .into_iter()
                .map(|status| {
                    let selected = move || active.get() == status;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || if selected() { "tab active" } else { "tab" }
                            aria-selected=move || selected().to_string()
                            on:click=move |_| active.set(status)
                        >
                            {status.tab_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
