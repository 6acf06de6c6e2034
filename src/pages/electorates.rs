//! Polling Divisions Page
//!
//! Target of a district's cross-link. Shows which district was selected from
//! the `district` and `name` query parameters.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

#[component]
pub fn ElectoratesPage() -> impl IntoView {
    let query = use_query_map();
    let selected = move || {
        query.with(|params| Some((params.get("district")?, params.get("name")?)))
    };

    view! {
        <section class="entity-page">
            <header class="page-header">
                <h1>"Polling Divisions"</h1>
            </header>
            {move || match selected() {
                Some((id, name)) => view! {
                    <p class="selected-district">
                        "Electoral district: " <strong>{name}</strong> " (#" {id} ")"
                    </p>
                }
                .into_any(),
                None => view! {
                    <p class="empty-state">"Select an electoral district to see its polling divisions."</p>
                }
                .into_any(),
            }}
            <A href="/districts">"Back to districts"</A>
        </section>
    }
}
