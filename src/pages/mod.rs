//! Routed Pages
//!
//! One generic page per managed entity, plus the polling-division landing
//! page districts link to.

mod electorates;
mod entity_page;

use election_admin_core::{ElectionParty, ElectorateDistrict, Node};
use leptos::prelude::*;
use leptos_router::components::A;

pub use electorates::ElectoratesPage;
use entity_page::EntityPage;

use crate::commands::RestService;
use crate::context::AppContext;

#[component]
pub fn DistrictsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let service = RestService::<ElectorateDistrict>::new(&ctx.config());
    view! { <EntityPage title="Electoral Districts" service=service /> }
}

#[component]
pub fn PartiesPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let service = RestService::<ElectionParty>::new(&ctx.config());
    view! { <EntityPage title="Election Parties" service=service /> }
}

#[component]
pub fn NodesPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let service = RestService::<Node>::new(&ctx.config());
    view! { <EntityPage title="Nodes" service=service /> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <A href="/districts">"Back to districts"</A>
        </section>
    }
}
