//! Election Admin Frontend App
//!
//! Header navigation, the routed entity pages and the toaster.

use election_admin_core::AdminConfig;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

use crate::components::Toaster;
use crate::context::AppContext;
use crate::pages::{DistrictsPage, ElectoratesPage, NodesPage, NotFound, PartiesPage};

#[component]
pub fn App(config: AdminConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <header class="app-header">
                <span class="app-title">"Election Admin"</span>
                <nav class="app-nav">
                    <A href="/districts">"Districts"</A>
                    <A href="/parties">"Parties"</A>
                    <A href="/nodes">"Nodes"</A>
                </nav>
            </header>

            <main class="main-content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/districts" /> } />
                    <Route path=path!("/districts") view=DistrictsPage />
                    <Route path=path!("/parties") view=PartiesPage />
                    <Route path=path!("/nodes") view=NodesPage />
                    <Route path=path!("/electorates") view=ElectoratesPage />
                </Routes>
            </main>

            <Toaster />
        </Router>
    }
}
