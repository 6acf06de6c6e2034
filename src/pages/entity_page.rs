//! Entity Page
//!
//! Fetches one collection on mount and after every successful mutation, then
//! shows it through three status tabs.

use election_admin_core::{load_all, AdminEntity, StatusFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use crate::commands::RestService;
use crate::components::{EntityForm, EntityList, FormMode, StatusTabs};
use crate::context::AppContext;

#[component]
pub fn EntityPage<E: AdminEntity>(#[prop(into)] title: String, service: RestService<E>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (items, set_items) = signal(Vec::<E>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let status = RwSignal::new(ctx.default_status());
    // Overlapping refreshes each hold the page in the loading state
    let pending = RwSignal::new(0u32);
    let loading = Signal::derive(move || pending.get() > 0);
    let fetcher = StoredValue::new(service.clone());

    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        debug!("fetching {} (trigger={})", E::PLURAL, trigger);
        let service = fetcher.get_value();
        pending.update(|n| *n += 1);
        spawn_local(async move {
            if let Some(loaded) = load_all(&service, &ctx).await {
                set_items.try_set(loaded);
            }
            pending.try_update(|n| *n = n.saturating_sub(1));
        });
    });

    let refresh = Callback::new(move |_| set_reload_trigger.update(|v| *v += 1));

    view! {
        <section class="entity-page">
            <header class="page-header">
                <h1>{title}</h1>
                <EntityForm mode=FormMode::Create service=service.clone() refresh=refresh />
            </header>
            <StatusTabs active=status />
            {StatusFilter::TABS
                .into_iter()
                .map(|tab| {
                    let service = service.clone();
                    view! {
                        <Show when=move || status.get() == tab>
                            <EntityList
                                items=items
                                status=tab
                                loading=loading
                                service=service.clone()
                                refresh=refresh
                            />
                        </Show>
                    }
                })
                .collect_view()}
        </section>
    }
}
