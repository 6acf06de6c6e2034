//! Entity List Component
//!
//! Renders one status tab of a page. All filtering and row decisions come
//! from `ListView::build`; this component only turns them into markup.

use election_admin_core::{AdminEntity, Entity, ListBody, ListView, Row, StatusFilter};
use leptos::prelude::*;
use leptos_router::components::A;

use super::entity_form::{EntityForm, FormMode};
use super::transition_confirm::TransitionConfirm;
use crate::commands::RestService;
use crate::context::AppContext;

#[component]
pub fn EntityList<E: AdminEntity>(
    #[prop(into)] items: Signal<Vec<E>>,
    status: StatusFilter,
    #[prop(into)] loading: Signal<bool>,
    service: RestService<E>,
    refresh: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let offset = ctx.offset;
    let body = Memo::new(move |_| items.with(|items| ListView::build(items, status, loading.get(), offset)));

    move || match body.get() {
        ListBody::Loading => view! {
            <div class="loading" role="status">
                <span class="spinner"></span>
                "Loading..."
            </div>
        }
        .into_any(),
        ListBody::Empty { offer_create } => view! {
            <div class="empty-state">
                <p>{format!("No {} found.", E::PLURAL)}</p>
                {offer_create.then(|| {
                    view! { <EntityForm mode=FormMode::Create service=service.clone() refresh=refresh /> }
                })}
            </div>
        }
        .into_any(),
        ListBody::Table { rows, footer } => view! {
            <table class="entity-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        {E::EXTRA_COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th class="actions-column">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| row_view(row, service.clone(), refresh))
                        .collect_view()}
                </tbody>
            </table>
            <p class="list-footer">{footer}</p>
        }
        .into_any(),
    }
}

fn row_view<E: AdminEntity>(row: Row<E>, service: RestService<E>, refresh: Callback<()>) -> impl IntoView {
    let Row { record, created, badge, extra, actions, cross_link } = row;
    let edit = actions.edit.then(|| {
        view! {
            <EntityForm mode=FormMode::Edit(record.clone()) service=service.clone() refresh=refresh />
        }
    });
    let link = cross_link.map(|link| {
        view! {
            <span class="btn btn-link">
                <A href=link.href>{link.label}</A>
            </span>
        }
    });

    view! {
        <tr>
            <td class="name-cell">{record.name().to_string()}</td>
            {extra.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
            <td>
                <span class=badge.class()>{badge.label()}</span>
            </td>
            <td>{created}</td>
            <td class="row-actions">
                {edit}
                {link}
                <TransitionConfirm record=record service=service refresh=refresh />
            </td>
        </tr>
    }
}
