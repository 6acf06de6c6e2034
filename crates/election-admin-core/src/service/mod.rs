//! Service Layer - REST Contract
//!
//! One trait covers the five calls every entity supports. The browser
//! implementation lives in the UI crate; URL building and response decoding
//! live here so they can be tested natively.

mod endpoints;
pub mod wire;
#[cfg(any(test, feature = "testing"))]
pub mod memory;

use async_trait::async_trait;
use log::{info, warn};

use crate::domain::{AdminEntity, EntityId};
use crate::error::Result;
use crate::notify::{Notification, Notify};

pub use endpoints::Endpoints;

/// Network client for one entity type
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait EntityService<E: AdminEntity> {
    /// `GET` the whole collection
    async fn find_all(&self) -> Result<Vec<E>>;

    /// `POST` a new record; returns the backend's message
    async fn create(&self, draft: &E::Draft) -> Result<String>;

    /// `PUT` the full record; returns the backend's message
    async fn update(&self, record: &E) -> Result<String>;

    /// Soft-delete a record
    async fn suspend(&self, id: EntityId) -> Result<String>;

    /// Undo a soft delete
    async fn recover(&self, id: EntityId) -> Result<String>;
}

/// A state transition offered by the confirm dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Suspend,
    Recover,
}

impl Transition {
    /// The only transition that makes sense for a record's current flag
    pub fn for_flag(is_active: bool) -> Self {
        if is_active {
            Transition::Suspend
        } else {
            Transition::Recover
        }
    }

    /// Path segment appended to the record URL
    pub fn action(&self) -> &'static str {
        match self {
            Transition::Suspend => "suspend",
            Transition::Recover => "recover",
        }
    }

    /// Trigger button text
    pub fn label(&self) -> &'static str {
        match self {
            Transition::Suspend => "Suspend",
            Transition::Recover => "Recover",
        }
    }

    /// Confirmation question for a named record
    pub fn prompt(&self, singular: &str, name: &str) -> String {
        match self {
            Transition::Suspend => format!(
                "Suspend the {singular} \"{name}\"? It moves to the archived tab and can be recovered later."
            ),
            Transition::Recover => format!("Recover the {singular} \"{name}\"? It becomes active again."),
        }
    }

    /// Call the matching service method
    pub async fn apply<E, S>(&self, service: &S, id: EntityId) -> Result<String>
    where
        E: AdminEntity,
        S: EntityService<E> + ?Sized,
    {
        match self {
            Transition::Suspend => service.suspend(id).await,
            Transition::Recover => service.recover(id).await,
        }
    }
}

/// Fetch the collection for a page; failures are reported through `notifier`
/// and yield `None` so the page keeps what it had.
pub async fn load_all<E, S, N>(service: &S, notifier: &N) -> Option<Vec<E>>
where
    E: AdminEntity,
    S: EntityService<E> + ?Sized,
    N: Notify + ?Sized,
{
    match service.find_all().await {
        Ok(items) => {
            info!("loaded {} {}", items.len(), E::PLURAL);
            Some(items)
        }
        Err(err) => {
            warn!("failed to load {}: {}", E::PLURAL, err);
            notifier.notify(Notification::error(err.user_message()));
            None
        }
    }
}
