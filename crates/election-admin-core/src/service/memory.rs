//! In-Memory Service
//!
//! Behaves like the REST backend for one collection: assigns ids, stamps
//! `created_at`, flips `is_active`. Every call is recorded so tests can
//! assert exactly which requests were made.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use super::EntityService;
use crate::domain::{AdminEntity, EntityId};
use crate::error::{AdminError, Result};

/// A request observed by `MemoryService`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindAll,
    Create,
    Update(EntityId),
    Suspend(EntityId),
    Recover(EntityId),
}

struct State<E> {
    records: Vec<E>,
    next_id: EntityId,
    calls: Vec<Call>,
    fail_next: Option<AdminError>,
}

/// Single-threaded stand-in for the backend
pub struct MemoryService<E> {
    state: RefCell<State<E>>,
}

impl<E: AdminEntity> MemoryService<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Seed the collection; new ids continue after the highest seeded id
    pub fn with_records(records: Vec<E>) -> Self {
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        Self {
            state: RefCell::new(State {
                records,
                next_id,
                calls: Vec::new(),
                fail_next: None,
            }),
        }
    }

    /// Make the next request fail with `error`
    pub fn fail_next(&self, error: AdminError) {
        self.state.borrow_mut().fail_next = Some(error);
    }

    /// Requests received so far
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Current backend-side records
    pub fn records(&self) -> Vec<E> {
        self.state.borrow().records.clone()
    }

    fn record_call(&self, call: Call) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn set_flag(&self, id: EntityId, active: bool) -> Result<String> {
        let mut state = self.state.borrow_mut();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<E>(id))?;
        if record.is_active() == active {
            let already = if active { "active" } else { "suspended" };
            return Err(AdminError::Api {
                status: 409,
                message: format!("{} {} is already {}", capitalized(E::SINGULAR), id, already),
            });
        }
        record.set_active(active);
        let verb = if active { "recovered" } else { "suspended" };
        Ok(format!("{} {} successfully", capitalized(E::SINGULAR), verb))
    }
}

impl<E: AdminEntity> Default for MemoryService<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn not_found<E: AdminEntity>(id: EntityId) -> AdminError {
    AdminError::Api {
        status: 404,
        message: format!("{} {} not found", capitalized(E::SINGULAR), id),
    }
}

#[async_trait(?Send)]
impl<E: AdminEntity> EntityService<E> for MemoryService<E> {
    async fn find_all(&self) -> Result<Vec<E>> {
        self.record_call(Call::FindAll)?;
        Ok(self.records())
    }

    async fn create(&self, draft: &E::Draft) -> Result<String> {
        self.record_call(Call::Create)?;
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        state.records.push(E::from_draft(id, draft.clone(), created_at));
        Ok(format!("{} created successfully", capitalized(E::SINGULAR)))
    }

    async fn update(&self, record: &E) -> Result<String> {
        self.record_call(Call::Update(record.id()))?;
        let mut state = self.state.borrow_mut();
        let slot = state
            .records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| not_found::<E>(record.id()))?;
        *slot = record.clone();
        Ok(format!("{} updated successfully", capitalized(E::SINGULAR)))
    }

    async fn suspend(&self, id: EntityId) -> Result<String> {
        self.record_call(Call::Suspend(id))?;
        self.set_flag(id, false)
    }

    async fn recover(&self, id: EntityId) -> Result<String> {
        self.record_call(Call::Recover(id))?;
        self.set_flag(id, true)
    }
}
