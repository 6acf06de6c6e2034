//! Mutation Dialog State Machine
//!
//! Create, edit, suspend and recover dialogs all follow one lifecycle:
//!
//! ```text
//! closed --open--> open --submit(valid)--> submitting --ok--> closed (+refresh)
//!                   ^  \--submit(invalid)--> open (errors shown)     |
//!                   \------------------------------------err---------/
//! ```
//!
//! A dialog rejects a second submit while its first request is in flight.
//! Dialogs on different rows are independent; duplicate transitions across
//! rows are left to the backend.

use std::cell::RefCell;
use std::future::Future;

use log::{debug, warn};

use crate::error::{AdminError, Result};
use crate::form::FieldErrors;
use crate::notify::{Notification, Notify};

/// Open/submitting flags of one dialog instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    pub open: bool,
    pub submitting: bool,
    /// Set once a submit was attempted; reveals untouched fields' errors
    pub show_all_errors: bool,
}

/// Why a submit did not reach the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// At least one field failed validation
    Invalid,
    /// The previous submit of this dialog has not finished
    InFlight,
}

impl DialogState {
    pub fn open(&mut self) {
        self.open = true;
        self.show_all_errors = false;
    }

    /// Closing mid-request is allowed; the request still completes
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Gate a submit. On success the dialog is marked as submitting.
    pub fn begin_submit(&mut self, errors: &FieldErrors) -> std::result::Result<(), SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if !errors.is_empty() {
            self.show_all_errors = true;
            return Err(SubmitBlocked::Invalid);
        }
        self.submitting = true;
        Ok(())
    }

    /// Clear the loading flag; a successful request also closes the dialog
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.open = false;
            self.show_all_errors = false;
        }
    }
}

/// Owner of a `DialogState`, e.g. a reactive signal in the UI
pub trait DialogHost {
    /// Mutate the state and return a value derived from it
    fn update_dialog<R>(&self, f: impl FnOnce(&mut DialogState) -> R) -> R;
}

impl DialogHost for RefCell<DialogState> {
    fn update_dialog<R>(&self, f: impl FnOnce(&mut DialogState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(SubmitBlocked),
    Succeeded(String),
    Failed(AdminError),
}

impl SubmitOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded(_))
    }
}

/// Run one dialog submission end to end.
///
/// `action` is only invoked when the form is valid and no request of this
/// dialog is in flight. Success notifies, closes the dialog and calls
/// `refresh` exactly once; failure notifies and leaves the dialog open.
pub async fn submit<H, N, A, Fut, R>(
    host: &H,
    errors: &FieldErrors,
    action: A,
    notifier: &N,
    refresh: R,
) -> SubmitOutcome
where
    H: DialogHost + ?Sized,
    N: Notify + ?Sized,
    A: FnOnce() -> Fut,
    Fut: Future<Output = Result<String>>,
    R: FnOnce(),
{
    if let Err(blocked) = host.update_dialog(|state| state.begin_submit(errors)) {
        debug!("submit blocked: {:?}", blocked);
        return SubmitOutcome::Blocked(blocked);
    }

    match action().await {
        Ok(message) => {
            debug!("submit succeeded: {}", message);
            notifier.notify(Notification::success(message.clone()));
            host.update_dialog(|state| state.finish_submit(true));
            refresh();
            SubmitOutcome::Succeeded(message)
        }
        Err(err) => {
            warn!("submit failed: {}", err);
            notifier.notify(Notification::error(err.user_message()));
            host.update_dialog(|state| state.finish_submit(false));
            SubmitOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(field: &'static str) -> FieldErrors {
        FieldErrors::from([(field, "bad".to_string())])
    }

    #[test]
    fn invalid_submit_reveals_errors_without_submitting() {
        let mut state = DialogState::default();
        state.open();
        assert_eq!(state.begin_submit(&errors("name")), Err(SubmitBlocked::Invalid));
        assert!(state.show_all_errors);
        assert!(!state.submitting);
        assert!(state.open);
    }

    #[test]
    fn in_flight_submit_is_rejected() {
        let mut state = DialogState::default();
        state.open();
        assert_eq!(state.begin_submit(&FieldErrors::new()), Ok(()));
        assert_eq!(state.begin_submit(&FieldErrors::new()), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn finishing_clears_loading_and_closes_on_success() {
        let mut state = DialogState::default();
        state.open();
        state.begin_submit(&FieldErrors::new()).unwrap();
        state.finish_submit(false);
        assert_eq!(state, DialogState { open: true, submitting: false, show_all_errors: false });

        state.begin_submit(&FieldErrors::new()).unwrap();
        state.finish_submit(true);
        assert!(!state.open && !state.submitting);
    }

    #[test]
    fn reopening_hides_stale_errors() {
        let mut state = DialogState::default();
        state.open();
        let _ = state.begin_submit(&errors("url"));
        state.close();
        state.open();
        assert!(!state.show_all_errors);
    }
}
