//! Contact form submission flow.
//!
//! `idle → submitting → {succeeded, failed}`. A finished submission (either
//! way) can be submitted again; a submission in flight cannot.

use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use crate::features::contact::clients::{ContactFormClient, SubmitError};
use crate::features::contact::dtos::{ContactFormDto, SENDING_MESSAGE, SUCCESS_MESSAGE};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// Holds the server's JSON response
    Succeeded(Value),
    /// Holds the value shown to the user
    Failed(Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("no submission is in flight")]
    NotSubmitting,
}

impl SubmissionState {
    pub fn begin(&self) -> Result<Self, TransitionError> {
        match self {
            SubmissionState::Submitting => Err(TransitionError::AlreadySubmitting),
            _ => Ok(SubmissionState::Submitting),
        }
    }

    pub fn succeed(&self, response: Value) -> Result<Self, TransitionError> {
        match self {
            SubmissionState::Submitting => Ok(SubmissionState::Succeeded(response)),
            _ => Err(TransitionError::NotSubmitting),
        }
    }

    pub fn fail(&self, error: Value) -> Result<Self, TransitionError> {
        match self {
            SubmissionState::Submitting => Ok(SubmissionState::Failed(error)),
            _ => Err(TransitionError::NotSubmitting),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// User-facing notifications for the three visible phases of a submission
pub trait Notifier: Send + Sync {
    fn loading(&self, message: &str);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier writing to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn loading(&self, message: &str) {
        tracing::info!(target: "contact_form", "{}", message);
    }

    fn success(&self, message: &str) {
        tracing::info!(target: "contact_form", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "contact_form", "{}", message);
    }
}

/// Renders a JSON value for display: strings without quotes, anything else serialized
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub struct ContactSubmitter<N: Notifier = TracingNotifier> {
    client: ContactFormClient,
    notifier: N,
    state: Mutex<SubmissionState>,
}

impl<N: Notifier> ContactSubmitter<N> {
    pub fn new(client: ContactFormClient, notifier: N) -> Self {
        Self {
            client,
            notifier,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        // State is replaced whole under the lock, so a poisoned value is still consistent
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Validate and send the form, driving the state machine and notifier.
    ///
    /// Invalid forms never reach the network and leave the state untouched.
    /// A call made while another submission is in flight returns
    /// [`SubmitError::InFlight`] without sending anything. Dropping the
    /// returned future mid-request puts the state back to `Idle`.
    pub async fn submit(&self, form: &ContactFormDto) -> Result<Value, SubmitError> {
        form.validate()
            .map_err(|e| SubmitError::Invalid(e.to_string()))?;

        let guard = {
            let mut state = self.lock_state();
            *state = state.begin().map_err(|_| SubmitError::InFlight)?;
            InFlightGuard { submitter: self }
        };

        self.notifier.loading(SENDING_MESSAGE);

        let result = self.client.submit(form).await;

        {
            let mut state = self.lock_state();
            let next = match &result {
                Ok(response) => state.succeed(response.clone()),
                Err(e) => state.fail(e.payload()),
            };
            match next {
                Ok(next) => *state = next,
                Err(e) => tracing::warn!("Contact submission finished out of order: {}", e),
            }
        }
        drop(guard);

        match &result {
            Ok(_) => self.notifier.success(SUCCESS_MESSAGE),
            Err(e) => self.notifier.error(&display_value(&e.payload())),
        }

        result
    }
}

/// Releases the in-flight state if a submission is abandoned before it settles
struct InFlightGuard<'a, N: Notifier> {
    submitter: &'a ContactSubmitter<N>,
}

impl<N: Notifier> Drop for InFlightGuard<'_, N> {
    fn drop(&mut self) {
        let mut state = self.submitter.lock_state();
        if state.is_in_flight() {
            tracing::debug!("Contact submission cancelled before completion");
            *state = SubmissionState::Idle;
        }
    }
}
