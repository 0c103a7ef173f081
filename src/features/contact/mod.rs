//! Contact form feature.
//!
//! Server side, this feature accepts the site's contact form and relays
//! accepted submissions to a webhook. Client side, it provides the
//! submitter used by the form: a multipart HTTP client plus an explicit
//! submission state machine that reports progress through a [`Notifier`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact` | No | Submit the contact form (`multipart/form-data`) |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
#[allow(dead_code)]
pub mod submission;

pub use services::ContactService;
#[allow(unused_imports)]
pub use submission::{ContactSubmitter, Notifier, SubmissionState, TracingNotifier};
