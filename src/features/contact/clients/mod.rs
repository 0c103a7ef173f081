#[allow(dead_code)]
mod form_client;
mod relay;

#[allow(unused_imports)]
pub use form_client::{ContactFormClient, SubmitError};
pub use relay::{ContactRelayClient, ContactRelayPayload};
