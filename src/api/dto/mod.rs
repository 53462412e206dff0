//! Typed inputs and results for the client operations.
//!
//! Inputs use `validator`, so every operation runs its shape checks through
//! one mechanism before anything goes on the wire. Results serialize with
//! Serde for machine-readable output.

pub mod lookup;
pub mod paste;
pub mod shorten;

use validator::ValidationErrors;

/// First human-readable message out of a validation failure.
pub(crate) fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| "invalid input".to_string())
}
