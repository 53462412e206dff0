//! Shape checks applied to user input before a request exists.
//!
//! - [`short_link`] - Recognizer for the service's own short links
//! - [`url_guard`] - Shorten-target parsing and rejection rules

pub mod short_link;
pub mod url_guard;
