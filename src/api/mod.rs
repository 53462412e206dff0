//! Wire layer speaking the service's plain-text HTTP contract.
//!
//! # Modules
//!
//! - [`client`] - HTTP client issuing the four operations
//! - [`decode`] - Decoding of plain-text analytics bodies
//! - [`dto`] - Typed operation inputs and results
//!
//! The contract has no structured content type: every request and response
//! body is text, and success versus failure is judged solely by the HTTP
//! status class.

pub mod client;
pub mod decode;
pub mod dto;
