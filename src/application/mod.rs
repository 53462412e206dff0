//! Application layer services orchestrating the client operations.
//!
//! Each service owns one operation (or one closely related pair) and runs the
//! same cycle: validate the input, take the operation's single-flight permit,
//! issue exactly one request, and map the outcome. Validation failures never
//! reach the wire; concurrent submissions of the same operation are dropped.

pub mod services;
