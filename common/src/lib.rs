//! Shared domain crate for the solar quote site.
//!
//! Everything that does not need a browser lives here: the wire models exchanged
//! with the REST backend, the intake wizard state machine and its validation
//! rules, multipart payload flattening, the session lifecycle and the
//! dashboard statistics. The `frontend` crate renders these types and performs
//! the actual HTTP calls.

pub mod config;
pub mod error;
pub mod model;
pub mod multipart;
pub mod requests;
pub mod session;
pub mod validation;
pub mod wizard;

mod serde_helpers;
