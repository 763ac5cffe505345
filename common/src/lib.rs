//! Shared logic for the certificate wizard.
//!
//! Everything in this crate is target independent: the wire model spoken with
//! the document service, configuration, the error taxonomy, and the pure
//! wizard state machine that the `frontend` crate renders.

pub mod config;
pub mod controller;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod preview_page;
pub mod requests;
pub mod transport;
pub mod wizard;
