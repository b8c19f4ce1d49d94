//! Automind core: the lead schema, its validator, and the form wizard.
//!
//! No I/O lives here. The database crate persists [`lead::Lead`]s, the API
//! crate exposes them over HTTP, and the client crate drives a
//! [`wizard::session::WizardSession`] against that API.

pub mod catalog;
pub mod error;
pub mod lead;
pub mod types;
pub mod validation;
pub mod wizard;
