//! # Mailer — contact form validation and delivery
//!
//! Everything behind the contact section's "Send Me a Message" form, kept
//! free of UI concerns so it can be unit-tested natively: the form model and
//! its validation schema, the submission lifecycle, and the EmailJS client
//! the message is delivered through.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`form`] | [`ContactForm`] (the four user-supplied fields), [`ContactField`], and [`ValidationErrors`] — validation reports every failing field at once. |
//! | [`schema`] | Declarative per-field rule lists ([`Rule`]) and the email grammar check. Messages are derived from the rule, so constraint and wording stay together. |
//! | [`state`] | [`SubmissionState`] — the `Idle → Submitting → (Succeeded | Failed)` lifecycle with a duplicate-send guard. |
//! | [`config`] | [`DeliveryConfig`] — EmailJS service/template identifiers, public key, and the recipient mailbox, overridable at build time. |
//! | [`client`] | [`EmailJsClient`] — posts the rendered template parameters to the EmailJS REST endpoint and classifies failures as [`DeliveryError`]. |
//!
//! ## Flow
//!
//! The UI validates with [`ContactForm::validate`], guards re-entry with
//! [`SubmissionState::begin`], performs exactly one
//! [`EmailJsClient::send`] per submission, and maps the outcome back through
//! [`SubmissionState::succeed`] / [`SubmissionState::fail`]. Failed attempts
//! keep the user's input; successful ones clear it.

pub mod client;
pub mod config;
pub mod form;
pub mod schema;
pub mod state;

pub use client::{DeliveryError, EmailJsClient, TemplateParams, EMAILJS_SEND_URL};
pub use config::DeliveryConfig;
pub use form::{ContactField, ContactForm, ValidationErrors};
pub use schema::{is_valid_email, Rule};
pub use state::SubmissionState;
