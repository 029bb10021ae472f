//! Form model, validation and modal session state shared by the frontend.
//!
//! Everything here is plain Rust so the lifecycle rules can be tested
//! without a browser.

pub mod config;
pub mod focus_trap;
pub mod form;
pub mod session;
pub mod validation;

pub use config::{scrollbar_compensation, ModalConfig};
pub use focus_trap::{resolve_key, FocusPosition, KeyAction};
pub use form::{ApplicationForm, Experience, Field, FormDraft};
pub use session::{DialogPhase, ModalError, ModalResult, ModalSession, PendingForm};
pub use validation::{validate_field, FieldError, ValidationErrors, NAME_MIN_LENGTH};
