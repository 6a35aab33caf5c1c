//! Job application intake: the draft record, its declarative validation rules,
//! the per-session state holder, and the server-rendered form.
//!
//! Each request owns a fresh [`FormSession`]; nothing is persisted. A submit
//! either hands the draft back for display or keeps it with inline errors.

pub mod domain;
pub mod draft_file;
pub mod router;
pub mod session;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationDraft, FormField, Position, Skill};
pub use draft_file::{load_draft, DraftFileError};
pub use router::application_router;
pub use session::{FieldEdit, FormPhase, FormSession, SubmitOutcome};
pub use validation::{ValidationErrors, Validator};
