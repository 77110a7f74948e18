//! Rendering-agnostic exam form: state, reducer, validation, export and the
//! async controller that ties them to a backend and a clipboard.

pub mod clipboard;
pub mod controller;
pub mod export;
pub mod render;
pub mod state;
pub mod validation;

pub use clipboard::{Clipboard, ClipboardError};
pub use controller::ExamView;
pub use state::{update, Action, Effect, ExamViewState};
pub use validation::{validate_request, GenerationRequest, ValidationError};
