pub mod form;
pub mod preview;
pub mod state;

pub use form::{show_self_display, show_summary};
pub use preview::{load_texture, show_preview};
pub use state::{FormState, PreviewState, SelfDisplayState, TouchTracker};
