pub mod constants;
pub mod display;
mod layout;
mod options;
pub mod pattern;
mod preview;
mod self_display;
mod summary;
mod types;
pub mod units;
pub mod viewport;

pub use display::{AspectRatio, NamedRatio, aspect_ratio, diagonal};
pub use layout::PreviewLayout;
pub use options::*;
pub use pattern::{encode_png, render_pattern, save_png};
pub use preview::{Preview, generate_preview};
pub use self_display::{Calibration, SelfDisplay, estimate_self_display};
pub use summary::DisplaySummary;
pub use types::*;
pub use units::{UnitTracker, from_inches, to_inches};
pub use viewport::{Viewport, ViewportEvent, ViewportState};
