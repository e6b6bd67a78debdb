//! # UI State Modules
//!
//! State that lives alongside the pricing session but only matters to the window.
//!
//! - `ui_state` - User feedback messages
//! - `export_state` - Export panel selections and last export outcome

pub mod export_state;
pub mod ui_state;

pub use export_state::ExportState;
pub use ui_state::UIState;
