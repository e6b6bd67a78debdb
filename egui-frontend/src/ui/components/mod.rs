//! # UI Components Module
//!
//! This module organizes all UI components for the pricer window.
//! Each submodule handles a specific panel or concern.
//!
//! ## Module Organization:
//! - `theme` - Color configuration
//! - `styling` - Global egui style and shared painting helpers
//! - `header` - Language selector, title banner and feedback messages
//! - `parameter_form` - The seven numeric inputs
//! - `results_panel` - The nine result tiles
//! - `chart_renderer` - Bar charts and chart legends
//! - `distribution_chart` - Expenses distribution donut
//! - `export_panel` - Report format selector and save button

pub mod chart_renderer;
pub mod distribution_chart;
pub mod export_panel;
pub mod header;
pub mod parameter_form;
pub mod results_panel;
pub mod styling;
pub mod theme;

pub use styling::{card_frame, card_title, draw_gradient_background, setup_pricer_style};
pub use theme::*;
