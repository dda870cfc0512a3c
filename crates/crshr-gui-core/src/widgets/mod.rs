//! egui widgets for the CRSHR panel.
//!
//! - [`Knob`]: stepped-tick rotary control with tint overrides and value tooltip
//! - [`EguiRenderer`]: [`PanelRenderer`](crate::render::PanelRenderer) backed by an egui `Ui`

mod egui_renderer;
mod knob;

pub use egui_renderer::EguiRenderer;
pub use knob::{DEFAULT_SENSITIVITY, Knob};
