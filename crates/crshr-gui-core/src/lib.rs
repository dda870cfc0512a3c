//! Editor UI for the CRSHR bit-crusher.
//!
//! This crate holds the control panel, its color mapping, the theme, and the
//! [`ParamBridge`] trait that keeps the panel independent of any host ABI.
//! The standalone app (`crshr-gui`) and any plugin adapter drive the same
//! [`CrshrPanel`].
//!
//! # Modules
//!
//! - [`color`]: Crush intensity and the knob tint mapping
//! - [`panel`]: the two-knob controller and its edit session
//! - [`param_bridge`]: outbound host protocol (`begin_set`/`set`/`end_set`)
//! - [`render`]: renderer collaborator trait and per-knob descriptions
//! - [`theme`]: owned visual configuration
//! - [`widgets`]: the egui knob and renderer
//! - [`editor`]: full editor frame for an egui context
//!
//! # Example
//!
//! ```rust
//! use crshr_gui_core::CrshrPanel;
//!
//! let mut panel = CrshrPanel::new();
//! assert!(panel.on_parameter_changed(0, 100.0));
//! assert!((panel.intensity() - 9.71168).abs() < 1e-5);
//! ```

pub mod color;
pub mod editor;
pub mod panel;
pub mod param_bridge;
pub mod render;
pub mod theme;
pub mod widgets;

pub use color::{KnobColors, color_bright, color_mix, intensity};
pub use editor::show_editor;
pub use panel::{CrshrPanel, EditSession};
pub use param_bridge::ParamBridge;
pub use render::{KnobFlags, KnobResponse, KnobSpec, KnobVariant, PanelRenderer, ValueFormat};
pub use theme::Theme;
pub use widgets::{EguiRenderer, Knob};
