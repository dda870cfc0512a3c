//! CRSHR standalone editor
//!
//! Runs the CRSHR editor in its own window, against an in-process
//! [`LoopbackHost`] that confirms every edit back to the panel.

pub mod app;
pub mod loopback_host;

pub use app::{CrshrApp, InitialValues};
pub use loopback_host::LoopbackHost;
