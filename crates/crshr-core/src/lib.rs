//! CRSHR Core - parameter model for the CRSHR bit-crusher editor
//!
//! This crate holds everything about the editor's two parameters that does
//! not depend on a GUI toolkit:
//!
//! - [`CrshrParam`] - the host-addressable parameters and their fixed wire indices
//! - [`ParamDescriptor`] - range, default, step, and normalization curve
//! - [`StepPolicy`] - coarse/fine step sizes and edit quantization
//! - [`ParameterState`] - the editor-side value store
//! - [`ParamError`] - host addressing errors
//!
//! # Example
//!
//! ```rust
//! use crshr_core::{CrshrParam, ParameterState};
//!
//! let mut state = ParameterState::default();
//! let param = CrshrParam::try_from(1).unwrap();
//! state.set(param, 75.5);
//! assert_eq!(state.mix(), 75.5);
//! ```

pub mod error;
pub mod param_info;
pub mod params;

pub use error::ParamError;
pub use param_info::{ParamDescriptor, ParamFlags, ParamScale, ParamUnit};
pub use params::{
    CRUSH_DEFAULT, CRUSH_MAX, CRUSH_MIN, CrshrParam, MIX_DEFAULT, ParameterState, StepPolicy,
};
