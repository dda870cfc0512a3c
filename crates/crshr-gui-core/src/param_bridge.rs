//! Host bridge trait for pushing edits from the editor to its host.
//!
//! [`ParamBridge`] abstracts over whatever host ABI the editor is embedded
//! in. The panel only ever talks to the host through these three calls:
//!
//! ```text
//! drag start ──► begin_set(param)        (host: beginEdit)
//! each change ─► set(param, value)       (host: pushParameterValue)
//! drag stop ───► end_set(Crush)          (host: endEdit)
//!                end_set(Mix)
//! ```
//!
//! Host-to-editor traffic goes the other way, through
//! [`CrshrPanel::on_parameter_changed`](crate::CrshrPanel::on_parameter_changed).

use crshr_core::CrshrParam;

/// Outbound half of the host protocol.
///
/// Calls arrive on the render thread, once per event, already ordered:
/// `begin_set` precedes every `set` of the same gesture. Values passed to
/// `set` are clamped to the parameter's range.
pub trait ParamBridge {
    /// The user started a gesture on `param`.
    fn begin_set(&mut self, param: CrshrParam);

    /// Push a new value for `param` in host units.
    fn set(&mut self, param: CrshrParam, value: f32);

    /// The gesture touching `param` has ended.
    fn end_set(&mut self, param: CrshrParam);
}

impl<B: ParamBridge + ?Sized> ParamBridge for &mut B {
    fn begin_set(&mut self, param: CrshrParam) {
        (**self).begin_set(param);
    }

    fn set(&mut self, param: CrshrParam, value: f32) {
        (**self).set(param, value);
    }

    fn end_set(&mut self, param: CrshrParam) {
        (**self).end_set(param);
    }
}
