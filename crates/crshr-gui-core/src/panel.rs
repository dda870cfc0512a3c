//! The CRSHR control panel: two knobs, one edit session, one host bridge.
//!
//! [`CrshrPanel`] owns the editor-side [`ParameterState`] and is driven from
//! two directions:
//!
//! - the host calls [`on_parameter_changed`](CrshrPanel::on_parameter_changed)
//!   whenever its own value moves (authoritative, never echoed back)
//! - the frame loop calls [`render`](CrshrPanel::render) once per refresh,
//!   which draws both knobs through a [`PanelRenderer`] and reports user
//!   edits through a [`ParamBridge`]
//!
//! # Edit session
//!
//! A single [`EditSession`] spans the whole panel. Releasing either knob
//! closes the session and ends edits on both parameters:
//!
//! ```text
//!            activated(p)                 deactivated(any)
//!   Idle ─────────────────► Editing(p) ─────────────────────► Idle
//!         begin_set(p)                  end_set(Crush)
//!                                       end_set(Mix)
//! ```

use crshr_core::{CrshrParam, ParameterState};

use crate::color::{KnobColors, intensity};
use crate::param_bridge::ParamBridge;
use crate::render::{KnobFlags, KnobSpec, KnobVariant, PanelRenderer, ValueFormat};
use crate::theme::Theme;

/// Window title.
pub const PANEL_TITLE: &str = "WSTD CRSHR";

/// Tick marks on the Crush knob.
pub const CRUSH_TICKS: usize = 9;

/// Tick marks on the Mix knob.
pub const MIX_TICKS: usize = 11;

/// Panel-wide edit session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture that started on the given parameter is in progress.
    Editing(CrshrParam),
}

/// Editor controller for the two CRSHR parameters.
#[derive(Debug, Clone, Default)]
pub struct CrshrPanel {
    state: ParameterState,
    session: EditSession,
    repaint_requested: bool,
}

impl CrshrPanel {
    /// Panel at default values (Crush 512, Mix 50%), idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current parameter values.
    pub fn state(&self) -> &ParameterState {
        &self.state
    }

    /// Current edit session.
    pub fn edit_session(&self) -> EditSession {
        self.session
    }

    /// Host notification that a parameter changed.
    ///
    /// The value is stored verbatim, without clamping. Returns `false` and
    /// leaves the state untouched for an unknown index. Never pushes to the host.
    pub fn on_parameter_changed(&mut self, index: u32, value: f32) -> bool {
        match CrshrParam::try_from(index) {
            Ok(param) => {
                self.state.set(param, value);
                self.repaint_requested = true;
                true
            }
            Err(err) => {
                tracing::debug!(%err, value, "ignoring host parameter change");
                false
            }
        }
    }

    /// Returns whether a redraw was requested since the last call, and clears it.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Color intensity for the current Crush value.
    pub fn intensity(&self) -> f32 {
        intensity(self.state.crush())
    }

    /// Knob description for `param` this frame.
    pub fn knob_spec(param: CrshrParam, theme: &Theme, precision: bool) -> KnobSpec {
        let descriptor = param.descriptor();
        let ticks = match param {
            CrshrParam::Crush => CRUSH_TICKS,
            CrshrParam::Mix => MIX_TICKS,
        };
        KnobSpec {
            param,
            descriptor,
            step: param.steps().step(precision),
            format: ValueFormat::for_unit(descriptor.unit),
            variant: KnobVariant::SteppedTick { ticks },
            diameter: theme.knob_diameter(),
            flags: KnobFlags::default(),
        }
    }

    /// Draw both knobs and forward any user edits to `bridge`.
    ///
    /// Tints for both knobs are computed from the values at the start of
    /// the frame, before either knob is drawn.
    pub fn render<R, B>(&mut self, renderer: &mut R, bridge: &mut B, theme: &Theme)
    where
        R: PanelRenderer + ?Sized,
        B: ParamBridge + ?Sized,
    {
        let intensity = self.intensity();
        let crush_colors = KnobColors::crush(theme, intensity);
        let mix_colors = KnobColors::mix(theme, intensity, self.state.mix());
        let precision = renderer.precision_held();

        self.knob(CrshrParam::Crush, crush_colors, precision, renderer, bridge, theme);
        self.knob(CrshrParam::Mix, mix_colors, precision, renderer, bridge, theme);
    }

    fn knob<R, B>(
        &mut self,
        param: CrshrParam,
        colors: KnobColors,
        precision: bool,
        renderer: &mut R,
        bridge: &mut B,
        theme: &Theme,
    ) where
        R: PanelRenderer + ?Sized,
        B: ParamBridge + ?Sized,
    {
        let spec = Self::knob_spec(param, theme, precision);
        let current = self.state.get(param);
        let response = renderer.knob(&spec, colors, current);

        if response.activated {
            self.begin_edit(param, bridge);
        }

        if response.activated && response.double_clicked {
            self.push(param, spec.descriptor.default, bridge);
        } else if response.changed {
            if self.session != EditSession::Editing(param) {
                self.begin_edit(param, bridge);
            }
            let next = param
                .steps()
                .apply(&spec.descriptor, current, response.value, precision);
            self.push(param, next, bridge);
        }

        if response.deactivated {
            self.end_edit(bridge);
        }
    }

    fn begin_edit<B: ParamBridge + ?Sized>(&mut self, param: CrshrParam, bridge: &mut B) {
        if let EditSession::Editing(stale) = self.session {
            tracing::debug!(%stale, %param, "closing unreleased edit session");
            self.end_edit(bridge);
        }
        tracing::debug!(%param, "edit session started");
        bridge.begin_set(param);
        self.session = EditSession::Editing(param);
    }

    fn end_edit<B: ParamBridge + ?Sized>(&mut self, bridge: &mut B) {
        let EditSession::Editing(param) = self.session else {
            return;
        };
        tracing::debug!(%param, "edit session ended");
        bridge.end_set(CrshrParam::Crush);
        bridge.end_set(CrshrParam::Mix);
        self.session = EditSession::Idle;
    }

    fn push<B: ParamBridge + ?Sized>(&mut self, param: CrshrParam, value: f32, bridge: &mut B) {
        tracing::trace!(%param, value, "push");
        self.state.set(param, value);
        bridge.set(param, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::KnobResponse;

    #[derive(Default)]
    struct Calls(Vec<String>);

    impl ParamBridge for Calls {
        fn begin_set(&mut self, param: CrshrParam) {
            self.0.push(format!("begin {}", param.index()));
        }
        fn set(&mut self, param: CrshrParam, value: f32) {
            self.0.push(format!("set {} {value}", param.index()));
        }
        fn end_set(&mut self, param: CrshrParam) {
            self.0.push(format!("end {}", param.index()));
        }
    }

    /// Returns one canned response for one knob, idle for the other.
    struct OneShot(CrshrParam, Option<KnobResponse>);

    impl PanelRenderer for OneShot {
        fn precision_held(&self) -> bool {
            false
        }
        fn knob(&mut self, spec: &KnobSpec, _: KnobColors, value: f32) -> KnobResponse {
            if spec.param == self.0 {
                self.1.take().unwrap_or(KnobResponse::idle(value))
            } else {
                KnobResponse::idle(value)
            }
        }
    }

    #[test]
    fn starts_idle_at_defaults() {
        let panel = CrshrPanel::new();
        assert_eq!(panel.edit_session(), EditSession::Idle);
        assert_eq!(panel.state().crush(), 512);
        assert_eq!(panel.state().mix(), 50.0);
    }

    #[test]
    fn inbound_change_requests_one_repaint() {
        let mut panel = CrshrPanel::new();
        assert!(!panel.take_repaint_request());
        assert!(panel.on_parameter_changed(1, 12.5));
        assert!(panel.take_repaint_request());
        assert!(!panel.take_repaint_request());
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut panel = CrshrPanel::new();
        assert!(!panel.on_parameter_changed(7, 3.0));
        assert!(!panel.take_repaint_request());
        assert_eq!(*panel.state(), ParameterState::default());
    }

    #[test]
    fn knob_specs() {
        let theme = Theme::default();
        let crush = CrshrPanel::knob_spec(CrshrParam::Crush, &theme, false);
        assert_eq!(crush.label(), "Crshr");
        assert_eq!(crush.step, 8.0);
        assert_eq!(crush.format, ValueFormat::Integer);
        assert_eq!(crush.variant, KnobVariant::SteppedTick { ticks: CRUSH_TICKS });

        let mix = CrshrPanel::knob_spec(CrshrParam::Mix, &theme, true);
        assert_eq!(mix.step, 0.1);
        assert_eq!(mix.format, ValueFormat::Percent);
        assert_eq!(mix.variant, KnobVariant::SteppedTick { ticks: MIX_TICKS });
        assert_eq!(mix.diameter, theme.knob_diameter());
    }

    #[test]
    fn deactivation_while_idle_is_noop() {
        let mut panel = CrshrPanel::new();
        let mut calls = Calls::default();
        let mut renderer = OneShot(CrshrParam::Crush, Some(KnobResponse {
            deactivated: true,
            ..KnobResponse::idle(512.0)
        }));
        panel.render(&mut renderer, &mut calls, &Theme::default());
        assert!(calls.0.is_empty());
    }

    #[test]
    fn change_without_activation_opens_session() {
        let mut panel = CrshrPanel::new();
        let mut calls = Calls::default();
        let mut renderer = OneShot(CrshrParam::Crush, Some(KnobResponse {
            changed: true,
            ..KnobResponse::idle(504.0)
        }));
        panel.render(&mut renderer, &mut calls, &Theme::default());
        assert_eq!(calls.0, ["begin 0", "set 0 504"]);
        assert_eq!(panel.edit_session(), EditSession::Editing(CrshrParam::Crush));
    }

    #[test]
    fn reactivation_closes_stale_session_first() {
        let mut panel = CrshrPanel::new();
        let mut calls = Calls::default();
        let theme = Theme::default();
        for _ in 0..2 {
            let mut renderer = OneShot(CrshrParam::Crush, Some(KnobResponse {
                activated: true,
                ..KnobResponse::idle(512.0)
            }));
            panel.render(&mut renderer, &mut calls, &theme);
        }
        assert_eq!(calls.0, ["begin 0", "end 0", "end 1", "begin 0"]);
    }

    #[test]
    fn change_on_other_knob_moves_session() {
        let mut panel = CrshrPanel::new();
        let mut calls = Calls::default();
        let theme = Theme::default();

        let mut renderer = OneShot(CrshrParam::Mix, Some(KnobResponse {
            activated: true,
            ..KnobResponse::idle(50.0)
        }));
        panel.render(&mut renderer, &mut calls, &theme);

        let mut renderer = OneShot(CrshrParam::Crush, Some(KnobResponse {
            changed: true,
            ..KnobResponse::idle(504.0)
        }));
        panel.render(&mut renderer, &mut calls, &theme);

        assert_eq!(calls.0, ["begin 1", "end 0", "end 1", "begin 0", "set 0 504"]);
        assert_eq!(panel.edit_session(), EditSession::Editing(CrshrParam::Crush));
    }

    #[test]
    fn title_carries_vendor_prefix() {
        assert_eq!(PANEL_TITLE, "WSTD CRSHR");
    }
}
