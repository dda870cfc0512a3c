//! Pointer-driven tests for the egui knob and renderer.
//!
//! Each test feeds raw pointer events through `egui::Context::run` and reads
//! back what [`EguiRenderer`] reports to the panel.

use crshr_core::CrshrParam;
use crshr_gui_core::{
    CrshrPanel, EguiRenderer, Knob, KnobColors, KnobResponse, PanelRenderer, Theme,
};
use egui::{
    CentralPanel, Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, vec2,
};

/// One egui context with a fixed screen and a running clock.
struct Harness {
    ctx: Context,
    theme: Theme,
    time: f64,
}

impl Harness {
    fn new() -> Self {
        let ctx = Context::default();
        // One pass per frame, so a drag is applied exactly once
        ctx.options_mut(|o| o.max_passes = std::num::NonZeroUsize::MIN);
        Self {
            ctx,
            theme: Theme::default(),
            time: 0.0,
        }
    }

    fn input(&mut self, events: Vec<Event>, modifiers: Modifiers) -> RawInput {
        self.time += 1.0 / 60.0;
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0))),
            time: Some(self.time),
            modifiers,
            events,
            ..RawInput::default()
        }
    }

    /// Lay the knob out once and return the center of its hit area.
    fn locate(&mut self, param: CrshrParam, value: f32) -> Pos2 {
        let input = self.input(Vec::new(), Modifiers::NONE);
        let desc = param.descriptor();
        let theme = &self.theme;
        let mut center = Pos2::ZERO;
        let _ = self.ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let mut value = value;
                center = ui.add(Knob::new(&mut value, &desc, theme)).rect.center();
            });
        });
        center
    }

    /// Draw `param` through the renderer for one frame.
    fn frame(
        &mut self,
        param: CrshrParam,
        value: f32,
        events: Vec<Event>,
        modifiers: Modifiers,
    ) -> (KnobResponse, bool) {
        let input = self.input(events, modifiers);
        let theme = &self.theme;
        let mut out = (KnobResponse::default(), false);
        let _ = self.ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let mut renderer = EguiRenderer::new(ui, theme);
                let precision = renderer.precision_held();
                let spec = CrshrPanel::knob_spec(param, theme, precision);
                let colors = KnobColors::crush(theme, 0.0);
                out = (renderer.knob(&spec, colors, value), precision);
            });
        });
        out
    }

    /// Press on the knob, drag up `moves` times by `dy` pixels, release.
    ///
    /// The bound value is held at `value` throughout, so the last drag
    /// frame's proposal reflects the total travel.
    fn drag(&mut self, param: CrshrParam, value: f32, dy: f32, moves: usize) -> Vec<KnobResponse> {
        let mut at = self.locate(param, value);
        let mut responses = Vec::new();

        let press = vec![
            Event::PointerMoved(at),
            Event::PointerButton {
                pos: at,
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::NONE,
            },
        ];
        responses.push(self.frame(param, value, press, Modifiers::NONE).0);

        for _ in 0..moves {
            at.y -= dy;
            let events = vec![Event::PointerMoved(at)];
            responses.push(self.frame(param, value, events, Modifiers::NONE).0);
        }

        let release = vec![Event::PointerButton {
            pos: at,
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::NONE,
        }];
        responses.push(self.frame(param, value, release, Modifiers::NONE).0);
        responses
    }
}

fn last_proposal(responses: &[KnobResponse]) -> f32 {
    responses
        .iter()
        .rev()
        .find(|r| r.changed)
        .map(|r| r.value)
        .unwrap_or(f32::NAN)
}

#[test]
fn drag_maps_to_activation_change_and_release() {
    let mut h = Harness::new();
    let responses = h.drag(CrshrParam::Mix, 50.0, 20.0, 2);

    let activated: Vec<_> = responses.iter().map(|r| r.activated).collect();
    let deactivated: Vec<_> = responses.iter().map(|r| r.deactivated).collect();
    assert_eq!(activated.iter().filter(|&&a| a).count(), 1, "{activated:?}");
    assert_eq!(deactivated, [false, false, false, true]);

    // Activation never comes after a change, and nothing happens on press alone
    let first_active = activated.iter().position(|&a| a).unwrap();
    let first_change = responses.iter().position(|r| r.changed).unwrap();
    assert!(first_active <= first_change);
    assert!(!responses[0].changed);
    assert!(responses.iter().all(|r| !r.double_clicked));
}

#[test]
fn mix_drag_is_linear() {
    let mut h = Harness::new();
    let responses = h.drag(CrshrParam::Mix, 50.0, 20.0, 2);

    // 40 px at 0.004 per px is 16% of the range
    let value = last_proposal(&responses);
    assert!((value - 66.0).abs() < 0.5, "got {value}");
}

#[test]
fn crush_drag_is_logarithmic() {
    let mut h = Harness::new();

    // From the bottom: 16% of the sweep is 2 * 256^0.16, about 4.9
    let up = last_proposal(&h.drag(CrshrParam::Crush, 2.0, 20.0, 2));
    assert!(up > 4.0 && up < 6.0, "up from 2: {up}");

    // From the top the same travel covers far more units
    let mut h = Harness::new();
    let down = last_proposal(&h.drag(CrshrParam::Crush, 512.0, -20.0, 2));
    assert!(down > 180.0 && down < 240.0, "down from 512: {down}");
}

#[test]
fn drag_proposal_stays_in_range() {
    let mut h = Harness::new();
    let responses = h.drag(CrshrParam::Crush, 400.0, 100.0, 3);
    assert!(responses.iter().all(|r| (2.0..=512.0).contains(&r.value)));
}

#[test]
fn shift_is_the_precision_modifier() {
    let mut h = Harness::new();
    let (_, held) = h.frame(CrshrParam::Crush, 512.0, Vec::new(), Modifiers::SHIFT);
    assert!(held);
    let (_, held) = h.frame(CrshrParam::Crush, 512.0, Vec::new(), Modifiers::NONE);
    assert!(!held);
}
