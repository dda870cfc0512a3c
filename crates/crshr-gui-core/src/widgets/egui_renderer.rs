//! egui implementation of [`PanelRenderer`].

use egui::Ui;

use super::Knob;
use crate::color::KnobColors;
use crate::render::{KnobFlags, KnobResponse, KnobSpec, PanelRenderer};
use crate::theme::Theme;

/// Draws knobs into an egui [`Ui`], left to right in call order.
///
/// Gesture mapping:
///
/// | egui response                        | [`KnobResponse`] |
/// |--------------------------------------|------------------|
/// | `drag_started` or `double_clicked`   | `activated`      |
/// | `drag_stopped`                       | `deactivated`    |
/// | `double_clicked` without a drag      | `deactivated`    |
/// | `changed`                            | `changed`        |
pub struct EguiRenderer<'a> {
    ui: &'a mut Ui,
    theme: &'a Theme,
}

impl<'a> EguiRenderer<'a> {
    /// Wrap a `Ui` for one frame.
    pub fn new(ui: &'a mut Ui, theme: &'a Theme) -> Self {
        Self { ui, theme }
    }
}

impl PanelRenderer for EguiRenderer<'_> {
    fn precision_held(&self) -> bool {
        self.ui.input(|i| i.modifiers.shift)
    }

    fn knob(&mut self, spec: &KnobSpec, colors: KnobColors, value: f32) -> KnobResponse {
        let mut proposed = value;
        let response = self.ui.add(
            Knob::new(&mut proposed, &spec.descriptor, self.theme)
                .step(spec.step)
                .format(spec.format)
                .variant(spec.variant)
                .diameter(spec.diameter)
                .colors(colors)
                .flags(spec.flags),
        );

        let double_clicked =
            response.double_clicked() && spec.flags.contains(KnobFlags::DOUBLE_CLICK_RESET);

        KnobResponse {
            changed: response.changed(),
            value: proposed,
            activated: response.drag_started() || double_clicked,
            deactivated: response.drag_stopped() || (double_clicked && !response.dragged()),
            double_clicked,
        }
    }
}
