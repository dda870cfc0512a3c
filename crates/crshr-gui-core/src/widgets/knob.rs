//! Rotary knob control widget.
//!
//! Stepped-tick knob with:
//! - Vertical drag in normalized space (up = increase), so a logarithmic
//!   parameter gets the same pixel resolution per octave everywhere
//! - Knob angle following the same normalization
//! - Body tint from the per-frame active/hovered overrides
//! - Label above, value readout below, optional value tooltip
//!
//! The knob proposes unquantized values; step snapping and the
//! double-click reset belong to the panel, which sees them through
//! [`Response::changed`] and [`Response::double_clicked`].

use crshr_core::ParamDescriptor;
use egui::{Align2, Color32, Pos2, Response, Sense, Stroke, Ui, Widget, pos2, vec2};
use std::f32::consts::PI;

use crate::color::KnobColors;
use crate::render::{KnobFlags, KnobVariant, ValueFormat};
use crate::theme::Theme;

/// Normalized travel per pixel of vertical drag at the coarse step.
pub const DEFAULT_SENSITIVITY: f32 = 0.004;

/// Arc start angle (bottom-left).
const START_ANGLE: f32 = PI * 0.75;
/// Arc end angle (bottom-right, wrapped).
const END_ANGLE: f32 = PI * 2.25;

/// Rotary knob parameters.
pub struct Knob<'a> {
    value: &'a mut f32,
    desc: &'a ParamDescriptor,
    theme: &'a Theme,
    step: f32,
    sensitivity: f32,
    format: ValueFormat,
    variant: KnobVariant,
    diameter: f32,
    colors: KnobColors,
    flags: KnobFlags,
}

impl<'a> Knob<'a> {
    /// Create a knob bound to `value`, using `desc` for range and scale.
    pub fn new(value: &'a mut f32, desc: &'a ParamDescriptor, theme: &'a Theme) -> Self {
        Self {
            value,
            desc,
            theme,
            step: desc.step,
            sensitivity: DEFAULT_SENSITIVITY,
            format: ValueFormat::Integer,
            variant: KnobVariant::SteppedTick { ticks: 11 },
            diameter: theme.knob_diameter(),
            colors: KnobColors {
                active: theme.green,
                hovered: theme.green_bright,
            },
            flags: KnobFlags::default(),
        }
    }

    /// Set the active step size.
    ///
    /// A step finer than the descriptor's coarse step slows the drag by the
    /// same ratio.
    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set sensitivity (normalized travel per pixel dragged at the coarse step).
    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Set the value readout format.
    pub fn format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the visual variant.
    pub fn variant(mut self, variant: KnobVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set knob diameter in pixels.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Set the active/hovered body tints.
    pub fn colors(mut self, colors: KnobColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set behaviour flags.
    pub fn flags(mut self, flags: KnobFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Normalized position of the current value, clamped to \[0, 1\].
    ///
    /// A NaN value sits at the default.
    fn normalized(&self) -> f32 {
        let n = self.desc.normalize(*self.value);
        if n.is_nan() {
            self.desc.normalize(self.desc.default)
        } else {
            n.clamp(0.0, 1.0)
        }
    }

    /// Normalized travel per pixel for the active step.
    fn drag_rate(&self) -> f32 {
        if self.desc.step > 0.0 && self.step > 0.0 {
            self.sensitivity * (self.step / self.desc.step).min(1.0)
        } else {
            self.sensitivity
        }
    }

    /// Knob angle for the current value, clamped to the sweep.
    fn value_angle(&self) -> f32 {
        START_ANGLE + self.normalized() * (END_ANGLE - START_ANGLE)
    }
}

impl Widget for Knob<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let label_height = self.theme.scaled(20.0);
        let value_height = self.theme.scaled(18.0);
        let size = vec2(self.diameter, label_height + self.diameter + value_height);
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let center = pos2(rect.center().x, rect.top() + label_height + self.diameter / 2.0);
        let radius = self.diameter / 2.0 - 4.0;

        let mut changed = false;

        // Track the drag in normalized space; the value snaps to steps
        // elsewhere, so the unsnapped position lives across frames
        if response.dragged() {
            let id = response.id;
            let start = self.normalized();
            let restart = response.drag_started();
            let travel = -response.drag_delta().y * self.drag_rate();
            let position = ui.data_mut(|d| {
                let position = if restart {
                    start
                } else {
                    d.get_temp::<f32>(id).unwrap_or(start)
                };
                let position = (position + travel).clamp(0.0, 1.0);
                d.insert_temp(id, position);
                position
            });
            let proposed = self.desc.clamp(self.desc.denormalize(position));
            if proposed != *self.value {
                *self.value = proposed;
                changed = true;
            }
        }
        if response.drag_stopped() {
            ui.data_mut(|d| d.remove::<f32>(response.id));
        }

        let value_text = self.format.format(*self.value);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let value_angle = self.value_angle();

            let body_color = if response.dragged() {
                self.colors.active
            } else if response.hovered() {
                self.colors.hovered
            } else {
                self.theme.knob_body
            };

            match self.variant {
                KnobVariant::SteppedTick { ticks } => {
                    draw_ticks(
                        painter,
                        center,
                        radius,
                        ticks,
                        self.theme.knob_tick,
                        self.theme.scaled(2.0),
                    );
                }
            }

            // Knob body
            painter.circle_filled(center, radius - self.theme.scaled(8.0), body_color);

            // Pointer line
            let pointer_len = radius - self.theme.scaled(14.0);
            let pointer_end = pos2(
                center.x + value_angle.cos() * pointer_len,
                center.y + value_angle.sin() * pointer_len,
            );
            painter.line_segment(
                [center, pointer_end],
                Stroke::new(self.theme.scaled(3.0), self.theme.text_primary),
            );

            // Label
            painter.text(
                pos2(rect.center().x, rect.top()),
                Align2::CENTER_TOP,
                self.desc.name,
                self.theme.body_font(),
                self.theme.text_primary,
            );

            // Value text
            painter.text(
                pos2(rect.center().x, center.y + self.diameter / 2.0 + 2.0),
                Align2::CENTER_TOP,
                &value_text,
                self.theme.small_font(),
                self.theme.text_secondary,
            );
        }

        if changed {
            response.mark_changed();
        }

        let pressed = response.is_pointer_button_down_on();
        let hide_tooltip = pressed && self.flags.contains(KnobFlags::TOOLTIP_HIDE_ON_CLICK);
        if self.flags.contains(KnobFlags::VALUE_TOOLTIP) && !hide_tooltip {
            response = response.on_hover_text(value_text);
        }

        response
    }
}

/// Draw `ticks` evenly spaced marks around the knob sweep.
fn draw_ticks(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    ticks: usize,
    color: Color32,
    stroke_width: f32,
) {
    if ticks == 0 {
        return;
    }
    let sweep = END_ANGLE - START_ANGLE;
    let inner = radius - 6.0;
    for i in 0..ticks {
        let t = if ticks == 1 {
            0.5
        } else {
            i as f32 / (ticks - 1) as f32
        };
        let angle = START_ANGLE + t * sweep;
        let (sin, cos) = angle.sin_cos();
        painter.line_segment(
            [
                pos2(center.x + cos * inner, center.y + sin * inner),
                pos2(center.x + cos * radius, center.y + sin * radius),
            ],
            Stroke::new(stroke_width, color),
        );
    }
}
