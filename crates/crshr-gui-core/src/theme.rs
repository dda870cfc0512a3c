//! Visual styling for the CRSHR editor.
//!
//! [`Theme`] is owned by whoever hosts the panel and passed into every
//! frame; nothing here touches process-wide state except [`Theme::apply`],
//! which installs the style on one egui context.

use egui::{Color32, FontId, Margin, Stroke, Style, TextStyle, Vec2, Visuals, vec2};

/// Logical window width at scale 1.0.
pub const BASE_WIDTH: f32 = 270.0;

/// Logical window height at scale 1.0.
pub const BASE_HEIGHT: f32 = 190.0;

/// Theme colors and scale-dependent metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Crush knob active tint and Mix cold end.
    pub green: Color32,
    /// Crush knob hovered tint and Mix hovered cold end.
    pub green_bright: Color32,
    /// Mix hot end.
    pub yellow: Color32,
    /// Mix hovered hot end.
    pub yellow_bright: Color32,
    /// Title bar background.
    pub title_bg_active: Color32,
    /// Window background.
    pub window_bg: Color32,
    /// Knob body when neither hovered nor dragged.
    pub knob_body: Color32,
    /// Tick marks around the knob.
    pub knob_tick: Color32,
    /// Primary text and pointer color.
    pub text_primary: Color32,
    /// Secondary text (value readout).
    pub text_secondary: Color32,
    /// Host-reported UI scale factor.
    pub scale_factor: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            green: Color32::from_rgb(62, 160, 96),
            green_bright: Color32::from_rgb(88, 200, 124),
            yellow: Color32::from_rgb(214, 178, 60),
            yellow_bright: Color32::from_rgb(240, 208, 90),
            title_bg_active: Color32::from_rgb(30, 88, 56),
            window_bg: Color32::from_rgb(24, 28, 26),
            knob_body: Color32::from_rgb(48, 56, 52),
            knob_tick: Color32::from_rgb(120, 132, 126),
            text_primary: Color32::from_rgb(230, 234, 232),
            text_secondary: Color32::from_rgb(150, 160, 155),
            scale_factor: 1.0,
        }
    }
}

impl Theme {
    /// Set the UI scale factor. Non-positive or non-finite values fall back to 1.0.
    pub fn with_scale(mut self, scale_factor: f32) -> Self {
        self.scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        self
    }

    /// Scale a logical size by the scale factor.
    #[inline]
    pub fn scaled(&self, size: f32) -> f32 {
        size * self.scale_factor
    }

    /// Body text font (knob labels).
    pub fn body_font(&self) -> FontId {
        FontId::monospace(self.scaled(16.0))
    }

    /// Title bar font.
    pub fn title_font(&self) -> FontId {
        FontId::monospace(self.scaled(21.0))
    }

    /// Small font (value readout, tooltips).
    pub fn small_font(&self) -> FontId {
        FontId::monospace(self.scaled(12.5))
    }

    /// Knob diameter in logical pixels.
    pub fn knob_diameter(&self) -> f32 {
        self.scaled(100.0)
    }

    /// Vertical gap between the title bar and the knobs.
    pub fn top_spacing(&self) -> f32 {
        self.scaled(6.0)
    }

    /// Default window size.
    pub fn window_size(&self) -> Vec2 {
        vec2(self.scaled(BASE_WIDTH), self.scaled(BASE_HEIGHT))
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::dark();

        visuals.window_fill = self.window_bg;
        visuals.panel_fill = self.window_bg;
        visuals.window_stroke = Stroke::new(self.scaled(1.0), self.title_bg_active);

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.inactive.bg_fill = self.knob_body;
        visuals.widgets.hovered.bg_fill = self.green_bright;
        visuals.widgets.active.bg_fill = self.green;

        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;

        style.text_styles = [
            (TextStyle::Heading, self.title_font()),
            (TextStyle::Body, self.body_font()),
            (TextStyle::Monospace, self.body_font()),
            (TextStyle::Button, self.body_font()),
            (TextStyle::Small, self.small_font()),
        ]
        .into();

        style.spacing.item_spacing = vec2(self.scaled(8.0), self.scaled(6.0));
        style.spacing.window_margin = Margin::same(self.scaled(8.0).round() as i8);

        ctx.set_style(style);
    }
}
