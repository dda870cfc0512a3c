//! Crush-driven color mapping for the knob tints.
//!
//! The Crush value is first turned into an [`intensity`] scalar: slightly
//! negative near bypass (512), rising to about 17 at the heaviest setting (2).
//! The intensity then brightens the knob tints:
//!
//! - [`color_bright`]: one base color shifted along the intensity (Crush knob)
//! - [`color_mix`]: cold and hot colors, both shifted, then blended by the
//!   Mix percentage (Mix knob)
//!
//! Everything here is pure and continuous in its inputs, so tints animate
//! smoothly while either parameter moves.

use egui::Color32;
use egui::ecolor::HsvaGamma;

use crate::theme::Theme;

/// HSV value shift per unit of intensity.
pub const BRIGHTNESS_PER_INTENSITY: f32 = 0.025;

/// Intensity scalar for a Crush setting.
///
/// `(((-c + 514)^2) / 2500 - 20) / 5`, evaluated in f64 and rounded once.
///
/// ```rust
/// use crshr_gui_core::color::intensity;
///
/// assert!((intensity(100) - 9.71168).abs() < 1e-5);
/// assert!(intensity(512) < 0.0);
/// ```
pub fn intensity(crush: i32) -> f32 {
    let x = 514.0 - f64::from(crush);
    ((x * x / 2500.0 - 20.0) / 5.0) as f32
}

/// Brighten (positive intensity) or darken (negative) a color.
///
/// Works on the gamma-space HSV value channel; hue, saturation, and alpha
/// are kept.
pub fn color_bright(base: Color32, intensity: f32) -> Color32 {
    let mut hsva = HsvaGamma::from(base);
    hsva.v = (hsva.v + intensity * BRIGHTNESS_PER_INTENSITY).clamp(0.0, 1.0);
    Color32::from(hsva)
}

/// Shift `cold` and `hot` by the intensity, then blend toward `hot` by `mix_percent`.
///
/// `mix_percent` is clamped to \[0, 100\] for the blend weight only.
pub fn color_mix(cold: Color32, hot: Color32, intensity: f32, mix_percent: f32) -> Color32 {
    let t = (mix_percent / 100.0).clamp(0.0, 1.0);
    lerp_color(
        color_bright(cold, intensity),
        color_bright(hot, intensity),
        t,
    )
}

/// Per-channel blend in premultiplied gamma space.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let channel = |x: u8, y: u8| egui::lerp(f32::from(x)..=f32::from(y), t).round() as u8;
    Color32::from_rgba_premultiplied(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
        channel(a.a(), b.a()),
    )
}

/// The two style overrides a knob gets each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnobColors {
    /// Body color while the knob is being dragged.
    pub active: Color32,
    /// Body color while the pointer hovers the knob.
    pub hovered: Color32,
}

impl KnobColors {
    /// Crush knob tints: the green pair shifted by intensity.
    pub fn crush(theme: &Theme, intensity: f32) -> Self {
        Self {
            active: color_bright(theme.green, intensity),
            hovered: color_bright(theme.green_bright, intensity),
        }
    }

    /// Mix knob tints: green-to-yellow blends weighted by the Mix percentage.
    pub fn mix(theme: &Theme, intensity: f32, mix_percent: f32) -> Self {
        Self {
            active: color_mix(theme.green, theme.yellow, intensity, mix_percent),
            hovered: color_mix(theme.green_bright, theme.yellow_bright, intensity, mix_percent),
        }
    }
}
