//! Renderer collaborator: what the panel asks for each frame and what it gets back.
//!
//! The panel never draws directly. Per frame it describes each knob with a
//! [`KnobSpec`] plus the two [`KnobColors`] overrides, and a
//! [`PanelRenderer`] draws it and reports the interaction in a
//! [`KnobResponse`]. [`EguiRenderer`](crate::widgets::EguiRenderer) is the
//! egui implementation; tests script their own.

use crshr_core::{CrshrParam, ParamDescriptor, ParamUnit};

use crate::color::KnobColors;

/// Display format for a knob's value readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Whole number, e.g. `"512"`.
    Integer,
    /// One decimal with a percent sign, e.g. `"50.0%"`.
    Percent,
}

impl ValueFormat {
    /// Readout format for a parameter unit.
    pub const fn for_unit(unit: ParamUnit) -> Self {
        match unit {
            ParamUnit::Percent => Self::Percent,
            ParamUnit::None => Self::Integer,
        }
    }

    /// Format a value for display.
    ///
    /// ```rust
    /// use crshr_gui_core::render::ValueFormat;
    ///
    /// assert_eq!(ValueFormat::Integer.format(96.0), "96");
    /// assert_eq!(ValueFormat::Percent.format(75.5), "75.5%");
    /// ```
    pub fn format(self, value: f32) -> String {
        match self {
            Self::Integer => format!("{value:.0}"),
            Self::Percent => format!("{value:.1}{}", ParamUnit::Percent.suffix()),
        }
    }
}

/// Visual variant of a knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobVariant {
    /// Evenly spaced tick marks around the sweep with a pointer.
    SteppedTick {
        /// Number of tick marks, including both ends.
        ticks: usize,
    },
}

/// Behaviour flags for a knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnobFlags(u8);

impl KnobFlags {
    /// Report double-clicks so the panel can reset to the default.
    pub const DOUBLE_CLICK_RESET: Self = Self(1 << 0);
    /// Show the formatted value in a tooltip while hovered.
    pub const VALUE_TOOLTIP: Self = Self(1 << 1);
    /// Hide the value tooltip while the knob is pressed.
    pub const TOOLTIP_HIDE_ON_CLICK: Self = Self(1 << 2);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for KnobFlags {
    fn default() -> Self {
        Self::DOUBLE_CLICK_RESET
            .union(Self::VALUE_TOOLTIP)
            .union(Self::TOOLTIP_HIDE_ON_CLICK)
    }
}

/// Everything a renderer needs to draw one knob for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobSpec {
    /// Which parameter this knob edits.
    pub param: CrshrParam,
    /// Label, range, default, and scale.
    pub descriptor: ParamDescriptor,
    /// Drag increment for this frame (coarse or fine).
    pub step: f32,
    /// Value readout format.
    pub format: ValueFormat,
    /// Visual variant.
    pub variant: KnobVariant,
    /// Diameter in logical pixels.
    pub diameter: f32,
    /// Behaviour flags.
    pub flags: KnobFlags,
}

impl KnobSpec {
    /// Knob label (the descriptor name).
    pub fn label(&self) -> &'static str {
        self.descriptor.name
    }
}

/// Per-frame interaction result for one knob.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnobResponse {
    /// The widget moved its value this frame.
    pub changed: bool,
    /// The widget's proposed value (equal to the input when unchanged).
    pub value: f32,
    /// A gesture started on this knob this frame.
    pub activated: bool,
    /// A gesture on this knob ended this frame.
    pub deactivated: bool,
    /// The activating press was a double-click.
    pub double_clicked: bool,
}

impl KnobResponse {
    /// A frame with no interaction.
    pub fn idle(value: f32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

/// Drawing and input collaborator for [`CrshrPanel::render`](crate::CrshrPanel::render).
pub trait PanelRenderer {
    /// Whether the precision modifier (shift) is held this frame.
    fn precision_held(&self) -> bool;

    /// Draw a knob showing `value` with the given tint overrides.
    ///
    /// Knobs are laid out left to right in call order.
    fn knob(&mut self, spec: &KnobSpec, colors: KnobColors, value: f32) -> KnobResponse;
}
