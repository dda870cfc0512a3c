//! Parameter descriptors for host-visible editor parameters.
//!
//! Each parameter the editor exposes is described by a [`ParamDescriptor`]
//! carrying everything the GUI and the host adapter need:
//!
//! - range and default, used for clamping and double-click reset
//! - the coarse step, used as the knob's drag increment
//! - [`ParamScale`]: normalization curve (linear or logarithmic) for knob angles
//! - [`ParamFlags`]: capability flags for plugin hosts (automatable, stepped)
//!
//! # Example
//!
//! ```rust
//! use crshr_core::{ParamDescriptor, ParamScale};
//!
//! let mix = ParamDescriptor::mix();
//! assert_eq!(mix.clamp(140.0), 100.0);
//! assert_eq!(mix.normalize(50.0), 0.5);
//! assert_eq!(mix.scale, ParamScale::Linear);
//! ```

/// Scaling curve for parameter normalization.
///
/// Determines how a parameter's plain value maps to normalized \[0.0, 1.0\] space.
///
/// # Normalization Formulas
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Linear mapping (default). Equal resolution across the range.
    #[default]
    Linear,
    /// Logarithmic mapping. More resolution at low values.
    /// Requires `min > 0.0`.
    Logarithmic,
}

/// Parameter capability flags for plugin host communication.
///
/// ```rust
/// use crshr_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter only takes integer values.
    pub const STEPPED: Self = Self(1 << 1);

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

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Percentage (%); value is stored 0–100.
    Percent,
    /// No unit.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use crshr_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Percent.suffix(), "%");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name, also used as the knob label.
    pub name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for user edits.
    pub min: f32,

    /// Maximum allowed value for user edits.
    pub max: f32,

    /// Value restored by a double-click reset.
    pub default: f32,

    /// Coarse step increment (the per-step change without a precision modifier).
    pub step: f32,

    /// Normalization curve for mapping between plain and normalized values.
    pub scale: ParamScale,

    /// Capability flags. Default: [`ParamFlags::AUTOMATABLE`].
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Standard mix parameter (0–100%, default 50%).
    pub fn mix() -> Self {
        Self {
            name: "Mix",
            unit: ParamUnit::Percent,
            min: 0.0,
            max: 100.0,
            default: 50.0,
            step: 1.0,
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Integer-valued parameter with custom name and range.
    ///
    /// Sets [`ParamFlags::STEPPED`] so edits are rounded to whole numbers.
    pub fn integer(name: &'static str, min: f32, max: f32, default: f32) -> Self {
        Self {
            name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 1.0,
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
        }
    }

    /// Sets the normalization scale.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the coarse step increment.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Whether the parameter only takes integer values.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED)
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// ```rust
    /// use crshr_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::integer("Crshr", 2.0, 512.0, 512.0);
    /// assert_eq!(desc.clamp(0.0), 2.0);
    /// assert_eq!(desc.clamp(1000.0), 512.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    ///
    /// Values outside the range map outside \[0, 1\]; callers that draw
    /// should clamp the result.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Converts a normalized value (0.0 to 1.0) to the actual parameter range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }
}
