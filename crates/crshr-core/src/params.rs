//! The two CRSHR parameters, their step policies, and the editor-side value store.
//!
//! Wire indices are a fixed host contract: `0 = Crush`, `1 = Mix`.

use core::fmt;

use crate::error::ParamError;
use crate::param_info::{ParamDescriptor, ParamScale};

/// Lowest bit-crusher setting (heaviest crushing).
pub const CRUSH_MIN: i32 = 2;
/// Highest bit-crusher setting (near bypass).
pub const CRUSH_MAX: i32 = 512;
/// Crush value restored by a double-click reset.
pub const CRUSH_DEFAULT: i32 = 512;
/// Mix value restored by a double-click reset, in percent.
pub const MIX_DEFAULT: f32 = 50.0;

/// A host-addressable editor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrshrParam {
    /// Bit-crusher amount, integer in \[2, 512\].
    Crush,
    /// Dry/wet mix in percent, \[0, 100\].
    Mix,
}

impl CrshrParam {
    /// All parameters in wire-index order.
    pub const ALL: [Self; 2] = [Self::Crush, Self::Mix];

    /// Host wire index.
    pub const fn index(self) -> u32 {
        match self {
            Self::Crush => 0,
            Self::Mix => 1,
        }
    }

    /// Descriptor with range, default, coarse step, and scale.
    pub fn descriptor(self) -> ParamDescriptor {
        match self {
            Self::Crush => ParamDescriptor::integer(
                "Crshr",
                CRUSH_MIN as f32,
                CRUSH_MAX as f32,
                CRUSH_DEFAULT as f32,
            )
            .with_step(8.0)
            .with_scale(ParamScale::Logarithmic),
            Self::Mix => ParamDescriptor::mix(),
        }
    }

    /// Coarse/fine step pair for user edits.
    pub const fn steps(self) -> StepPolicy {
        match self {
            Self::Crush => StepPolicy::new(8.0, 1.0),
            Self::Mix => StepPolicy::new(1.0, 0.1),
        }
    }
}

impl TryFrom<u32> for CrshrParam {
    type Error = ParamError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Crush),
            1 => Ok(Self::Mix),
            other => Err(ParamError::UnknownIndex(other)),
        }
    }
}

impl fmt::Display for CrshrParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

/// Step sizes applied to user edits, selected per frame by the precision modifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPolicy {
    /// Step without the precision modifier.
    pub coarse: f32,
    /// Step while the precision modifier is held.
    pub fine: f32,
}

impl StepPolicy {
    /// Create a step policy.
    pub const fn new(coarse: f32, fine: f32) -> Self {
        Self { coarse, fine }
    }

    /// Active step size for this frame.
    #[inline]
    pub const fn step(self, precision: bool) -> f32 {
        if precision { self.fine } else { self.coarse }
    }

    /// Quantize a proposed edit to whole steps away from `current`, then clamp.
    ///
    /// Integer parameters are rounded after stepping. The result always lies
    /// within the descriptor range, even when `current` does not. A
    /// non-finite `current` (an infinite or NaN host value) has no step grid,
    /// so the edit restarts from the clamped proposal. A NaN proposal leaves
    /// `current` in place, or falls back to the default when both are unusable.
    ///
    /// ```rust
    /// use crshr_core::CrshrParam;
    ///
    /// let crush = CrshrParam::Crush;
    /// let desc = crush.descriptor();
    /// // 5.3 units of drag is closest to one coarse step of 8
    /// assert_eq!(crush.steps().apply(&desc, 100.0, 105.3, false), 108.0);
    /// assert_eq!(crush.steps().apply(&desc, 510.0, 530.0, false), 512.0);
    /// ```
    pub fn apply(self, desc: &ParamDescriptor, current: f32, proposed: f32, precision: bool) -> f32 {
        let step = self.step(precision);
        let next = if current.is_finite() && !proposed.is_nan() {
            let steps = ((proposed - current) / step).round();
            current + steps * step
        } else if current.is_finite() {
            current
        } else if proposed.is_nan() {
            desc.default
        } else {
            proposed
        };
        let next = desc.clamp(next);
        if desc.is_integer() {
            desc.clamp(next.round())
        } else {
            next
        }
    }
}

/// Current editor-side parameter values.
///
/// Host writes are stored verbatim (the host is authoritative); only user
/// edits are clamped, and that happens before they reach this store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterState {
    crush: i32,
    mix: f32,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self {
            crush: CRUSH_DEFAULT,
            mix: MIX_DEFAULT,
        }
    }
}

impl ParameterState {
    /// Current Crush setting.
    pub const fn crush(&self) -> i32 {
        self.crush
    }

    /// Current Mix percentage.
    pub const fn mix(&self) -> f32 {
        self.mix
    }

    /// Read a value in host units.
    pub fn get(&self, param: CrshrParam) -> f32 {
        match param {
            CrshrParam::Crush => self.crush as f32,
            CrshrParam::Mix => self.mix,
        }
    }

    /// Store a value in host units.
    ///
    /// Crush truncates toward zero (saturating at the `i32` range).
    pub fn set(&mut self, param: CrshrParam, value: f32) {
        match param {
            CrshrParam::Crush => self.crush = value as i32,
            CrshrParam::Mix => self.mix = value,
        }
    }
}
