//! Error types for parameter addressing.

use thiserror::Error;

/// Errors raised when translating host-side parameter addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The host referred to a parameter index the editor does not expose.
    #[error("unknown parameter index: {0}")]
    UnknownIndex(u32),
}
