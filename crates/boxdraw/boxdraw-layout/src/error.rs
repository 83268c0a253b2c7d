//! Layout errors.

use core::fmt;

/// Result alias used throughout the layout engine.
pub type Result<T, E = LayoutError> = core::result::Result<T, E>;

/// Which dimension of a node an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    /// Width.
    Horizontal,
    /// Height.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("width"),
            Axis::Vertical => f.write_str("height"),
        }
    }
}

/// Errors raised by the layout tree.
///
/// Drawing failures are not represented here: renderers report those
/// through their own channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A width or height was read before it was set, on a node that cannot
    /// derive it.
    #[error("{node} {axis} read before it was set")]
    UnsetDimension {
        /// Node kind, e.g. `"Text"`.
        node: &'static str,
        /// The dimension that was read.
        axis: Axis,
    },

    /// A width or height was forced onto a node whose size is derived from
    /// its children.
    #[error("{node} {axis} is derived from its children and cannot be overridden")]
    DerivedDimension {
        /// Node kind, e.g. `"VLayout"`.
        node: &'static str,
        /// The dimension that was written.
        axis: Axis,
    },

    /// A dotted line was given a dash length that is not positive.
    #[error("dash length must be positive, got {0}")]
    InvalidDashLength(i32),

    /// An anchor code did not name one of the nine anchors.
    #[error("unknown anchor code {0:?}")]
    UnknownAnchor(String),
}
