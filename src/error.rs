//! Error types for grid construction and lookups.

use core::fmt;

use crate::anchor::AnchorId;

/// Errors that can occur while building or addressing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrapeError {
    /// Grid dimensions must both be at least 1.
    InvalidDimensions { width: usize, height: usize },
    /// Grid coordinate is out of bounds.
    PointOutOfBounds { i: usize, j: usize, width: usize, height: usize },
    /// World scale must be positive and finite.
    InvalidScale,
    /// Rest spacing must be positive and finite.
    InvalidSpacing,
    /// Viewport sizes must be finite and the resolution positive.
    InvalidResolution,
    /// Anchor id is not registered in the anchor set.
    UnknownAnchor(AnchorId),
}

impl fmt::Display for DrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrapeError::InvalidDimensions { width, height } => {
                write!(f, "grid must be at least 1x1, got {}x{}", width, height)
            }
            DrapeError::PointOutOfBounds { i, j, width, height } => {
                write!(f, "point ({}, {}) out of bounds for {}x{} grid", i, j, width, height)
            }
            DrapeError::InvalidScale => write!(f, "scale must be positive and finite"),
            DrapeError::InvalidSpacing => write!(f, "spacing must be positive and finite"),
            DrapeError::InvalidResolution => {
                write!(f, "viewport must be finite with a positive resolution")
            }
            DrapeError::UnknownAnchor(id) => write!(f, "unknown anchor {}", id.0),
        }
    }
}

impl core::error::Error for DrapeError {}
