use grid_util::point::Point;
use thiserror::Error;

/// Errors raised by grid construction, grid edits and search requests.
///
/// Construction errors ([InvalidDimensions](SeekError::InvalidDimensions),
/// [NegativeScale](SeekError::NegativeScale)) are fatal to the value being
/// built; edit and lookup errors ([OutOfBounds](SeekError::OutOfBounds),
/// [NotAligned](SeekError::NotAligned)) are fatal to that call and leave the
/// grid untouched. An unreachable search target is not an error but the
/// [PathNotFound](crate::SearchOutcome::PathNotFound) outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeekError {
    #[error("invalid grid size {width}x{height}: grids must be square with a power-of-two side")]
    InvalidDimensions { width: usize, height: usize },

    #[error("heuristic scale {0} is negative")]
    NegativeScale(i32),

    #[error("point {point} lies outside the {side}x{side} grid")]
    OutOfBounds { point: Point, side: usize },

    #[error("{from} to {to} is neither axis-aligned nor an exact diagonal")]
    NotAligned { from: Point, to: Point },
}

pub type Result<T> = std::result::Result<T, SeekError>;
