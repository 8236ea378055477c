use crate::direction::Direction;

/// Error type for grid construction and mutation.
///
/// Reads never fail; every variant comes from constructing a grid, mutating
/// outside its mutable region, or converting a raw direction value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height was negative.
    #[error("invalid size: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    /// A grid mask mutation targeted a cell outside the grid.
    #[error("cell out of bounds: {x},{y}")]
    CellOutOfBounds { x: i32, y: i32 },
    /// A passage would leave the grid or start from outside it.
    #[error("passage out of bounds: {x},{y} dir={dir}")]
    PassageOutOfBounds { x: i32, y: i32, dir: Direction },
    /// A raw value outside `0..=3` was converted to a direction.
    #[error("invalid direction: {0}")]
    InvalidDirection(usize),
}

pub type Result<T> = core::result::Result<T, GridError>;
