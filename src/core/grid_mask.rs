//! Bit-packed boolean grid with a fixed exterior value.
//!
//! Typical use is visited-cell tracking in a generation algorithm:
//!
//! ```
//! use mazegrid::GridMask;
//!
//! let mut visited = GridMask::new(5, 5)?;
//! assert!(visited.test_and_set(2, 2, true)?);
//! assert!(!visited.test_and_set(2, 2, true)?);
//! # Ok::<(), mazegrid::GridError>(())
//! ```

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

type Block = u32;

const BLOCK_BITS: usize = Block::BITS as usize;
const BLOCK_SHIFT: u32 = BLOCK_BITS.trailing_zeros();
const BLOCK_MASK: usize = BLOCK_BITS - 1;

/// Construction options for [`GridMask`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridMaskOptions {
    /// Initial value of every interior cell.
    pub interior: bool,
    /// Value reported for every coordinate outside the grid.
    pub exterior: bool,
}

impl GridMaskOptions {
    pub fn with_interior(mut self, interior: bool) -> Self {
        self.interior = interior;
        self
    }

    pub fn with_exterior(mut self, exterior: bool) -> Self {
        self.exterior = exterior;
        self
    }
}

/// A `width x height` grid of booleans, one bit per cell.
///
/// Bits past the last column of each row are always zero, so two masks
/// compare equal exactly when their size, exterior and cells agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMask {
    width: i32,
    height: i32,
    exterior: bool,
    // Blocks per row.
    block_width: usize,
    blocks: Vec<Block>,
}

impl GridMask {
    /// Create a mask with every interior cell false and a false exterior.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_options(width, height, GridMaskOptions::default())
    }

    pub fn with_options(width: i32, height: i32, options: GridMaskOptions) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let w = width as usize;
        let block_width = (w + BLOCK_MASK) >> BLOCK_SHIFT;

        let mut blocks = vec![0 as Block; block_width * height as usize];
        if options.interior && block_width > 0 {
            let tail = w & BLOCK_MASK;
            let last = if tail == 0 {
                Block::MAX
            } else {
                (1 << tail) - 1
            };
            for row in blocks.chunks_exact_mut(block_width) {
                row.fill(Block::MAX);
                row[block_width - 1] = last;
            }
        }

        tracing::debug!(
            width,
            height,
            interior = options.interior,
            exterior = options.exterior,
            "allocated grid mask"
        );

        Ok(Self {
            width,
            height,
            exterior: options.exterior,
            block_width,
            blocks,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The value reported for out-of-bounds coordinates.
    #[inline]
    pub fn exterior(&self) -> bool {
        self.exterior
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Block index and bit mask for an in-bounds cell.
    #[inline]
    fn locate(&self, x: i32, y: i32) -> (usize, Block) {
        let (x, y) = (x as usize, y as usize);
        let index = y * self.block_width + (x >> BLOCK_SHIFT);
        (index, 1 << (x & BLOCK_MASK))
    }

    #[inline]
    fn store(&mut self, index: usize, mask: Block, value: bool) {
        if value {
            self.blocks[index] |= mask;
        } else {
            self.blocks[index] &= !mask;
        }
    }

    /// Returns the cell value, or the exterior value outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return self.exterior;
        }
        let (index, mask) = self.locate(x, y);
        self.blocks[index] & mask != 0
    }

    /// Stores `value` at an interior cell. The exterior is not a cell and
    /// cannot be written.
    pub fn set(&mut self, x: i32, y: i32, value: bool) -> Result<&mut Self> {
        if !self.contains(x, y) {
            tracing::debug!(x, y, "rejected grid mask write outside the grid");
            return Err(GridError::CellOutOfBounds { x, y });
        }
        let (index, mask) = self.locate(x, y);
        self.store(index, mask, value);
        Ok(self)
    }

    /// Sets the cell to `value` unless it already holds it.
    ///
    /// Returns `Ok(true)` when the cell changed. Out of bounds, a request that
    /// matches the exterior value is a no-op returning `Ok(false)`; any other
    /// out-of-bounds request fails like [`GridMask::set`].
    pub fn test_and_set(&mut self, x: i32, y: i32, value: bool) -> Result<bool> {
        if !self.contains(x, y) {
            if self.exterior == value {
                return Ok(false);
            }
            tracing::debug!(x, y, "rejected grid mask write outside the grid");
            return Err(GridError::CellOutOfBounds { x, y });
        }
        let (index, mask) = self.locate(x, y);
        if (self.blocks[index] & mask != 0) == value {
            return Ok(false);
        }
        self.store(index, mask, value);
        Ok(true)
    }
}
