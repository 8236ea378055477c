//! Maze grid with shared-edge passage storage.
//!
//! Each cell stores only its own north and west passage bits. A cell's south
//! passage is the north bit of the cell below it and its east passage is the
//! west bit of the cell to its right, so the two sides of an edge can never
//! disagree. One padding row and at least one padding column of always-zero
//! bits let south/east reads on the last row/column use the same arithmetic.
//!
//! ```
//! use mazegrid::{Direction, Maze};
//!
//! let mut maze = Maze::new(8, 7)?;
//! maze.set_passage(3, 4, Direction::East, true)?;
//! assert!(maze.get_passage(4, 4, Direction::West));
//! assert_eq!(maze.cell(4, 4).passage_count(), 1);
//! # Ok::<(), mazegrid::GridError>(())
//! ```

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{GridError, Result};

type Block = u32;

// 2 bits per cell: bit 2k is north, bit 2k+1 is west.
const CELL_BITS: usize = 2;
const CELLS_PER_BLOCK: usize = Block::BITS as usize / CELL_BITS;
const CELL_SHIFT: u32 = CELLS_PER_BLOCK.trailing_zeros();
const CELL_MASK: usize = CELLS_PER_BLOCK - 1;
const NORTH_BIT: u32 = 0;
const WEST_BIT: u32 = 1;

/// Passage snapshot of one cell, packed with [`Direction::bitmask`].
///
/// A `Cell` is a copy; later changes to the maze do not affect it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(u8);

impl Cell {
    /// A cell with no passages. Every out-of-bounds cell looks like this.
    pub const CLOSED: Cell = Cell(0);

    /// Builds a cell from direction bitmasks. Bits above `0b1111` are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn passage(self, dir: Direction) -> bool {
        self.0 & dir.bitmask() != 0
    }

    pub const fn north(self) -> bool {
        self.passage(Direction::North)
    }

    pub const fn east(self) -> bool {
        self.passage(Direction::East)
    }

    pub const fn south(self) -> bool {
        self.passage(Direction::South)
    }

    pub const fn west(self) -> bool {
        self.passage(Direction::West)
    }

    pub const fn passage_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Open directions in [`Direction::ALL`] order.
    pub fn passages(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.passage(d))
    }

    #[inline]
    fn with(mut self, dir: Direction, open: bool) -> Self {
        if open {
            self.0 |= dir.bitmask();
        }
        self
    }
}

/// A `width x height` grid of cells joined by passages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    // Blocks per row, sized for width + 1 columns.
    block_width: usize,
    // height + 1 rows.
    blocks: Vec<Block>,
}

impl Maze {
    /// Create a maze with no passages.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let block_width = (width as usize + 1 + CELL_MASK) >> CELL_SHIFT;
        let blocks = vec![0 as Block; block_width * (height as usize + 1)];

        tracing::debug!(width, height, blocks = blocks.len(), "allocated maze");

        Ok(Self {
            width,
            height,
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

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Block index and bit mask of the north (`NORTH_BIT`) or west
    /// (`WEST_BIT`) flag owned by cell `(x, y)`. Accepts the padding row and
    /// column.
    #[inline]
    fn slot(&self, x: usize, y: usize, bit: u32) -> (usize, Block) {
        let index = y * self.block_width + (x >> CELL_SHIFT);
        let shift = (x & CELL_MASK) as u32 * CELL_BITS as u32 + bit;
        (index, 1 << shift)
    }

    /// The physical slot holding the passage from in-bounds cell `(x, y)`
    /// towards `dir`.
    #[inline]
    fn edge(&self, x: i32, y: i32, dir: Direction) -> (usize, Block) {
        let (x, y) = (x as usize, y as usize);
        match dir {
            Direction::North => self.slot(x, y, NORTH_BIT),
            Direction::West => self.slot(x, y, WEST_BIT),
            Direction::South => self.slot(x, y + 1, NORTH_BIT),
            Direction::East => self.slot(x + 1, y, WEST_BIT),
        }
    }

    #[inline]
    fn read(&self, (index, mask): (usize, Block)) -> bool {
        self.blocks[index] & mask != 0
    }

    /// Passage snapshot of `(x, y)`. Out-of-bounds cells have no passages.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if !self.contains(x, y) {
            return Cell::CLOSED;
        }
        Direction::ALL.into_iter().fold(Cell::CLOSED, |cell, dir| {
            cell.with(dir, self.read(self.edge(x, y, dir)))
        })
    }

    /// Whether `(x, y)` has a passage towards `dir`. False outside the grid.
    #[inline]
    pub fn get_passage(&self, x: i32, y: i32, dir: Direction) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.read(self.edge(x, y, dir))
    }

    /// Whether [`Maze::set_passage`] accepts `(x, y, dir)`: the cell is in the
    /// grid and so is its neighbor towards `dir`.
    #[inline]
    pub fn can_set_passage(&self, x: i32, y: i32, dir: Direction) -> bool {
        match dir {
            Direction::North => x >= 0 && x < self.width && y >= 1 && y < self.height,
            Direction::West => x >= 1 && x < self.width && y >= 0 && y < self.height,
            Direction::South => x >= 0 && x < self.width && y >= 0 && y < self.height - 1,
            Direction::East => x >= 0 && x < self.width - 1 && y >= 0 && y < self.height,
        }
    }

    /// Opens (`value = true`) or closes the passage from `(x, y)` towards
    /// `dir`.
    ///
    /// The neighbor's opposite passage shares the same bit and changes with
    /// it. Passages that would cross the outer boundary, or that start outside
    /// the grid, are rejected and leave the maze untouched.
    pub fn set_passage(&mut self, x: i32, y: i32, dir: Direction, value: bool) -> Result<()> {
        if !self.can_set_passage(x, y, dir) {
            tracing::debug!(x, y, dir = dir.name(), "rejected passage outside the grid");
            return Err(GridError::PassageOutOfBounds { x, y, dir });
        }
        let (index, mask) = self.edge(x, y, dir);
        if value {
            self.blocks[index] |= mask;
        } else {
            self.blocks[index] &= !mask;
        }
        Ok(())
    }
}

impl fmt::Display for Maze {
    /// Renders walls as ASCII, e.g. a 2x1 maze with one east passage:
    ///
    /// ```text
    /// +--+--+
    /// |     |
    /// +--+--+
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            self.fmt_wall_row(f, |x| self.get_passage(x, y, Direction::North))?;
            for x in 0..self.width {
                let open = self.get_passage(x, y, Direction::West);
                f.write_str(if open { "   " } else { "|  " })?;
            }
            f.write_str("|\n")?;
        }
        let last = self.height - 1;
        self.fmt_wall_row(f, |x| self.get_passage(x, last, Direction::South))
    }
}

impl Maze {
    fn fmt_wall_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        open: impl Fn(i32) -> bool,
    ) -> fmt::Result {
        for x in 0..self.width {
            f.write_str(if open(x) { "+  " } else { "+--" })?;
        }
        f.write_str("+\n")
    }
}
