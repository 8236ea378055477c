//! # mazegrid
//!
//! Compact grid substrate for maze generation algorithms.
//!
//! Two sibling structures, both bit-packed into `u32` blocks:
//!
//! - [`GridMask`]: one boolean per cell plus a fixed exterior value, for
//!   visited/unvisited tracking.
//! - [`Maze`]: passage state in the four cardinal directions, stored as two
//!   bits per cell. Neighboring cells share the bit for their common edge, so
//!   opening a passage from one side opens it from the other.
//!
//! Reads are total over all `i32` coordinates. Mutations outside the mutable
//! region return a [`GridError`] and change nothing.
//!
//! ## Quick Start
//!
//! ```
//! use mazegrid::prelude::*;
//!
//! let mut maze = Maze::new(4, 3)?;
//! let mut visited = GridMask::new(4, 3)?;
//!
//! visited.set(0, 0, true)?;
//! for dir in Direction::ALL {
//!     let (nx, ny) = dir.step(0, 0);
//!     if maze.can_set_passage(0, 0, dir) && visited.test_and_set(nx, ny, true)? {
//!         maze.set_passage(0, 0, dir, true)?;
//!     }
//! }
//! assert!(maze.cell(0, 0).east() && maze.cell(0, 0).south());
//! assert!(maze.cell(1, 0).west());
//! # Ok::<(), GridError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Serialization for `Direction`, `Cell` and `GridMaskOptions`
//!
//! ## no_std Support
//!
//! Disable default features for `no_std` + `alloc` environments:
//! ```toml
//! mazegrid = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[path = "core/direction.rs"]
pub mod direction;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/grid_mask.rs"]
pub mod grid_mask;

#[path = "core/maze.rs"]
pub mod maze;

#[path = "core/prng.rs"]
pub mod prng;

pub use direction::Direction;
pub use error::{GridError, Result};
pub use grid_mask::{GridMask, GridMaskOptions};
pub use maze::{Cell, Maze};

/// Prelude module for convenient imports.
///
/// ```
/// use mazegrid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::direction::Direction;
    pub use crate::error::GridError;
    pub use crate::grid_mask::{GridMask, GridMaskOptions};
    pub use crate::maze::{Cell, Maze};
    pub use crate::prng::Prng;
}
