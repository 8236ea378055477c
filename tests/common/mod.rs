//! Shared carving harness: a seeded depth-first carver standing in for an
//! external generation algorithm, plus helpers for inspecting its output.

use mazegrid::prelude::*;

/// Carve a perfect maze with an iterative recursive backtracker.
///
/// Visited state lives in a `GridMask` whose exterior reads as visited, so
/// out-of-bounds neighbors are skipped by `test_and_set` without an explicit
/// bounds check.
pub fn carve_backtracker(maze: &mut Maze, seed: u64) -> Result<(), GridError> {
    if maze.width() == 0 || maze.height() == 0 {
        return Ok(());
    }
    let mut rng = Prng::new(seed);
    let mut visited = GridMask::with_options(
        maze.width(),
        maze.height(),
        GridMaskOptions::default().with_exterior(true),
    )?;

    let start = (
        rng.below(maze.width() as usize) as i32,
        rng.below(maze.height() as usize) as i32,
    );
    visited.set(start.0, start.1, true)?;
    let mut stack = vec![start];

    while let Some(&(x, y)) = stack.last() {
        let mut advanced = false;
        for dir in rng.directions() {
            let (nx, ny) = dir.step(x, y);
            if visited.test_and_set(nx, ny, true)? {
                maze.set_passage(x, y, dir, true)?;
                stack.push((nx, ny));
                advanced = true;
                break;
            }
        }
        if !advanced {
            stack.pop();
        }
    }
    Ok(())
}

pub fn generate(width: i32, height: i32, seed: u64) -> Maze {
    let mut maze = Maze::new(width, height).unwrap();
    carve_backtracker(&mut maze, seed).unwrap();
    maze
}

pub fn cells(maze: &Maze) -> impl Iterator<Item = (i32, i32)> + '_ {
    (0..maze.height()).flat_map(move |y| (0..maze.width()).map(move |x| (x, y)))
}
