use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{Direction, Position};

/// Represents errors that can occur within the grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Coordinates ({x}, {y}) are out of bounds for grid size ({width}, {height})")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
}

/// A generic 2D grid structure.
///
/// Stores elements of type `T` in a flat vector using row-major order.
/// Cells are read by `Position` index or in row-major order via `enumerate`;
/// `step` moves between neighbours with bounds checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a new grid with the specified dimensions, filled by a generator function.
    ///
    /// The generator function `f` takes a `Position` and returns the value for that cell.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn from_generator<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        let size = width.checked_mul(height).expect("Grid size overflow");
        let mut cells = Vec::with_capacity(size);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Position { x, y }));
            }
        }
        Grid {
            width,
            height,
            cells,
        }
    }

    /// Returns the width of the grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Converts (x, y) coordinates to a flat vector index.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    fn coords_to_index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Checks if the given position is within the grid boundaries.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Computes the neighbour of `from` in `direction`.
    ///
    /// No wraparound: stepping off any edge is an `OutOfBounds` error that
    /// reports the (possibly negative) coordinates that were attempted.
    pub fn step(&self, from: Position, direction: Direction) -> Result<Position, GridError> {
        let (dx, dy) = direction.delta();
        let out_of_bounds = || GridError::OutOfBounds {
            x: from.x as isize + dx,
            y: from.y as isize + dy,
            width: self.width,
            height: self.height,
        };

        let x = from.x.checked_add_signed(dx).ok_or_else(out_of_bounds)?;
        let y = from.y.checked_add_signed(dy).ok_or_else(out_of_bounds)?;
        let target = Position { x, y };
        if self.contains(target) {
            Ok(target)
        } else {
            Err(out_of_bounds())
        }
    }

    /// Returns an iterator that yields `(Position, &T)` for each cell.
    pub fn enumerate(&self) -> impl Iterator<Item = (Position, &T)> {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let y = index / width;
            let x = index % width;
            (Position { x, y }, cell)
        })
    }
}

/// Indexing using Position coordinates for access
impl<T> Index<Position> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: Position) -> &Self::Output {
        let (x, y) = (index.x, index.y);
        match self.coords_to_index(x, y) {
            Some(idx) => &self.cells[idx],
            None => panic!(
                "Grid index ({}, {}) out of bounds for grid size ({}, {})",
                x, y, self.width, self.height
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GRID_SIZE;

    fn empty_grid() -> Grid<()> {
        Grid::from_generator(GRID_SIZE, GRID_SIZE, |_| ())
    }

    #[test]
    fn test_step_inside_grid() {
        let grid = empty_grid();
        let start = Position::new(3, 5);
        assert_eq!(grid.step(start, Direction::North), Ok(Position::new(3, 4)));
        assert_eq!(grid.step(start, Direction::South), Ok(Position::new(3, 6)));
        assert_eq!(grid.step(start, Direction::East), Ok(Position::new(4, 5)));
        assert_eq!(grid.step(start, Direction::West), Ok(Position::new(2, 5)));
    }

    #[test]
    fn test_step_off_the_edges() {
        let grid = empty_grid();
        assert_eq!(
            grid.step(Position::new(0, 4), Direction::West),
            Err(GridError::OutOfBounds {
                x: -1,
                y: 4,
                width: GRID_SIZE,
                height: GRID_SIZE,
            })
        );
        assert!(grid.step(Position::new(4, 0), Direction::North).is_err());
        assert!(grid.step(Position::new(9, 4), Direction::East).is_err());
        assert!(grid.step(Position::new(4, 9), Direction::South).is_err());
    }

    #[test]
    fn test_generator_and_enumerate_agree() {
        let grid = Grid::from_generator(4, 3, |p| p.x + 10 * p.y);
        assert_eq!(grid[Position::new(2, 1)], 12);
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert!(!grid.contains(Position::new(4, 0)));
        for (position, value) in grid.enumerate() {
            assert_eq!(*value, position.x + 10 * position.y);
        }
        assert_eq!(grid.enumerate().last().map(|(p, _)| p), Some(Position::new(3, 2)));
    }
}
