//! A two-dimensional, text-friendly projection of a tree.
//!
//! [`Tree::render`] computes the tree's height, allocates a [`Grid`] of
//! `height` rows by `2^height - 1` columns, and walks the tree once,
//! dropping every value at a column where it cannot collide with any other
//! subtree. The resulting [`Grid`] can be inspected cell by cell or printed
//! through its [`Display`] implementation, which zero-pads each value to
//! three characters (the layout lines up for values of three or fewer
//! digits).
//!
//! # Examples
//!
//! ```
//! use treegrid::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [50, 30, 70] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.render().to_string(), "   050   \n030   070\n");
//! ```
//!
//! [`Tree::render`]: crate::tree::Tree::render
//! [`Display`]: std::fmt::Display

use std::fmt;
use std::iter;

use crate::tree::{Node, Tree};

/// The state of one grid position.
///
/// The grid distinguishes a position the placement walk never looked at
/// from a position it looked at and found empty, so a caller can draw
/// blank branches only where a parent actually exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell<T> {
    /// A node's value lives at this position.
    Value(T),
    /// The node above this position exists but has no child on this side.
    Absent,
    /// No part of the tree maps to this position.
    Unused,
}

/// A rectangular projection of a [`Tree`], one [`Cell`] per position.
///
/// Rows count levels from the root down and columns count horizontal
/// positions from the left. Cells live in a flat row-major buffer sized
/// when the grid is built; rendering an empty tree builds a grid with zero
/// rows and zero columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Cell<T>>,
}

impl<T> Grid<T> {
    fn new(rows: usize, columns: usize) -> Self {
        let cells = iter::repeat_with(|| Cell::Unused)
            .take(rows * columns)
            .collect();
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// The number of rows, one per tree level.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns, `2^rows - 1` for a non-empty grid.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at the given position, or `None` when the position
    /// falls outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell<T>> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column)
    }

    /// Visits every cell in row-major order as `(row, column, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell<T>)> {
        // `cells` is empty whenever `columns` is zero, so the divisions
        // below are never reached with a zero divisor.
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (index / columns, index % columns, cell))
    }

    fn set(&mut self, row: usize, column: usize, cell: Cell<T>) {
        // A column past the edge would wrap into a neighboring row's slice
        // of the flat buffer without tripping the index bound.
        debug_assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column] = cell;
    }
}

impl<T> fmt::Display for Grid<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                match &self.cells[row * self.columns + column] {
                    Cell::Value(value) => write!(f, "{:0>3}", value)?,
                    Cell::Absent | Cell::Unused => f.write_str("   ")?,
                }
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

impl<T> Tree<T> {
    /// Lays this tree out on a fresh [`Grid`].
    ///
    /// The grid has one row per tree level and `2^height - 1` columns. The
    /// root goes at the middle column; each child goes one row down,
    /// centered within its half of the parent's column span, which keeps
    /// every subtree inside its own band of columns. A present node with a
    /// missing child marks the child's position [`Cell::Absent`]; positions
    /// the walk never reaches stay [`Cell::Unused`].
    ///
    /// The grid borrows the values, so the tree cannot be modified while
    /// the grid is alive. An empty tree produces a grid with no rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use treegrid::grid::Cell;
    /// use treegrid::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(50);
    /// tree.insert(30);
    /// tree.insert(70);
    ///
    /// let grid = tree.render();
    ///
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.columns(), 3);
    /// assert_eq!(grid.get(0, 1), Some(&Cell::Value(&50)));
    /// assert_eq!(grid.get(1, 0), Some(&Cell::Value(&30)));
    /// assert_eq!(grid.get(1, 2), Some(&Cell::Value(&70)));
    /// ```
    pub fn render(&self) -> Grid<&T> {
        let height = self.height();
        let columns = (1usize << height) - 1;

        let mut grid = Grid::new(height, columns);
        place(&mut grid, self.root(), 0, columns / 2, height);
        grid
    }
}

/// Writes the subtree rooted at `node` into `grid`. `remaining` is how many
/// levels of the grid are still below `row`, inclusive.
fn place<'a, T>(
    grid: &mut Grid<&'a T>,
    node: Option<&'a Node<T>>,
    row: usize,
    column: usize,
    remaining: usize,
) {
    let node = match node {
        Some(node) => node,
        None => {
            // Dispatched for a present parent's missing child. The root
            // call of an empty tree has `remaining == 0` and marks nothing.
            if remaining > 0 {
                grid.set(row, column, Cell::Absent);
            }
            return;
        }
    };

    grid.set(row, column, Cell::Value(node.value()));

    if remaining < 2 {
        // A node on the last row cannot have children, or the tree would
        // be taller than the height the grid was sized for.
        debug_assert!(node.left().is_none() && node.right().is_none());
        return;
    }

    let offset = 1usize << (remaining - 2);
    place(grid, node.left(), row + 1, column - offset, remaining - 1);
    place(grid, node.right(), row + 1, column + offset, remaining - 1);
}
