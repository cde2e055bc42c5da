use std::fs;
use std::path::Path;

use super::error::GridError;
use crate::graph::Graph;

//─────────────────────────────────────────────────────────────────────────────

/// Cell separator used by matrix files unless told otherwise.
pub const DEFAULT_DELIMITER: char = ';';

/// A rectangular matrix of integer cells stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    /// Appends one vertex per cell (row-major) and connects every cell to its
    /// right neighbor and to the cell directly below it. No diagonals.
    ///
    /// Vertices are appended after whatever the graph already holds.
    pub fn populate(&self, graph: &mut Graph) -> Result<(), GridError> {
        let base = graph.len();
        for &value in &self.cells {
            graph.add_vertex_at_end(value)?;
        }

        for i in 0..self.cells.len() {
            let row = i / self.cols;
            let col = i % self.cols;
            if col + 1 < self.cols {
                graph.add_edge(base + i, base + i + 1)?;
            }
            if row + 1 < self.rows {
                graph.add_edge(base + i, base + i + self.cols)?;
            }
        }
        Ok(())
    }
}

/// Parses delimited text into a `Grid`.
///
/// Blank lines are skipped and cells are trimmed; empty cells (a trailing or
/// doubled delimiter) are ignored. The first row fixes the column count and
/// every later row must match it. Row and column numbers in errors are
/// 1-based.
pub fn parse_grid(text: &str, delimiter: char) -> Result<Grid, GridError> {
    let mut cols = 0usize;
    let mut rows = 0usize;
    let mut cells = Vec::new();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let row_start = cells.len();
        for (col, cell) in line
            .split(delimiter)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .enumerate()
        {
            let value = cell.parse::<i32>().map_err(|_| GridError::InvalidCell {
                row: rows + 1,
                col: col + 1,
                cell: cell.to_string(),
            })?;
            cells.push(value);
        }

        let width = cells.len() - row_start;
        if rows == 0 {
            cols = width;
        } else if width != cols {
            return Err(GridError::Ragged {
                row: rows + 1,
                expected: cols,
                found: width,
            });
        }
        rows += 1;
    }

    if rows == 0 || cols == 0 {
        return Err(GridError::Empty);
    }
    Ok(Grid { rows, cols, cells })
}

/// Reads a matrix file, parses it and loads it into `graph`.
pub fn load_grid_from_file(
    file_path: &Path,
    delimiter: char,
    graph: &mut Graph,
) -> Result<Grid, GridError> {
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| GridError::ReadFile(file_path.display().to_string(), e))?;

    let grid = parse_grid(&file_content, delimiter)?;
    grid.populate(graph)?;
    Ok(grid)
}
