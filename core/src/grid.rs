use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of tiles stored row-major.
///
/// Lines handed out by [`Grid::get_row`] and [`Grid::get_column`] are owned
/// copies, writing them back is always an explicit `set_*` call. Serialized as
/// nested rows, deserializing goes through [`Grid::from_rows`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    cells: Array2<Tile>,
}

impl Grid {
    /// All-empty `size`×`size` grid.
    pub fn empty(size: Coord) -> Self {
        assert!(size > 0, "grid size must be positive");
        let size = usize::from(size);
        Self {
            cells: Array2::zeros((size, size)),
        }
    }

    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 || size > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut flat = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::InvalidBoardShape);
            }
            if let Some(&tile) = row.iter().find(|&&tile| !is_valid_tile(tile)) {
                return Err(GameError::InvalidTile(tile));
            }
            flat.extend_from_slice(row);
        }

        let cells =
            Array2::from_shape_vec((size, size), flat).map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn cell_at(&self, coords: Coord2) -> Tile {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn set_cell(&mut self, coords: Coord2, tile: Tile) {
        debug_assert!(is_valid_tile(tile));
        self.cells[coords.to_nd_index()] = tile;
    }

    pub fn get_row(&self, row: Coord) -> Line {
        assert!(row < self.size(), "row {row} out of range");
        self.cells.row(row.into()).to_vec()
    }

    pub fn get_column(&self, column: Coord) -> Line {
        assert!(column < self.size(), "column {column} out of range");
        self.cells.column(column.into()).to_vec()
    }

    pub fn set_row(&mut self, row: Coord, line: &[Tile]) {
        assert!(row < self.size(), "row {row} out of range");
        self.check_line_len(line);
        for (cell, &tile) in self.cells.row_mut(row.into()).iter_mut().zip(line) {
            *cell = tile;
        }
    }

    pub fn set_column(&mut self, column: Coord, line: &[Tile]) {
        assert!(column < self.size(), "column {column} out of range");
        self.check_line_len(line);
        for (cell, &tile) in self.cells.column_mut(column.into()).iter_mut().zip(line) {
            *cell = tile;
        }
    }

    pub fn get_line(&self, kind: LineKind, index: Coord) -> Line {
        match kind {
            LineKind::Row => self.get_row(index),
            LineKind::Column => self.get_column(index),
        }
    }

    pub fn set_line(&mut self, kind: LineKind, index: Coord, line: &[Tile]) {
        match kind {
            LineKind::Row => self.set_row(index, line),
            LineKind::Column => self.set_column(index, line),
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&tile| tile != 0)
    }

    pub fn empty_cells(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&tile| tile == 0)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Rows in top-to-bottom order, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Tile>> {
        self.cells.rows().into_iter()
    }

    /// Overwrites every row with the rows of `other`, keeping this storage.
    pub fn replace_with(&mut self, other: &Grid) {
        assert_eq!(self.size(), other.size(), "grid sizes differ");
        for row in 0..self.size() {
            self.set_row(row, &other.get_row(row));
        }
    }

    fn check_line_len(&self, line: &[Tile]) {
        assert_eq!(
            line.len(),
            usize::from(self.size()),
            "line length does not match grid size"
        );
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(|row| row.to_vec()).collect()
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
