use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board dimension and positions.
pub type Coord = u8;

/// Count type used for total-cell and empty-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Value of a single cell: `0` when empty, otherwise a power of two.
pub type Tile = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Largest tile a board can hold. A pair of them never merges.
pub const MAX_TILE: Tile = 1 << 31;

/// Whether `tile` may legally sit on a board.
pub const fn is_valid_tile(tile: Tile) -> bool {
    tile == 0 || (tile >= 2 && tile <= MAX_TILE && tile.is_power_of_two())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    Row,
    Column,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Up and Down slide columns, Left and Right slide rows.
    pub const fn line_kind(self) -> LineKind {
        match self {
            Self::Up | Self::Down => LineKind::Column,
            Self::Left | Self::Right => LineKind::Row,
        }
    }

    /// Whether tiles travel toward index 0 of each line.
    pub const fn toward_low_index(self) -> bool {
        matches!(self, Self::Up | Self::Left)
    }
}

/// Player intent as decoded by a frontend.
///
/// `Unknown` is an ordinary value for unrecognized input, the frontend decides
/// whether to ignore it or re-prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveIntent {
    Up,
    Down,
    Left,
    Right,
    Restart,
    Quit,
    Unknown,
}

impl MoveIntent {
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Restart | Self::Quit | Self::Unknown => None,
        }
    }
}

impl From<Direction> for MoveIntent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}
