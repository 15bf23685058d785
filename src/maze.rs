//! The maze board: an immutable grid of tiles.

/// What a single board tile is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Path,
    Quiz,
    Event,
    Goal,
}

impl TileKind {
    /// Walls are the only tiles the player can never stand on.
    pub fn is_walkable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    /// Decode a layout table code. Unknown codes become walls.
    fn from_code(code: u8) -> TileKind {
        match code {
            1 => TileKind::Path,
            2 => TileKind::Quiz,
            3 => TileKind::Goal,
            4 => TileKind::Event,
            _ => TileKind::Wall,
        }
    }
}

/// Default board layout (7 rows x 10 cols).
/// 0 = wall, 1 = path, 2 = quiz, 3 = goal, 4 = event.
/// Start is (0,0); the single goal sits at (6,9).
const DEFAULT_LAYOUT: [[u8; 10]; 7] = [
    [1, 1, 2, 0, 1, 0, 1, 4, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 1, 0, 2, 0, 0, 4, 1, 1, 1],
    [1, 0, 1, 1, 1, 1, 1, 0, 1, 0],
    [2, 1, 1, 0, 4, 2, 1, 1, 1, 2],
    [1, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 2, 1, 1, 1, 1, 1, 4, 1, 3],
];

/// Rectangular grid of tiles. Never mutated after construction;
/// out-of-bounds coordinates are invalid moves, not errors.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Vec<Vec<TileKind>>,
}

impl Maze {
    /// The fixed board shipped with the game.
    pub fn standard() -> Self {
        let grid = DEFAULT_LAYOUT
            .iter()
            .map(|row| row.iter().map(|&c| TileKind::from_code(c)).collect())
            .collect();
        Self { grid }
    }

    /// Build a maze from a layout code table (used by tests and custom boards).
    pub fn from_codes(rows: &[&[u8]]) -> Self {
        let grid = rows
            .iter()
            .map(|row| row.iter().map(|&c| TileKind::from_code(c)).collect())
            .collect();
        Self { grid }
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// The tile at (row, col), or `None` when out of bounds.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<TileKind> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Position of the goal tile, scanning row-major.
    pub fn goal_position(&self) -> Option<(usize, usize)> {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                if tile == TileKind::Goal {
                    return Some((r, c));
                }
            }
        }
        None
    }
}
