//! Mapping between screen pixels and board cells.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Coordinate;

pub const DEFAULT_TILE_SIZE: i32 = 128;

/// Screen rectangle of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TileRect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let inside = |p: i32, start: i32, len: i32| {
            p.checked_sub(start).is_some_and(|d| d >= 0 && d < len)
        };
        inside(x, self.x, self.width) && inside(y, self.y, self.height)
    }
}

/// Where the board sits on screen and how large its tiles are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub origin_x: i32,
    pub origin_y: i32,
    pub tile_width: i32,
    pub tile_height: i32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
        }
    }
}

impl BoardGeometry {
    /// Places default-sized tiles offset from the top-left of a display.
    pub fn from_display(width: u32, height: u32) -> Self {
        Self {
            origin_x: (width as f32 / 3.5) as i32,
            origin_y: (height / 6) as i32,
            ..Self::default()
        }
    }

    /// The cell under a pixel, or `None` off the board.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Coordinate> {
        if self.tile_width <= 0 || self.tile_height <= 0 {
            return None;
        }
        let col = x.checked_sub(self.origin_x)?.div_euclid(self.tile_width);
        let row = y.checked_sub(self.origin_y)?.div_euclid(self.tile_height);
        let in_range = |v: i32| (0..i32::from(BOARD_SIZE)).contains(&v);
        (in_range(row) && in_range(col)).then(|| Coordinate::new(row as i8, col as i8))
    }

    /// Screen rectangle of `coord`, or `None` off the board.
    pub fn tile_rect(&self, coord: Coordinate) -> Option<TileRect> {
        coord.is_in_bounds().then(|| TileRect {
            x: self.origin_x + i32::from(coord.col) * self.tile_width,
            y: self.origin_y + i32::from(coord.row) * self.tile_height,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// Total pixel size of the board.
    pub fn board_size(&self) -> (i32, i32) {
        let cells = i32::from(BOARD_SIZE);
        (self.tile_width * cells, self.tile_height * cells)
    }
}
