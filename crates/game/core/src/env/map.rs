use crate::state::Position;

/// Static map oracle exposing immutable layout information.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Grid center, rounding toward the top-left.
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn last_column(&self) -> i32 {
        self.width as i32 - 1
    }

    pub fn last_row(&self) -> i32 {
        self.height as i32 - 1
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_passable(self) -> bool {
        self.terrain.is_passable()
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
    StairsDown,
    StairsUp,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        !matches!(self, TerrainKind::Wall)
    }

    pub fn glyph(self) -> char {
        match self {
            TerrainKind::Floor => '.',
            TerrainKind::Wall => '#',
            TerrainKind::StairsDown => '>',
            TerrainKind::StairsUp => '<',
        }
    }

    /// Terrain drawn with `glyph`, if it is a terrain glyph at all.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(TerrainKind::Floor),
            '#' => Some(TerrainKind::Wall),
            '>' => Some(TerrainKind::StairsDown),
            '<' => Some(TerrainKind::StairsUp),
            _ => None,
        }
    }
}

/// Row-major terrain grid implementing [`MapOracle`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    dimensions: MapDimensions,
    tiles: Vec<TerrainKind>,
}

impl GridMap {
    /// An all-floor map.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            tiles: vec![TerrainKind::Floor; (width as usize) * (height as usize)],
        }
    }

    /// Builds a map from text rows. Terrain glyphs map to their terrain,
    /// blanks and the padding of short rows become walls, and every other
    /// glyph (actors, items) stands on floor.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let height = rows.len() as u32;
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0) as u32;
        let mut map = Self::open(width, height);
        for (y, row) in rows.iter().enumerate() {
            let mut chars = row.as_ref().chars();
            for x in 0..width as usize {
                let terrain = match chars.next() {
                    None | Some(' ') => TerrainKind::Wall,
                    Some(glyph) => TerrainKind::from_glyph(glyph).unwrap_or(TerrainKind::Floor),
                };
                map.set(Position::new(x as i32, y as i32), terrain);
            }
        }
        map
    }

    pub fn set(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = terrain;
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.index(position)
            .map(|index| StaticTile::new(self.tiles[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_reads_terrain_and_pads_short_rows() {
        let map = GridMap::from_rows(&["#.>", "@"]);
        assert_eq!(map.dimensions(), MapDimensions::new(3, 2));
        assert_eq!(map.tile(Position::new(0, 0)).map(StaticTile::terrain), Some(TerrainKind::Wall));
        assert_eq!(
            map.tile(Position::new(2, 0)).map(StaticTile::terrain),
            Some(TerrainKind::StairsDown)
        );
        assert!(map.tile(Position::new(0, 1)).is_some_and(StaticTile::is_passable));
        assert!(!map.tile(Position::new(1, 1)).is_some_and(StaticTile::is_passable));
        assert!(map.tile(Position::new(3, 0)).is_none());
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(MapDimensions::new(11, 6).center(), Position::new(5, 3));
    }
}
