use crate::state::Position;

/// Rectangular board geometry.
///
/// The playable area spans `0..columns` × `0..rows`. It is surrounded by a
/// one-cell ring of outer walls at `x ∈ {-1, columns}` / `y ∈ {-1, rows}`.
/// The interior used for random placement is `1..=columns-2` × `1..=rows-2`,
/// which keeps a free lane along the inside of the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl MapDimensions {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Returns true for cells inside the outer-wall ring.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.columns as i32
            && position.y < self.rows as i32
    }

    /// Returns true for cells of the outer-wall ring.
    pub fn is_border(&self, position: Position) -> bool {
        let (cols, rows) = (self.columns as i32, self.rows as i32);
        let on_ring_x = position.x == -1 || position.x == cols;
        let on_ring_y = position.y == -1 || position.y == rows;
        let within_x = (-1..=cols).contains(&position.x);
        let within_y = (-1..=rows).contains(&position.y);
        (on_ring_x && within_y) || (on_ring_y && within_x)
    }

    /// Returns true for cells eligible for random placement.
    pub fn is_interior(&self, position: Position) -> bool {
        position.x >= 1
            && position.y >= 1
            && position.x <= self.columns as i32 - 2
            && position.y <= self.rows as i32 - 2
    }

    pub fn interior_capacity(&self) -> u64 {
        u64::from(self.columns.saturating_sub(2)) * u64::from(self.rows.saturating_sub(2))
    }

    /// Iterates interior cells column by column.
    pub fn interior(&self) -> impl Iterator<Item = Position> + '_ {
        let max_x = self.columns as i32 - 2;
        let max_y = self.rows as i32 - 2;
        (1..=max_x).flat_map(move |x| (1..=max_y).map(move |y| Position::new(x, y)))
    }

    /// Iterates every cell of the laid-out board, ring included.
    pub fn all_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.columns as i32;
        let rows = self.rows as i32;
        (-1..=cols).flat_map(move |x| (-1..=rows).map(move |y| Position::new(x, y)))
    }

    /// Fixed exit location in the top-right corner of the playable area.
    pub fn exit(&self) -> Position {
        Position::new(self.columns as i32 - 1, self.rows as i32 - 1)
    }
}

impl Default for MapDimensions {
    fn default() -> Self {
        Self::new(8, 8)
    }
}

/// Static tile categories laid down before any feature is scattered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    Floor,
    OuterWall,
}

/// A static tile with its cosmetic variant.
///
/// The variant index only selects a sprite; it has no gameplay effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    pub position: Position,
    pub terrain: TerrainKind,
    pub variant: u8,
}

impl StaticTile {
    pub const fn new(position: Position, terrain: TerrainKind, variant: u8) -> Self {
        Self {
            position,
            terrain,
            variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_ring_and_interior() {
        let dims = MapDimensions::new(8, 8);
        assert!(dims.is_border(Position::new(-1, -1)));
        assert!(dims.is_border(Position::new(8, 3)));
        assert!(dims.is_border(Position::new(4, 8)));
        assert!(!dims.is_border(Position::new(0, 0)));
        assert!(!dims.is_border(Position::new(9, 3)));

        assert!(dims.is_interior(Position::new(1, 1)));
        assert!(dims.is_interior(Position::new(6, 6)));
        assert!(!dims.is_interior(Position::new(0, 3)));
        assert!(!dims.is_interior(Position::new(7, 7)));
    }

    #[test]
    fn interior_lists_every_cell_once() {
        let dims = MapDimensions::new(8, 6);
        let cells: Vec<_> = dims.interior().collect();
        assert_eq!(cells.len() as u64, dims.interior_capacity());
        assert_eq!(cells.len(), 6 * 4);
        let mut deduped = cells.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), cells.len());
    }

    #[test]
    fn all_cells_cover_ring() {
        let dims = MapDimensions::new(8, 8);
        assert_eq!(dims.all_cells().count(), 10 * 10);
        assert_eq!(dims.all_cells().filter(|p| dims.is_border(*p)).count(), 36);
        assert_eq!(dims.exit(), Position::new(7, 7));
    }
}
