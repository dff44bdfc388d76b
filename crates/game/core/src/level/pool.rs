use crate::env::{MapDimensions, RngOracle, SeededRng};
use crate::state::Position;

/// Errors raised by [`RandomCellPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("cell pool exhausted: no unoccupied interior cell left to draw")]
    Exhausted,
}

/// Unoccupied interior cells of one level, drawn without replacement.
///
/// The pool only shrinks while a level is generated; [`reset`](Self::reset)
/// refills it for the next level.
#[derive(Clone, Debug, Default)]
pub struct RandomCellPool {
    cells: Vec<Position>,
}

impl RandomCellPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refills the pool with every interior cell exactly once.
    pub fn reset(&mut self, dimensions: MapDimensions) {
        self.cells.clear();
        self.cells.extend(dimensions.interior());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Position) -> bool {
        self.cells.contains(&cell)
    }

    /// Removes and returns a uniformly random cell.
    pub fn draw<R: RngOracle>(&mut self, rng: &mut SeededRng<R>) -> Result<Position, PoolError> {
        if self.cells.is_empty() {
            return Err(PoolError::Exhausted);
        }
        let index = rng.index(self.cells.len());
        Ok(self.cells.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn reset_fills_interior() {
        let mut pool = RandomCellPool::new();
        pool.reset(MapDimensions::new(8, 8));
        assert_eq!(pool.len(), 36);
        assert!(pool.contains(Position::new(1, 1)));
        assert!(pool.contains(Position::new(6, 6)));
        assert!(!pool.contains(Position::new(0, 0)));
        assert!(!pool.contains(Position::new(7, 7)));
    }

    #[test]
    fn draws_never_repeat_and_shrink_the_pool() {
        let mut pool = RandomCellPool::new();
        let mut rng = SeededRng::new(1234, 0);
        pool.reset(MapDimensions::new(8, 8));
        let initial = pool.len();

        let mut seen = HashSet::new();
        for k in 1..=initial {
            let cell = pool.draw(&mut rng).unwrap();
            assert!(seen.insert(cell), "cell {cell} drawn twice");
            assert_eq!(pool.len(), initial - k);
        }

        assert_eq!(pool.draw(&mut rng), Err(PoolError::Exhausted));
    }

    #[test]
    fn reset_after_draws_restores_every_cell() {
        let mut pool = RandomCellPool::new();
        let mut rng = SeededRng::new(5, 0);
        let dims = MapDimensions::new(5, 4);
        pool.reset(dims);
        pool.draw(&mut rng).unwrap();
        pool.draw(&mut rng).unwrap();
        pool.reset(dims);
        assert_eq!(pool.len() as u64, dims.interior_capacity());
    }
}
