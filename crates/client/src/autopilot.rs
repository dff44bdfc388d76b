//! Greedy bot that walks the player toward the exit.
use async_trait::async_trait;

use game_core::{CardinalDirection, Position, SessionSnapshot};
use runtime::{InputProvider, Result};

/// Closes the larger gap to the exit first and sidesteps enemies when the
/// other axis still makes progress. Walls in the way are simply chopped.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutopilotProvider;

impl AutopilotProvider {
    pub fn choose(snapshot: &SessionSnapshot) -> CardinalDirection {
        let from = snapshot.player_cell();
        let exit = snapshot.world.entities.exit.position;
        let (dx, dy) = (exit.x - from.x, exit.y - from.y);

        let horizontal = (dx != 0).then_some(if dx > 0 {
            CardinalDirection::East
        } else {
            CardinalDirection::West
        });
        let vertical = (dy != 0).then_some(if dy > 0 {
            CardinalDirection::North
        } else {
            CardinalDirection::South
        });
        let (first, second) = if dx.abs() >= dy.abs() {
            (horizontal, vertical)
        } else {
            (vertical, horizontal)
        };

        let enemy_ahead = |direction: CardinalDirection| {
            let (x, y) = direction.delta();
            let cell = Position::new(from.x + x, from.y + y);
            snapshot
                .world
                .entities
                .enemies
                .iter()
                .any(|enemy| enemy.cell == cell)
        };

        [first, second]
            .into_iter()
            .flatten()
            .find(|&direction| !enemy_ahead(direction))
            .or(first)
            .unwrap_or(CardinalDirection::North)
    }
}

#[async_trait]
impl InputProvider for AutopilotProvider {
    async fn provide_input(&self, snapshot: &SessionSnapshot) -> Result<CardinalDirection> {
        Ok(Self::choose(snapshot))
    }
}
