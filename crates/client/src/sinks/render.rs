use anyhow::Result;
use async_trait::async_trait;
use tracing::{Level, debug, info, trace};

use game_core::TerrainKind;
use runtime::{Event, RenderEvent, Topic};

use super::EventSink;

/// Logs board changes in place of drawing them.
#[derive(Default)]
pub struct RenderSink;

#[async_trait]
impl EventSink for RenderSink {
    fn topic(&self) -> Topic {
        Topic::Render
    }

    async fn handle(&mut self, event: Event) -> Result<()> {
        let Event::Render(event) = event else {
            return Ok(());
        };

        match &event {
            RenderEvent::LevelLoaded { level, world } => {
                let entities = &world.entities;
                info!(
                    level,
                    floor = world
                        .tiles
                        .iter()
                        .filter(|tile| tile.terrain == TerrainKind::Floor)
                        .count(),
                    walls = entities.walls.len(),
                    pickups = entities.pickups.len(),
                    enemies = entities.enemies.len(),
                    exit = %entities.exit.position,
                    "Board laid out"
                );
                if tracing::enabled!(Level::TRACE) {
                    let layout = serde_json::to_string(world)?;
                    trace!(%layout, "Board layout");
                }
            }
            RenderEvent::MotionStarted { entity, from, to } => {
                debug!(%entity, %from, %to, "Sprite moving");
            }
            RenderEvent::Arrived { entity, position } => {
                debug!(%entity, %position, "Sprite settled");
            }
            RenderEvent::Animation { entity, trigger } => {
                debug!(%entity, %trigger, "Animation");
            }
            RenderEvent::WallDamaged {
                wall, hit_points, ..
            } => {
                debug!(%wall, hit_points, "Wall sprite damaged");
            }
            RenderEvent::Removed { entity, position } => {
                debug!(%entity, %position, "Sprite removed");
            }
        }

        Ok(())
    }
}
