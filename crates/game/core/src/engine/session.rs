use crate::action::{ActionContext, CardinalDirection, enemy, player};
use crate::config::GameConfig;
use crate::env::SeededRng;
use crate::event::{FoodChange, GameEvent, GameOverReason, SoundCue, SoundEffect};
use crate::level::LevelGenerator;
use crate::state::{EntityId, Position, TurnPhase, WorldState};

use super::{GameError, SurvivalTimer, TimerTick, TurnScheduler, TurnStep};

/// RNG stream reserved for level generation.
const GENERATION_STREAM: u32 = 0;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    #[default]
    Running,
    GameOver(GameOverReason),
}

/// Read-only view of a session for providers and UIs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub level: u32,
    pub food: i32,
    pub phase: TurnPhase,
    pub status: SessionStatus,
    pub world: WorldState,
    pub time_remaining: Option<f32>,
    /// True while the player is ready to take its turn.
    pub awaiting_input: bool,
}

impl SessionSnapshot {
    pub fn player_cell(&self) -> Position {
        self.world.entities.player.cell
    }
}

/// One running game, from day 1 until game over.
///
/// The session is the single owner of everything that changes during play:
/// the level number and the food counter carried across levels, the live
/// world, the turn scheduler and the buffered events. The shell drives it by
/// calling [`tick`](Self::tick) once per frame.
pub struct GameSession {
    config: GameConfig,
    seed: u64,
    rng: SeededRng,
    generator: LevelGenerator,
    level: u32,
    food: i32,
    world: WorldState,
    scheduler: TurnScheduler,
    status: SessionStatus,
    restart_in: Option<f32>,
    timer: Option<SurvivalTimer>,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Validates `config` and lays out day 1.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::starting_at(config, seed, 1)
    }

    /// Like [`new`](Self::new) but opens on day `level`.
    pub fn starting_at(config: GameConfig, seed: u64, level: u32) -> Result<Self, GameError> {
        let level = level.max(1);
        config.validate_for_level(level)?;

        let mut session = Self {
            food: config.player.starting_food,
            scheduler: TurnScheduler::new(config.timing.turn_delay),
            rng: SeededRng::new(seed, GENERATION_STREAM),
            config,
            seed,
            generator: LevelGenerator::new(),
            level: 0,
            world: WorldState::default(),
            status: SessionStatus::Running,
            restart_in: None,
            timer: None,
            events: Vec::new(),
        };
        session.load_level(level)?;
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_level(&self) -> u32 {
        self.level
    }

    pub fn food(&self) -> i32 {
        self.food
    }

    /// Overrides the food counter, e.g. when restoring a saved total.
    pub fn set_food(&mut self, food: i32) {
        self.food = food;
    }

    pub fn phase(&self) -> TurnPhase {
        self.scheduler.phase()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, SessionStatus::GameOver(_))
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    /// True when a direction passed to the next tick would be acted on.
    pub fn awaiting_input(&self) -> bool {
        !self.is_over()
            && self.restart_in.is_none()
            && self.scheduler.phase().is_controlling()
            && self.world.entities.player.enabled
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            level: self.level,
            food: self.food,
            phase: self.phase(),
            status: self.status,
            world: self.world.clone(),
            time_remaining: self.timer.as_ref().map(SurvivalTimer::remaining),
            awaiting_input: self.awaiting_input(),
        }
    }

    /// Hands over every event buffered since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advances the simulation by one frame of `dt` seconds.
    ///
    /// `input` is only consumed on the controlling turn; otherwise it is
    /// ignored. After game over every tick is a no-op.
    pub fn tick(&mut self, dt: f32, input: Option<CardinalDirection>) -> Result<(), GameError> {
        if self.is_over() {
            return Ok(());
        }
        let dt = dt.max(0.0);

        if let Some(remaining) = self.restart_in {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.restart_in = None;
                return self.load_level(self.level + 1);
            }
            self.restart_in = Some(remaining);
        }

        self.advance_motions(dt);

        if let Some(timer) = self.timer.as_mut() {
            match timer.tick(dt) {
                TimerTick::Running => {}
                TimerTick::Changed(display) => self.emit(GameEvent::TimerChanged { display }),
                TimerTick::Expired => {
                    self.game_over(GameOverReason::TimeExpired);
                    return Ok(());
                }
            }
        }

        match self.scheduler.advance(dt) {
            TurnStep::Wait => {}
            TurnStep::SetupFinished => {
                self.emit(GameEvent::SetupFinished);
                self.emit(GameEvent::TurnChanged {
                    phase: TurnPhase::Controlling,
                });
            }
            TurnStep::Activate(id) => {
                self.activate_enemy(id)?;
                if self.is_over() {
                    return Ok(());
                }
            }
            TurnStep::ControlReturned => self.emit(GameEvent::TurnChanged {
                phase: TurnPhase::Controlling,
            }),
        }

        if let Some(direction) = input {
            if self.awaiting_input() {
                self.player_turn(direction)?;
            }
        }

        Ok(())
    }

    /// Ends the session. Terminal; repeated calls do nothing.
    pub fn game_over(&mut self, reason: GameOverReason) {
        if self.is_over() {
            return;
        }
        self.status = SessionStatus::GameOver(reason);
        self.scheduler.halt();
        self.restart_in = None;

        let days = self.level;
        self.emit(GameEvent::Sound(SoundCue::single(SoundEffect::GameOver)));
        self.emit(GameEvent::Sound(SoundCue::StopMusic));
        self.emit(GameEvent::GameOver {
            days,
            reason,
            message: reason.message(days),
        });
    }

    fn load_level(&mut self, level: u32) -> Result<(), GameError> {
        let layout = self
            .generator
            .generate(level, &self.config, &mut self.rng)?;
        self.world = layout.build_world(&self.config);
        self.level = level;

        self.scheduler.begin_level(self.config.timing.level_start_delay);
        for enemy in &self.world.entities.enemies {
            self.scheduler.register(enemy.id, enemy.move_time())?;
        }
        self.timer = self.config.time_limit.map(SurvivalTimer::new);

        let total = self.food;
        self.emit(GameEvent::LevelStarted { level });
        self.emit(GameEvent::TurnChanged {
            phase: TurnPhase::Setup,
        });
        self.emit(GameEvent::FoodChanged {
            total,
            change: FoodChange::Step,
        });
        if let Some(timer) = &self.timer {
            let display = timer.display().to_owned();
            self.emit(GameEvent::TimerChanged { display });
        }
        Ok(())
    }

    /// Moves every animating entity and resolves arrivals.
    fn advance_motions(&mut self, dt: f32) {
        let arrivals: Vec<(EntityId, Position)> = self
            .world
            .entities
            .all_mobiles_mut()
            .filter_map(|mobile| mobile.motion.advance(dt).then_some((mobile.id, mobile.cell)))
            .collect();

        for (entity, position) in arrivals {
            self.emit(GameEvent::EntityArrived { entity, position });
            if entity.is_player() && self.world.entities.player.enabled {
                let reached_exit = player::enter_cell(&mut self.context());
                if reached_exit {
                    let level = self.level;
                    self.emit(GameEvent::ExitReached { level });
                    self.restart_in = Some(self.config.timing.restart_level_delay);
                }
            }
        }
    }

    fn player_turn(&mut self, direction: CardinalDirection) -> Result<(), GameError> {
        let attempt = player::attempt(&mut self.context(), direction)?;
        if attempt.starved() {
            self.game_over(GameOverReason::Starved);
            return Ok(());
        }

        self.scheduler.end_controlling_turn()?;
        self.emit(GameEvent::TurnChanged {
            phase: TurnPhase::Autonomous,
        });
        Ok(())
    }

    fn activate_enemy(&mut self, id: EntityId) -> Result<(), GameError> {
        let activation = enemy::activate(&mut self.context(), id)?;
        if activation.starved_player() {
            self.game_over(GameOverReason::Starved);
        }
        Ok(())
    }

    fn context(&mut self) -> ActionContext<'_> {
        ActionContext::new(
            &mut self.world,
            &self.config,
            &mut self.food,
            &mut self.events,
        )
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
