use game_core::{
    CardinalDirection, CountRange, EntityId, FoodChange, GameConfig, GameEvent, GameOverReason,
    GameSession, Position, SessionStatus, TurnPhase, Vec2,
};

const DT: f32 = 0.05;

fn ticks_until(session: &mut GameSession, limit: usize, done: impl Fn(&GameSession) -> bool) {
    for _ in 0..limit {
        if done(session) {
            return;
        }
        session.tick(DT, None).unwrap();
    }
    assert!(done(session), "condition not reached within {limit} ticks");
}

/// Waits for the controlling turn, then submits one attempt.
fn step(session: &mut GameSession, direction: CardinalDirection) {
    ticks_until(session, 500, |s| s.awaiting_input() || s.is_over());
    session.tick(DT, Some(direction)).unwrap();
}

fn tiny_board() -> GameConfig {
    let mut config = GameConfig::default();
    config.board.columns = 3;
    config.board.rows = 3;
    config.board.walls = CountRange::new(0, 0);
    config.board.pickups = CountRange::new(0, 0);
    config
}

#[test]
fn first_day_on_the_default_board() {
    let mut session = GameSession::new(GameConfig::default(), 2024).unwrap();
    let entities = &session.world().entities;

    assert_eq!(session.current_level(), 1);
    assert!(entities.enemies.is_empty());
    assert!((5..=9).contains(&entities.walls.len()));
    assert!((1..=5).contains(&entities.pickups.len()));
    assert_eq!(entities.exit.position, Position::new(7, 7));
    assert!(session.scheduler().roster().is_empty());

    ticks_until(&mut session, 100, |s| s.phase() != TurnPhase::Setup);
    assert_eq!(session.phase(), TurnPhase::Controlling);
    let events = session.drain_events();
    assert!(events.contains(&GameEvent::SetupFinished));
}

#[test]
fn last_food_ends_the_game_before_the_autonomous_turn() {
    let mut session = GameSession::new(GameConfig::default(), 7).unwrap();
    session.set_food(1);
    ticks_until(&mut session, 100, GameSession::awaiting_input);
    session.drain_events();

    session.tick(DT, Some(CardinalDirection::North)).unwrap();

    assert_eq!(session.food(), 0);
    assert_eq!(
        session.status(),
        SessionStatus::GameOver(GameOverReason::Starved)
    );
    assert_eq!(session.phase(), TurnPhase::Controlling);

    let events = session.drain_events();
    assert!(!events.contains(&GameEvent::TurnChanged {
        phase: TurnPhase::Autonomous
    }));
    assert!(events.contains(&GameEvent::GameOver {
        days: 1,
        reason: GameOverReason::Starved,
        message: "After 1 days, you starved.".into(),
    }));

    for _ in 0..50 {
        session.tick(DT, Some(CardinalDirection::East)).unwrap();
    }
    assert!(session.drain_events().is_empty());
    assert_eq!(session.food(), 0);
}

#[test]
fn enemy_attack_on_low_food_ends_the_run_once() {
    // 2x2 interior holds both day-4 enemies; the player hugs the origin
    let mut config = GameConfig::default();
    config.board.columns = 4;
    config.board.rows = 4;
    config.board.walls = CountRange::new(0, 0);
    config.board.pickups = CountRange::new(0, 0);
    let mut session = GameSession::starting_at(config, 21, 4).unwrap();
    assert_eq!(session.scheduler().roster().len(), 2);
    session.set_food(12);

    let mut events = Vec::new();
    for _ in 0..30 {
        if session.is_over() {
            break;
        }
        step(&mut session, CardinalDirection::West);
        events.extend(session.drain_events());
    }

    assert_eq!(
        session.status(),
        SessionStatus::GameOver(GameOverReason::Starved)
    );
    assert!(session.food() <= 0);

    let game_overs: Vec<_> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e, GameEvent::GameOver { .. }))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(game_overs.len(), 1);
    let over_at = game_overs[0];
    assert_eq!(
        events[over_at],
        GameEvent::GameOver {
            days: 4,
            reason: GameOverReason::Starved,
            message: "After 4 days, you starved.".into(),
        }
    );

    // the fatal blow came from an enemy, not from the player's own step
    let fatal = events[..over_at]
        .iter()
        .rposition(|e| matches!(e, GameEvent::FoodChanged { .. }))
        .unwrap();
    assert!(matches!(
        events[fatal],
        GameEvent::FoodChanged {
            change: FoodChange::Lost(_),
            ..
        }
    ));
    assert!(
        !events[over_at..]
            .iter()
            .any(|e| matches!(e, GameEvent::TurnChanged { .. }))
    );

    for _ in 0..50 {
        session.tick(DT, Some(CardinalDirection::West)).unwrap();
    }
    assert!(session.drain_events().is_empty());
}

#[test]
fn turns_alternate_strictly() {
    let mut session = GameSession::starting_at(GameConfig::default(), 99, 4).unwrap();
    assert_eq!(session.scheduler().roster().len(), 2);

    let directions = CardinalDirection::ALL;
    let mut phases = Vec::new();
    for round in 0..40 {
        if session.is_over() {
            break;
        }
        step(&mut session, directions[round % directions.len()]);
        phases.extend(session.drain_events().into_iter().filter_map(|e| match e {
            GameEvent::TurnChanged { phase } => Some(phase),
            _ => None,
        }));
    }

    let phases: Vec<_> = phases
        .into_iter()
        .filter(|p| *p != TurnPhase::Setup)
        .collect();
    assert!(phases.len() >= 2);
    for pair in phases.windows(2) {
        assert_ne!(pair[0], pair[1], "phase repeated in {phases:?}");
    }
}

#[test]
fn motion_lands_exactly_on_the_target() {
    let mut session = GameSession::new(tiny_board(), 5).unwrap();
    step(&mut session, CardinalDirection::North);

    let player = &session.world().entities.player;
    assert_eq!(player.cell, Position::new(0, 1));
    assert!(player.is_animating());

    ticks_until(&mut session, 100, |s| !s.world().entities.player.is_animating());
    assert_eq!(
        session.world().entities.player.position(),
        Vec2::new(0.0, 1.0)
    );
    assert!(session.drain_events().contains(&GameEvent::EntityArrived {
        entity: EntityId::PLAYER,
        position: Position::new(0, 1),
    }));
}

#[test]
fn blocked_moves_still_cost_food() {
    let mut session = GameSession::new(tiny_board(), 5).unwrap();
    step(&mut session, CardinalDirection::West);
    assert_eq!(session.food(), 99);
    assert_eq!(session.world().entities.player.cell, Position::ORIGIN);
    assert_eq!(session.phase(), TurnPhase::Autonomous);
}

#[test]
fn reaching_the_exit_loads_the_next_day() {
    let mut session = GameSession::new(tiny_board(), 11).unwrap();
    for direction in [
        CardinalDirection::North,
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::East,
    ] {
        step(&mut session, direction);
    }
    assert_eq!(session.food(), 96);

    ticks_until(&mut session, 200, |s| s.current_level() == 2);
    let events = session.drain_events();
    assert!(events.contains(&GameEvent::ExitReached { level: 1 }));
    assert!(events.contains(&GameEvent::LevelStarted { level: 2 }));

    assert_eq!(session.food(), 96);
    assert_eq!(session.phase(), TurnPhase::Setup);
    let player = &session.world().entities.player;
    assert_eq!(player.cell, Position::ORIGIN);
    assert!(player.enabled);
    // log2(2) = 1 enemy on the single interior cell
    assert_eq!(session.scheduler().roster().len(), 1);
    assert_eq!(
        session.world().entities.enemies[0].cell,
        Position::new(1, 1)
    );
}

#[test]
fn survival_timer_expires() {
    let mut config = tiny_board();
    config.time_limit = Some(1.0);
    let mut session = GameSession::new(config, 1).unwrap();
    for _ in 0..4 {
        session.tick(0.25, None).unwrap();
    }
    assert_eq!(
        session.status(),
        SessionStatus::GameOver(GameOverReason::TimeExpired)
    );
    let events = session.drain_events();
    assert!(events.contains(&GameEvent::TimerChanged {
        display: "00:01".into()
    }));
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let run = || {
        let mut session = GameSession::starting_at(GameConfig::default(), 1234, 3).unwrap();
        let mut log = Vec::new();
        for round in 0..12 {
            let direction = CardinalDirection::ALL[(round * 3) % 4];
            for _ in 0..20 {
                session.tick(DT, Some(direction)).unwrap();
            }
            log.extend(session.drain_events());
        }
        (log, session.snapshot())
    };
    assert_eq!(run(), run());
}
