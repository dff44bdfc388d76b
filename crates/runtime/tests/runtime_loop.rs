use game_core::{CardinalDirection, CountRange, GameConfig, GameOverReason, TurnPhase};
use runtime::{
    Event, RenderEvent, RunSummary, Runtime, RuntimeError, ScriptedInputProvider, Topic,
};

/// Level 1 without pickups, so food only ever goes down.
fn hungry_config(food: i32) -> GameConfig {
    let mut config = GameConfig::default();
    config.player.starting_food = food;
    config.board.pickups = CountRange::new(0, 0);
    config
}

#[tokio::test(start_paused = true)]
async fn scripted_player_starves_on_the_first_day() {
    let mut runtime = Runtime::builder()
        .game_config(hungry_config(5))
        .seed(11)
        .frame_rate(20)
        .input_provider(ScriptedInputProvider::new([
            CardinalDirection::North,
            CardinalDirection::East,
        ]))
        .build()
        .await
        .unwrap();

    let summary = runtime.run().await.unwrap();
    assert_eq!(
        summary,
        RunSummary {
            days: 1,
            reason: GameOverReason::Starved,
            message: "After 1 days, you starved.".into(),
        }
    );

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn snapshot_starts_in_setup() {
    let runtime = Runtime::builder().seed(3).build().await.unwrap();
    let snapshot = runtime.handle().query_snapshot().await.unwrap();

    assert_eq!(snapshot.level, 1);
    assert_eq!(snapshot.food, 100);
    assert_eq!(snapshot.phase, TurnPhase::Setup);
    assert!(!snapshot.awaiting_input);
    assert!(snapshot.world.entities.enemies.is_empty());

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn render_topic_opens_with_the_board() {
    let runtime = Runtime::builder().seed(5).build().await.unwrap();
    let mut render = runtime.handle().subscribe(Topic::Render);

    match render.recv().await.unwrap() {
        Event::Render(RenderEvent::LevelLoaded { level, world }) => {
            assert_eq!(level, 1);
            assert_eq!(world.tiles.len(), 100);
        }
        other => panic!("expected the level layout first, got {other:?}"),
    }

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn player_turn_without_provider_is_an_error() {
    let mut runtime = Runtime::builder().seed(1).frame_rate(20).build().await.unwrap();

    match runtime.run().await {
        Err(RuntimeError::ProviderNotSet) => {}
        other => panic!("expected ProviderNotSet, got {other:?}"),
    }

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn zero_frame_rate_is_rejected() {
    match Runtime::builder().frame_rate(0).build().await {
        Err(RuntimeError::InvalidFrameRate { frame_rate: 0 }) => {}
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("runtime built with a zero frame rate"),
    }
}

#[tokio::test]
async fn invalid_board_fails_before_the_worker_starts() {
    let mut config = GameConfig::default();
    config.board.walls = CountRange::new(30, 40);

    match Runtime::builder().game_config(config).build().await {
        Err(RuntimeError::Game(_)) => {}
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("runtime built with an overfull board"),
    }
}

#[tokio::test(start_paused = true)]
async fn events_serialize_for_logging() {
    let runtime = Runtime::builder().seed(8).build().await.unwrap();
    let mut ui = runtime.handle().subscribe(Topic::Ui);

    let event = ui.recv().await.unwrap();
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("Day 1"), "{json}");

    runtime.shutdown().await.unwrap();
}
