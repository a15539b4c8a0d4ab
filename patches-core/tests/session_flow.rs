//! Integration tests for the session controller against the scripted mock.
//!
//! These drive full games through `GameController` and verify the state
//! machine, the view model, and the failure semantics without network.

use patches_core::testing::{idle_snapshot, playing_snapshot, MockBackend, MockCall};
use patches_core::{Answer, ApiError, ButtonSet, GameController, Phase};

fn controller() -> GameController<MockBackend> {
    GameController::new(MockBackend::new())
}

// =============================================================================
// HAPPY PATH
// =============================================================================

#[tokio::test]
async fn test_mount_creates_session_and_waits_for_start() {
    let mut game = controller();
    game.backend_mut().queue_session("s1");

    game.new_game().await.expect("new_game failed");

    assert_eq!(game.state().phase(), Phase::Idle);
    let view = game.view_model();
    assert_eq!(view.header.title, "Please press Start...");
    assert_eq!(view.sidebar.buttons, ButtonSet::Idle);
}

#[tokio::test]
async fn test_start_then_judge_through_a_level() {
    let mut game = controller();
    {
        let mock = game.backend_mut();
        mock.queue_session("s1");
        mock.queue_snapshot(playing_snapshot("r1", 1, 5, 3, 0));
        mock.queue_snapshot(playing_snapshot("r1", 2, 5, 3, 1));
        mock.queue_snapshot(idle_snapshot(3, 2));
    }

    game.new_game().await.expect("new_game failed");
    game.start_level().await.expect("start_level failed");
    assert!(game.state().playing());
    assert_eq!(game.view_model().header.title, "r1 (1/5)");
    assert_eq!(game.view_model().sidebar.buttons, ButtonSet::Judging);

    game.submit(Answer::Yes).await.expect("submit failed");
    assert!(game.state().playing());
    assert_eq!(game.view_model().header.title, "r1 (2/5)");
    assert_eq!(game.view_model().sidebar.score, Some(1));

    // Server ends the level: back to idle.
    game.submit(Answer::No).await.expect("submit failed");
    assert_eq!(game.state().phase(), Phase::Idle);
    assert_eq!(game.view_model().header.title, "Please press Start...");
    assert_eq!(game.view_model().sidebar.buttons, ButtonSet::Idle);

    assert_eq!(
        game.backend().calls,
        vec![
            MockCall::NewGame,
            MockCall::GenerateLevel("s1".to_string()),
            MockCall::Submit("s1".to_string(), Answer::Yes),
            MockCall::Submit("s1".to_string(), Answer::No),
        ]
    );
}

// =============================================================================
// GAME OVER
// =============================================================================

#[tokio::test]
async fn test_losing_last_life_forces_game_over() {
    let mut game = controller();
    {
        let mock = game.backend_mut();
        mock.queue_session("s1");
        mock.queue_snapshot(playing_snapshot("r1", 1, 5, 1, 0));
        mock.queue_snapshot(playing_snapshot("r1", 1, 5, 0, 0));
    }

    game.new_game().await.expect("new_game failed");
    game.start_level().await.expect("start_level failed");
    assert!(game.view_model().sidebar.low_lives);

    game.submit(Answer::Yes).await.expect("submit failed");
    assert!(game.state().game_over());
    assert_eq!(game.view_model().header.title, "Game Over!");
    assert_eq!(game.view_model().sidebar.buttons, ButtonSet::Idle);
}

#[tokio::test]
async fn test_start_after_game_over_begins_a_fresh_session() {
    let mut game = controller();
    {
        let mock = game.backend_mut();
        mock.queue_session("s1");
        mock.queue_snapshot(playing_snapshot("r1", 1, 5, 0, 0));
        mock.queue_session("s2");
        mock.queue_snapshot(playing_snapshot("r2", 1, 3, 3, 0));
    }

    game.new_game().await.expect("new_game failed");
    game.start_level().await.expect("start_level failed");
    assert!(game.state().game_over());

    // Start from game over: a fresh new_game is awaited first.
    game.start_level().await.expect("restart failed");
    assert!(game.state().playing());
    assert_eq!(game.view_model().header.title, "r2 (1/3)");
    assert_eq!(
        game.backend().calls,
        vec![
            MockCall::NewGame,
            MockCall::GenerateLevel("s1".to_string()),
            MockCall::NewGame,
            MockCall::GenerateLevel("s2".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_explicit_end_is_sticky_and_renders_last_snapshot() {
    let mut game = controller();
    {
        let mock = game.backend_mut();
        mock.queue_session("s1");
        mock.queue_snapshot(playing_snapshot("r1", 1, 5, 2, 7));
    }

    game.new_game().await.expect("new_game failed");
    game.start_level().await.expect("start_level failed");

    game.end();
    assert!(game.state().game_over());
    let view = game.view_model();
    assert_eq!(view.header.title, "Game Over!");
    assert_eq!(view.sidebar.lives, Some(2));
    assert_eq!(view.sidebar.score, Some(7));

    // Still over until a new game starts.
    game.end();
    assert!(game.state().game_over());
}

// =============================================================================
// GUARDS
// =============================================================================

#[tokio::test]
async fn test_start_while_playing_is_a_no_op() {
    let mut game = controller();
    {
        let mock = game.backend_mut();
        mock.queue_session("s1");
        mock.queue_snapshot(playing_snapshot("r1", 1, 5, 3, 0));
    }

    game.new_game().await.expect("new_game failed");
    game.start_level().await.expect("start_level failed");
    let calls_before = game.backend().calls.len();

    // Rapid double-trigger: the second Start issues no request.
    game.start_level().await.expect("second start failed");
    assert_eq!(game.backend().calls.len(), calls_before);
    assert!(game.state().playing());
}

#[tokio::test]
async fn test_submit_while_idle_is_a_no_op() {
    let mut game = controller();
    game.backend_mut().queue_session("s1");

    game.new_game().await.expect("new_game failed");
    game.submit(Answer::Yes).await.expect("submit failed");

    assert_eq!(game.backend().calls, vec![MockCall::NewGame]);
    assert_eq!(game.state().phase(), Phase::Idle);
}

// =============================================================================
// FAILURES
// =============================================================================

#[tokio::test]
async fn test_network_error_leaves_state_unchanged_and_retry_works() {
    let mut game = controller();
    {
        let mock = game.backend_mut();
        mock.queue_session("s1");
        mock.queue_snapshot_error(ApiError::Network("connection refused".to_string()));
        mock.queue_snapshot(playing_snapshot("r1", 1, 5, 3, 0));
    }

    game.new_game().await.expect("new_game failed");
    let state_before = game.state().clone();

    let err = game.start_level().await.expect_err("expected network error");
    assert!(!err.is_protocol());
    assert_eq!(game.state(), &state_before);

    // The user retries the same action.
    game.start_level().await.expect("retry failed");
    assert!(game.state().playing());
}

#[tokio::test]
async fn test_parse_error_poisons_the_session() {
    let mut game = controller();
    {
        let mock = game.backend_mut();
        mock.queue_session("s1");
        mock.queue_snapshot(playing_snapshot("r1", 1, 5, 3, 0));
        mock.queue_snapshot_error(ApiError::Parse("missing field `lives`".to_string()));
        mock.queue_session("s2");
        mock.queue_snapshot(playing_snapshot("r2", 1, 3, 3, 0));
    }

    game.new_game().await.expect("new_game failed");
    game.start_level().await.expect("start_level failed");

    let err = game.submit(Answer::No).await.expect_err("expected parse error");
    assert!(err.is_protocol());
    assert!(game.state().game_over());

    // Judgments are blocked until a fresh game.
    let calls_before = game.backend().calls.len();
    game.submit(Answer::Yes).await.expect("guarded submit failed");
    assert_eq!(game.backend().calls.len(), calls_before);

    game.start_level().await.expect("restart failed");
    assert!(game.state().playing());
    assert_eq!(game.view_model().header.title, "r2 (1/3)");
}
