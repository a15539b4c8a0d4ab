//! Integration tests against a live game server.
//!
//! These tests require a server running at `PATCHES_API_URL` and are
//! ignored by default.
//!
//! Run with: `PATCHES_API_URL=http://localhost:8000/api cargo test -p patches-api -- --ignored --nocapture`

use patches_api::{Answer, GameApi};

/// Check if a server address was provided.
fn has_server() -> bool {
    std::env::var(patches_api::BASE_URL_ENV).is_ok()
}

#[tokio::test]
#[ignore]
async fn test_new_game_returns_session() {
    if !has_server() {
        eprintln!("Skipping test: PATCHES_API_URL not set");
        return;
    }

    let api = GameApi::from_env();
    let session = api.new_game().await.expect("new_game failed");
    assert!(!session.as_str().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_full_round_trip() {
    if !has_server() {
        eprintln!("Skipping test: PATCHES_API_URL not set");
        return;
    }

    let api = GameApi::from_env();
    let session = api.new_game().await.expect("new_game failed");

    let snapshot = api
        .generate_level(&session)
        .await
        .expect("generate_level failed");
    println!("lives: {}, score: {}", snapshot.lives, snapshot.score);

    let level = snapshot
        .current_level
        .expect("generate_level returned no level");
    println!(
        "level: {} ({}/{})",
        level.repo_id, level.prompt_number, level.max_prompts
    );
    assert!(snapshot.current_prompt.is_some());

    let after = api
        .submit_answer(&session, Answer::Yes)
        .await
        .expect("submit_answer failed");
    println!("after submit: lives {}, score {}", after.lives, after.score);
}
