//! Integration tests for the chat list state controller
//!
//! These run on a paused tokio clock, so the 1-3 second load delay elapses
//! instantly and deterministically.

use std::time::Duration;

use chatlist::{
    ChatListStateController, LoadConfig, MockDataProvider, ScreenState, User,
};
use futures_util::StreamExt;
use tokio::time::{sleep, timeout};

#[tokio::test(start_paused = true)]
async fn test_loading_right_after_construction() {
    let controller = ChatListStateController::new(MockDataProvider::default());
    sleep(Duration::ZERO).await;
    assert_eq!(controller.current_state(), ScreenState::Loading);
}

#[tokio::test(start_paused = true)]
async fn test_success_after_max_delay() {
    let controller = ChatListStateController::new(MockDataProvider::default());

    sleep(Duration::from_millis(3100)).await;

    let state = controller.current_state();
    let snapshot = state.snapshot().expect("Expected success state");
    assert_eq!(snapshot.chats.len(), 10);
    assert_eq!(snapshot.filters, vec!["All", "Unread", "Groups"]);
    assert_eq!(snapshot.current_user, User::new("Joao"));
}

#[tokio::test(start_paused = true)]
async fn test_success_is_terminal() {
    let controller = ChatListStateController::new(MockDataProvider::default());

    sleep(Duration::from_millis(3100)).await;
    let loaded = controller.current_state();
    assert!(loaded.is_success());

    sleep(Duration::from_secs(60)).await;
    assert_eq!(controller.current_state(), loaded);
}

#[tokio::test(start_paused = true)]
async fn test_not_loaded_before_min_delay() {
    let controller = ChatListStateController::new(MockDataProvider::default());
    sleep(Duration::from_millis(999)).await;
    assert!(controller.current_state().is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_loads_exactly_at_chosen_delay() {
    let controller = ChatListStateController::new(MockDataProvider::default());
    let delay = controller.load_delay();

    sleep(delay - Duration::from_millis(1)).await;
    assert!(controller.current_state().is_loading());

    sleep(Duration::from_millis(2)).await;
    assert!(controller.current_state().is_success());
}

#[tokio::test(start_paused = true)]
async fn test_subscriber_sees_loading_then_one_success() {
    let controller = ChatListStateController::new(MockDataProvider::default());
    let mut subscription = controller.subscribe();
    assert!(subscription.current().is_loading());

    let next = subscription.changed().await.expect("Controller alive");
    assert!(next.is_success());

    // No further publication: the wait only ends because of the timeout.
    let extra = timeout(Duration::from_secs(10), subscription.changed()).await;
    assert!(extra.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_stream_yields_current_then_success() {
    let controller = ChatListStateController::new(MockDataProvider::default());
    let states: Vec<ScreenState> = controller.subscribe().into_stream().take(2).collect().await;

    assert_eq!(states.len(), 2);
    assert!(states[0].is_loading());
    assert!(states[1].is_success());
}

#[tokio::test(start_paused = true)]
async fn test_late_subscriber_reads_success_synchronously() {
    let controller = ChatListStateController::new(MockDataProvider::default());
    sleep(Duration::from_millis(3100)).await;

    let mut subscription = controller.subscribe();
    assert!(subscription.current().is_success());

    let snapshot = subscription.wait_until_loaded().await.expect("Already loaded");
    assert_eq!(snapshot.chats.len(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_drop_before_delay_never_publishes() {
    let controller = ChatListStateController::new(MockDataProvider::default());
    let mut subscription = controller.subscribe();

    sleep(Duration::from_millis(500)).await;
    drop(controller);

    sleep(Duration::from_secs(5)).await;
    assert!(subscription.current().is_loading());
    assert_eq!(subscription.changed().await, None);
    assert_eq!(subscription.wait_until_loaded().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_stream_ends_after_loading() {
    let controller = ChatListStateController::new(MockDataProvider::default());
    let stream = controller.subscribe().into_stream();
    drop(controller);

    let states: Vec<ScreenState> = stream.collect().await;
    assert_eq!(states, vec![ScreenState::Loading]);
}

#[tokio::test(start_paused = true)]
async fn test_custom_load_config() {
    let load = LoadConfig {
        delay_ms: chatlist::config::DelayRange::new(10, 20),
        chat_count: 3,
    };
    let controller = ChatListStateController::spawn(MockDataProvider::default(), load)
        .expect("Valid config");

    let snapshot = controller
        .subscribe()
        .wait_until_loaded()
        .await
        .expect("Loaded");
    assert_eq!(snapshot.chats.len(), 3);
    assert!(controller.load_delay() < Duration::from_millis(20));
}

#[tokio::test(start_paused = true)]
async fn test_independent_controllers() {
    let first = ChatListStateController::new(MockDataProvider::default());
    let second = ChatListStateController::new(MockDataProvider::default());
    drop(first);

    sleep(Duration::from_millis(3100)).await;
    assert!(second.current_state().is_success());
}
