mod common;

use std::time::Duration;
use serde_json::json;
use coherent_cache::cache::enums::cache_event::CacheEvent;
use coherent_cache::cache::enums::client_state::ClientState;
use coherent_cache::cache::errors::CacheError;
use coherent_cache::cache::structs::invalidation_event::INVALIDATION_CHANNEL;

const LIMIT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_connect_runs_tracking_registration() {
    let store = common::FakeStore::new();
    let _client = common::create_connected_client(&store).await;

    let state = store.state.lock();
    assert_eq!(state.client_id_requests, 1);
    assert_eq!(state.tracking_redirects, vec![1]);
    assert_eq!(state.subscriptions, vec![INVALIDATION_CHANNEL.to_string()]);
}

#[tokio::test]
async fn test_connection_loss_reconnects_and_reregisters() {
    let store = common::FakeStore::new();
    let client = common::create_connected_client(&store).await;
    let mut events = client.subscribe();
    store.state.lock().fail_connects = 1;

    store.drop_data_session();
    common::wait_for_state(&client, LIMIT, |state| state != ClientState::Ready).await;
    assert!(matches!(client.get("a").await, Err(CacheError::NotReady(_))));
    assert!(matches!(client.set("a", json!(1), None).await, Err(CacheError::NotReady(_))));

    common::wait_for_state(&client, LIMIT, |state| state == ClientState::Ready).await;
    {
        let state = store.state.lock();
        assert_eq!(state.client_id_requests, 2);
        assert_eq!(state.tracking_redirects, vec![1, 2]);
        assert_eq!(state.subscriptions.len(), 2);
    }

    let mut seen_reconnecting = false;
    let mut seen_error = false;
    while let Ok(event) = events.try_recv() {
        match event {
            CacheEvent::Reconnecting => seen_reconnecting = true,
            CacheEvent::Error(_) => seen_error = true,
            CacheEvent::StateChanged(_) => {}
        }
    }
    assert!(seen_reconnecting);
    assert!(seen_error, "failed attempt must be reported");

    client.set("a", json!(1), None).await.unwrap();
    assert_eq!(client.get("a").await.unwrap(), Some(json!(1)));
}

#[tokio::test]
async fn test_invalidations_flow_after_reconnect() {
    let store = common::FakeStore::new();
    let client = common::create_connected_client(&store).await;

    store.drop_data_session();
    common::wait_for_state(&client, LIMIT, |_| store.state.lock().subscriptions.len() == 2).await;
    common::wait_for_state(&client, LIMIT, |state| state == ClientState::Ready).await;

    client.set("k", json!("mine"), None).await.unwrap();
    store.put_remote("cache:k", &json!("theirs"));
    store.push_invalidation(&["cache:k"]);
    common::settle().await;
    assert_eq!(client.get("k").await.unwrap(), Some(json!("theirs")));
}

#[tokio::test]
async fn test_signals_from_replaced_sessions_are_ignored() {
    let store = common::FakeStore::new();
    let client = common::create_connected_client(&store).await;
    let stale = store.data_hooks();

    store.drop_data_session();
    common::wait_for_state(&client, LIMIT, |_| store.state.lock().client_id_requests == 2).await;
    common::wait_for_state(&client, LIMIT, |state| state == ClientState::Ready).await;

    stale.on_close();
    stale.on_error("late failure");
    common::settle().await;
    assert_eq!(client.state(), ClientState::Ready);
    assert_eq!(store.state.lock().client_id_requests, 2);
}

#[tokio::test]
async fn test_repeated_signals_start_one_loop() {
    let store = common::FakeStore::new();
    let client = common::create_connected_client(&store).await;
    store.state.lock().fail_connects = 1;

    let hooks = store.data_hooks();
    hooks.on_error("broken pipe");
    hooks.on_close();
    hooks.on_close();

    common::wait_for_state(&client, LIMIT, |state| state != ClientState::Ready).await;
    common::wait_for_state(&client, LIMIT, |state| state == ClientState::Ready).await;
    common::settle().await;
    assert_eq!(store.state.lock().client_id_requests, 2);
}

#[tokio::test]
async fn test_initial_connect_failure_recovers() {
    let store = common::FakeStore::new();
    store.state.lock().fail_connects = 1;
    let client = common::create_test_client(&store, common::create_test_config());
    let mut events = client.subscribe();

    assert!(matches!(client.connect().await, Err(CacheError::ConnectionError(_))));
    assert!(matches!(events.recv().await.unwrap(), CacheEvent::StateChanged(ClientState::Connecting)));
    assert!(matches!(events.recv().await.unwrap(), CacheEvent::Error(_)));

    common::wait_for_state(&client, LIMIT, |state| state == ClientState::Ready).await;
    client.ping().await.unwrap();
}

#[tokio::test]
async fn test_missing_client_id_fails_connect() {
    let store = common::FakeStore::new();
    store.state.lock().missing_client_id = true;
    let client = common::create_test_client(&store, common::create_test_config());

    assert!(matches!(client.connect().await, Err(CacheError::MissingClientId)));
    assert!(store.state.lock().tracking_redirects.is_empty());
    assert_ne!(client.state(), ClientState::Ready);

    client.close().await.unwrap();
    assert_eq!(client.state(), ClientState::Disconnected);
}

#[tokio::test]
async fn test_close_stops_reconnect_loop() {
    let store = common::FakeStore::new();
    let client = common::create_connected_client(&store).await;
    store.state.lock().fail_connects = usize::MAX;

    store.drop_data_session();
    common::wait_for_state(&client, LIMIT, |state| state != ClientState::Ready).await;
    client.close().await.unwrap();
    assert_eq!(client.state(), ClientState::Disconnected);

    store.state.lock().fail_connects = 0;
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(client.state(), ClientState::Disconnected);
    assert_eq!(store.state.lock().client_id_requests, 1);
}

#[tokio::test]
async fn test_close_signal_after_close_is_ignored() {
    let store = common::FakeStore::new();
    let client = common::create_connected_client(&store).await;
    let hooks = store.data_hooks();

    client.close().await.unwrap();
    hooks.on_close();
    common::settle().await;
    assert_eq!(client.state(), ClientState::Disconnected);
}
