mod common;

use common::MemorySessionStore;
use std::sync::Arc;
use yatter_app_core::{CheckLoginUseCaseImpl, MainHolder, NavGraph, NavHost, Route};

fn graph() -> NavGraph {
    NavGraph::new()
        .route(Route::Login)
        .route(Route::PublicTimeline)
}

#[tokio::test]
async fn no_session_starts_at_login() {
    let store = Arc::new(MemorySessionStore::default());
    let mut main = MainHolder::new(Arc::new(CheckLoginUseCaseImpl::new(store)));
    assert_eq!(main.ui_state().start_destination, None);

    let start = main.resolve_start_destination().await.unwrap();
    assert_eq!(start, Route::Login);
    assert!(!main.ui_state().is_loading);

    let host = NavHost::new(graph(), start).unwrap();
    assert_eq!(host.back_stack(), &[Route::Login]);
}

#[tokio::test]
async fn stored_session_starts_at_timeline() {
    let store = Arc::new(MemorySessionStore::with_session("alice"));
    let mut main = MainHolder::new(Arc::new(CheckLoginUseCaseImpl::new(store)));

    let mut view = main.snapshot();
    main.on_create().unwrap();
    assert!(view.current().is_loading);

    let start = main.resolve_start_destination().await.unwrap();
    assert_eq!(start, Route::PublicTimeline);
    assert_eq!(
        view.changed().await.and_then(|s| s.start_destination),
        Some(Route::PublicTimeline)
    );
}

#[tokio::test]
async fn unreadable_session_counts_as_logged_out() {
    let store = Arc::new(MemorySessionStore::broken());
    let mut main = MainHolder::new(Arc::new(CheckLoginUseCaseImpl::new(store)));
    assert_eq!(
        main.resolve_start_destination().await.unwrap(),
        Route::Login
    );
}

#[tokio::test]
async fn resolved_start_is_stable() {
    let store = Arc::new(MemorySessionStore::default());
    let mut main = MainHolder::new(Arc::new(CheckLoginUseCaseImpl::new(store.clone())));
    assert_eq!(main.resolve_start_destination().await.unwrap(), Route::Login);

    // A later login does not move the start of an already-built graph.
    use yatter_app_core::SessionStore;
    store
        .save(&yatter_core::Session::new(yatter_core::Username::new("alice"), None))
        .await
        .unwrap();
    main.on_create().unwrap();
    assert_eq!(main.resolve_start_destination().await.unwrap(), Route::Login);
}
