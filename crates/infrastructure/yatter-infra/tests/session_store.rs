use tempfile::tempdir;
use yatter_app_core::{CheckLoginUseCase, CheckLoginUseCaseImpl, SessionStore};
use yatter_core::{ServiceErrorKind, Session, Username};
use yatter_infra::FileSessionStore;

#[tokio::test]
async fn missing_file_means_no_session() {
    let dir = tempdir().unwrap();
    let store = FileSessionStore::with_dir(dir.path());
    assert_eq!(store.load().await.unwrap(), None);
    store.clear().await.unwrap();
}

#[tokio::test]
async fn save_load_clear() {
    let dir = tempdir().unwrap();
    let store = FileSessionStore::with_dir(dir.path().join("nested"));

    let session = Session::new(Username::new("alice"), Some("tok".into()));
    store.save(&session).await.unwrap();
    assert!(store.path().exists());
    assert!(!dir.path().join("nested/session.json.tmp").exists());
    assert_eq!(store.load().await.unwrap(), Some(session));

    store.clear().await.unwrap();
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn overwrite_replaces_previous_session() {
    let dir = tempdir().unwrap();
    let store = FileSessionStore::with_dir(dir.path());
    store
        .save(&Session::new(Username::new("alice"), None))
        .await
        .unwrap();
    store
        .save(&Session::new(Username::new("bob"), None))
        .await
        .unwrap();
    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.username.as_str(), "bob");
}

#[tokio::test]
async fn corrupt_file_is_a_storage_error_and_reads_as_logged_out() {
    let dir = tempdir().unwrap();
    let store = FileSessionStore::with_dir(dir.path());
    std::fs::write(store.path(), b"{not json").unwrap();

    let err = store.load().await.unwrap_err();
    assert_eq!(err.kind(), ServiceErrorKind::Storage);

    let check = CheckLoginUseCaseImpl::new(std::sync::Arc::new(store));
    assert!(!check.execute().await);
}
