use storage::repository::{AuthSessionRecord, Storage};
use wander_core::model::CountryId;

#[tokio::test]
async fn sqlite_roundtrip_persists_session_and_selection() {
    let storage = Storage::sqlite("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    storage
        .auth_sessions
        .save_session(&AuthSessionRecord::new("token-1"))
        .await
        .expect("save session");
    storage
        .app_state
        .set_selected_country(Some(CountryId::new(4)))
        .await
        .expect("save selection");

    let session = storage
        .auth_sessions
        .load_session()
        .await
        .expect("load session");
    assert_eq!(session.map(|record| record.token), Some("token-1".into()));
    assert_eq!(
        storage.app_state.selected_country().await.expect("load"),
        Some(CountryId::new(4))
    );
}

#[tokio::test]
async fn saving_a_session_replaces_the_previous_one() {
    let storage = Storage::sqlite("sqlite:file:memdb_replace?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    storage
        .auth_sessions
        .save_session(&AuthSessionRecord::new("old"))
        .await
        .expect("save old");
    storage
        .auth_sessions
        .save_session(&AuthSessionRecord::new("new"))
        .await
        .expect("save new");

    let session = storage
        .auth_sessions
        .load_session()
        .await
        .expect("load session");
    assert_eq!(session.map(|record| record.token), Some("new".into()));
}

#[tokio::test]
async fn clearing_state_leaves_nothing_behind() {
    let storage = Storage::sqlite("sqlite:file:memdb_clear?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    storage
        .auth_sessions
        .save_session(&AuthSessionRecord::new("token-1"))
        .await
        .expect("save session");
    storage
        .app_state
        .set_selected_country(Some(CountryId::new(9)))
        .await
        .expect("save selection");

    storage
        .auth_sessions
        .clear_session()
        .await
        .expect("clear session");
    storage
        .app_state
        .set_selected_country(None)
        .await
        .expect("clear selection");

    assert!(
        storage
            .auth_sessions
            .load_session()
            .await
            .expect("load")
            .is_none()
    );
    assert!(
        storage
            .app_state
            .selected_country()
            .await
            .expect("load")
            .is_none()
    );
}
