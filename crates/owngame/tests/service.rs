//! End-to-end tests through the `owngame` facade: config → service →
//! create / check password / join, with errors flowing into
//! `OwngameError` via `?`.

use owngame::prelude::*;
use tokio::task::JoinSet;

// =========================================================================
// Helpers
// =========================================================================

fn service_from(json: &str) -> Result<RoomService, OwngameError> {
    let config = ServerConfig::from_json_str(json)?;
    Ok(RoomService::with_config(config.rooms))
}

/// The request-layer flow: check the password, then join.
fn enter(
    svc: &RoomService,
    room: &str,
    password: &str,
    who: &str,
) -> Result<PlayerRole, OwngameError> {
    svc.check_password(room, password)?;
    Ok(svc.join_room(room, who)?)
}

// =========================================================================
// Flows
// =========================================================================

#[test]
fn test_default_config_room_holds_host_plus_three() -> Result<(), OwngameError> {
    let svc = service_from("{}")?;
    svc.create_room(&RoomCreateRequest::new("A", "p"), "creator")?;

    assert_eq!(enter(&svc, "A", "p", "alice")?, PlayerRole::Host);
    assert_eq!(enter(&svc, "A", "p", "bob")?, PlayerRole::Participant);
    assert_eq!(enter(&svc, "A", "p", "carol")?, PlayerRole::Participant);
    assert_eq!(enter(&svc, "A", "p", "dave")?, PlayerRole::Participant);

    let err = enter(&svc, "A", "p", "erin").unwrap_err();
    assert!(matches!(err, OwngameError::Room(RoomError::JoinFailed(_))));
    Ok(())
}

#[test]
fn test_wrong_password_is_rejected_before_join() -> Result<(), OwngameError> {
    let svc = service_from("{}")?;
    svc.create_room(&RoomCreateRequest::new("A", "p"), "creator")?;

    let err = enter(&svc, "A", "nope", "alice").unwrap_err();

    assert!(matches!(err, OwngameError::Room(RoomError::PasswordMismatch(_))));
    assert!(svc.membership("A").is_none(), "nobody should have joined");
    Ok(())
}

#[test]
fn test_unknown_room_is_not_found() -> Result<(), OwngameError> {
    let svc = service_from("{}")?;

    let err = enter(&svc, "ghost", "p", "x").unwrap_err();

    assert_eq!(err.to_string(), "room ghost not found");
    Ok(())
}

#[test]
fn test_configured_capacity_applies() -> Result<(), OwngameError> {
    let svc = service_from(r#"{"rooms": {"max_participants": 1}}"#)?;
    svc.create_room(&RoomCreateRequest::new("duel", "p"), "creator")?;

    assert_eq!(enter(&svc, "duel", "p", "alice")?, PlayerRole::Host);
    assert_eq!(enter(&svc, "duel", "p", "bob")?, PlayerRole::Participant);
    assert!(enter(&svc, "duel", "p", "carol").is_err());
    assert!(svc.room_info("duel")?.is_full());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_lobby_fills_exactly() {
    let svc = service_from("{}").unwrap();
    svc.create_room(&RoomCreateRequest::new("A", "p"), "creator").unwrap();

    let mut tasks = JoinSet::new();
    for i in 0..20 {
        let svc = svc.clone();
        tasks.spawn(async move { enter(&svc, "A", "p", &format!("p{i}")) });
    }

    let mut admitted = 0;
    while let Some(result) = tasks.join_next().await {
        if result.unwrap().is_ok() {
            admitted += 1;
        }
    }

    assert_eq!(admitted, 4);
    assert_eq!(svc.membership("A").unwrap().occupancy(), 4);
}
