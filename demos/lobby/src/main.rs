//! Lobby demo: one room, a crowd of players racing to get in.
//!
//! Run with:
//!
//! ```text
//! cargo run -p lobby                      # default config
//! cargo run -p lobby -- lobby.json        # custom config
//! RUST_LOG=owngame_room=debug cargo run -p lobby
//! ```
//!
//! The first player through becomes host, the next `max_participants`
//! become participants, and the rest are turned away. A late arrival
//! then joins as an observer.

use owngame::prelude::*;
use tokio::task::JoinSet;

const ROOM: &str = "friday-quiz";
const PASSWORD: &str = "open-sesame";
const CROWD: usize = 8;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    init_tracing(&config.log_filter)?;

    let service = RoomService::with_config(config.rooms.clone());
    service.create_room(&RoomCreateRequest::new(ROOM, PASSWORD), "organiser")?;
    println!(
        "{ROOM}: host plus {} participant slots for {CROWD} players",
        service.config().max_participants
    );

    // A second organiser picking the same name loses.
    if let Err(e) = service.create_room(&RoomCreateRequest::new(ROOM, "other"), "latecomer") {
        eprintln!("second create: {e}");
    }

    // Wrong password is refused before joining.
    if let Err(e) = service.check_password(ROOM, "guess") {
        eprintln!("bad password: {e}");
    }

    let mut joins = JoinSet::new();
    for i in 0..CROWD {
        let service = service.clone();
        joins.spawn(async move {
            let player = format!("player-{i}");
            let outcome = service
                .check_password(ROOM, PASSWORD)
                .and_then(|()| service.join_room(ROOM, &player));
            (player, outcome)
        });
    }

    while let Some(joined) = joins.join_next().await {
        let (player, outcome) = joined?;
        match outcome {
            Ok(role) => println!("{player}: {role}"),
            Err(e) => println!("{player}: {e}"),
        }
    }

    let role = service.observe_room(ROOM, "spectator")?;
    println!("spectator: {role}");

    if let Some(members) = service.membership(ROOM) {
        let turned_away = (0..CROWD)
            .map(|i| format!("player-{i}"))
            .filter(|player| !members.contains(player))
            .count();
        println!("turned away: {turned_away}");
    }

    let info = service.room_info(ROOM)?;
    tracing::info!(room = %info.name, participants = info.participant_count, "lobby settled");
    println!("{}", serde_json::to_string_pretty(&info)?);

    Ok(())
}
