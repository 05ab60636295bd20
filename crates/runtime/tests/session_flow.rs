use realm_content::{Content, ContentFactory};
use realm_core::{Direction, Intent, Mode, MoveRejection, Position, Rejection, Tile};
use realm_runtime::GameSession;

/// Plays a fixed route, respawning whenever the player is down.
fn play(session: &mut GameSession, route: &[Direction]) {
    for &direction in route {
        let intent = match session.mode() {
            Mode::Defeated => Intent::Respawn,
            _ => Intent::Move(direction),
        };
        session.submit(intent).unwrap();
    }
}

#[test]
fn same_seed_same_game() {
    use Direction::*;
    let route = [
        West, West, West, North, North, West, West, South, South, South, South, East, East,
        East, East, East, East, South, South, South, West, North, North,
    ];

    let mut a = GameSession::new(Content::default(), 2024).unwrap();
    let mut b = GameSession::new(Content::default(), 2024).unwrap();
    play(&mut a, &route);
    play(&mut b, &route);

    assert_eq!(a.state(), b.state());
    assert_eq!(a.log(), b.log());
    assert_eq!(a.turn(), route.len() as u64);
}

#[test]
fn different_seeds_place_enemies_differently() {
    let a = GameSession::new(Content::default(), 1).unwrap();
    let b = GameSession::new(Content::default(), 2).unwrap();
    let positions = |session: &GameSession| {
        session
            .state()
            .enemies
            .iter()
            .map(|enemy| enemy.position)
            .collect::<Vec<_>>()
    };
    assert_ne!(positions(&a), positions(&b));
}

#[test]
fn settlement_blocking_from_content_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "settlements_block_player = true\n",
    )
    .unwrap();
    let content = ContentFactory::new(dir.path()).load().unwrap();
    let mut session = GameSession::new(content, 8).unwrap();
    let before = session.state().clone();

    let outcome = session.submit(Intent::Move(Direction::East)).unwrap();

    assert_eq!(
        outcome.rejection,
        Some(Rejection::Move(MoveRejection::Terrain(Tile::Village)))
    );
    assert_eq!(session.state(), &before);
    assert_eq!(
        session.log().latest(),
        Some("The village palisade bars your way.")
    );
}

#[test]
fn potion_without_stock_changes_nothing() {
    let mut session = GameSession::new(Content::default(), 4).unwrap();
    let before = session.state().clone();
    let log_before = session.log().clone();

    let outcome = session.submit(Intent::UsePotion).unwrap();

    assert!(outcome.events.is_empty());
    assert_eq!(outcome.rejection, Some(Rejection::NoPotion));
    assert_eq!(session.state(), &before);
    assert_eq!(session.log(), &log_before);
}

#[test]
fn nobody_to_talk_to_at_the_start() {
    let mut session = GameSession::new(Content::default(), 6).unwrap();
    let outcome = session.submit(Intent::Interact).unwrap();

    assert_eq!(outcome.rejection, Some(Rejection::NothingToInteract));
    assert_eq!(session.state().player.position, Position::new(16, 16));
    assert_eq!(
        session.log().latest(),
        Some("Nothing to interact with here.")
    );
}
