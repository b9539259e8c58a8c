use super::*;
use crate::cli::types::{PlayerId, Position};
use crate::sleeper::types::{DirectoryPlayer, PlayerDirectory};
use crate::storage::queries::DIRECTORY_MAX_AGE;
use tempfile::tempdir;

fn test_db() -> (tempfile::TempDir, PlayerDatabase) {
    let dir = tempdir().unwrap();
    let db = PlayerDatabase::open_at(&dir.path().join("players.db")).unwrap();
    (dir, db)
}

fn entry(id: &str, name: &str, position: &str, team: Option<&str>) -> DirectoryPlayer {
    DirectoryPlayer {
        player_id: PlayerId::from(id),
        full_name: Some(name.to_string()),
        first_name: None,
        last_name: None,
        position: Some(position.to_string()),
        fantasy_positions: None,
        team: team.map(|t| t.to_string()),
        status: Some("Active".to_string()),
        age: None,
        years_exp: None,
        number: None,
        college: None,
        injury_status: None,
    }
}

fn sample_directory() -> PlayerDirectory {
    let mut directory = PlayerDirectory::new();
    directory.insert(PlayerId::from("100"), entry("100", "Test Quarterback", "QB", Some("KC")));
    directory.insert(PlayerId::from("200"), entry("200", "Test Back", "RB", None));
    directory.insert(PlayerId::from("DAL"), entry("DAL", "Dallas Cowboys", "DEF", Some("DAL")));
    directory
}

#[test]
fn test_upsert_and_get_player() {
    let (_dir, mut db) = test_db();

    let player = StoredPlayer {
        player_id: PlayerId::from("100"),
        full_name: "Test Quarterback".to_string(),
        position: Some("QB".to_string()),
        team: Some("KC".to_string()),
        status: Some("Active".to_string()),
        updated_at: 1_700_000_000,
    };
    db.upsert_player(&player).unwrap();

    let fetched = db.get_player(&PlayerId::from("100")).unwrap().unwrap();
    assert_eq!(fetched, player);
    assert_eq!(fetched.normalized_position(), Position::QB);

    assert!(db.get_player(&PlayerId::from("999")).unwrap().is_none());
}

#[test]
fn test_upsert_replaces_existing_row() {
    let (_dir, mut db) = test_db();

    let mut player = StoredPlayer {
        player_id: PlayerId::from("100"),
        full_name: "Old Name".to_string(),
        position: Some("QB".to_string()),
        team: None,
        status: None,
        updated_at: 1,
    };
    db.upsert_player(&player).unwrap();

    player.full_name = "New Name".to_string();
    player.team = Some("BUF".to_string());
    db.upsert_player(&player).unwrap();

    assert_eq!(db.player_count().unwrap(), 1);
    let fetched = db.get_player(&PlayerId::from("100")).unwrap().unwrap();
    assert_eq!(fetched.full_name, "New Name");
}

#[test]
fn test_replace_directory_round_trip() {
    let (_dir, mut db) = test_db();

    let written = db.replace_directory(&sample_directory()).unwrap();
    assert_eq!(written, 3);
    assert_eq!(db.player_count().unwrap(), 3);

    let loaded = db.load_directory().unwrap();
    assert_eq!(loaded.len(), 3);
    let cowboys = &loaded[&PlayerId::from("DAL")];
    assert_eq!(cowboys.display_name(), "Dallas Cowboys");
    assert_eq!(cowboys.normalized_position(), Position::DEF);
}

#[test]
fn test_replace_directory_discards_old_rows() {
    let (_dir, mut db) = test_db();

    db.replace_directory(&sample_directory()).unwrap();

    let mut smaller = PlayerDirectory::new();
    smaller.insert(PlayerId::from("300"), entry("300", "Only Player", "WR", None));
    db.replace_directory(&smaller).unwrap();

    assert_eq!(db.player_count().unwrap(), 1);
    assert!(db.get_player(&PlayerId::from("100")).unwrap().is_none());
}

#[test]
fn test_get_players_by_ids_preserves_order_and_skips_unknown() {
    let (_dir, mut db) = test_db();
    db.replace_directory(&sample_directory()).unwrap();

    let requested = vec![
        PlayerId::from("200"),
        PlayerId::from("999"),
        PlayerId::from("100"),
    ];
    let players = db.get_players_by_ids(&requested).unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].player_id, PlayerId::from("200"));
    assert_eq!(players[1].player_id, PlayerId::from("100"));
}

#[test]
fn test_empty_database_is_stale() {
    let (_dir, db) = test_db();
    assert!(db.last_refreshed().unwrap().is_none());
    assert!(db.is_stale(DIRECTORY_MAX_AGE).unwrap());
}

#[test]
fn test_fresh_refresh_is_not_stale() {
    let (_dir, mut db) = test_db();
    db.replace_directory(&sample_directory()).unwrap();
    assert!(!db.is_stale(DIRECTORY_MAX_AGE).unwrap());
    // A zero-age budget makes any stored data stale.
    assert!(db.is_stale(std::time::Duration::ZERO).unwrap());
}

#[test]
fn test_clear_empties_table() {
    let (_dir, mut db) = test_db();
    db.replace_directory(&sample_directory()).unwrap();

    db.clear().unwrap();
    assert_eq!(db.player_count().unwrap(), 0);
    assert!(db.is_stale(DIRECTORY_MAX_AGE).unwrap());
}
