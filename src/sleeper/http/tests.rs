use super::*;
use mockito::Matcher;

async fn client_for(server: &mockito::Server) -> SleeperClient {
    SleeperClient::with_config(SleeperConfig::new(server.url())).unwrap()
}

#[tokio::test]
async fn test_get_user_by_username() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/user/sleeperuser")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"user_id": "12345678", "username": "sleeperuser",
                "display_name": "SleeperUser", "avatar": "abc123"}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let user = client.get_user("sleeperuser").await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.user_id.as_str(), "12345678");
    assert_eq!(user.display_name, "SleeperUser");
}

#[tokio::test]
async fn test_get_leagues_for_user() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/user/12345678/leagues/nfl/2026")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "league_id": "289646328504385536",
                "name": "Friends League",
                "roster_positions": ["QB", "RB", "WR", "BN"],
                "season": "2026",
                "status": "in_season",
                "total_rosters": 12
            }]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let leagues = client
        .get_leagues_for_user(&UserId::new("12345678"), Season::new(2026))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].name, "Friends League");
}

#[tokio::test]
async fn test_get_rosters_with_null_players() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/league/289/rosters")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"roster_id": 1, "owner_id": "111", "players": ["100", "DAL"]},
                {"roster_id": 2, "owner_id": "222", "players": null}
            ]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let rosters = client.get_rosters(&LeagueId::new("289")).await.unwrap();

    assert_eq!(rosters[0].player_ids().len(), 2);
    assert!(rosters[1].player_ids().is_empty());
}

#[tokio::test]
async fn test_get_matchups() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/league/289/matchups/4")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"roster_id": 1, "matchup_id": 1, "points": 101.5},
                {"roster_id": 2, "matchup_id": 1, "points": 88.2, "custom_points": 120.0}
            ]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let matchups = client
        .get_matchups(&LeagueId::new("289"), Week::new(4))
        .await
        .unwrap();

    assert_eq!(matchups.len(), 2);
    assert_eq!(matchups[1].effective_points(), 120.0);
}

#[tokio::test]
async fn test_get_trending_players_with_query_params() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/players/nfl/trending/add")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lookback_hours".into(), "48".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"player_id": "1111", "count": 45}, {"player_id": "222", "count": 32}]"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let trending = client
        .get_trending_players(TrendDirection::Add, Some(48), Some(10))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(trending[0].player_id.as_str(), "1111");
    assert_eq!(trending[0].count, 45);
}

#[tokio::test]
async fn test_get_trending_players_defaults_send_no_params() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/players/nfl/trending/drop")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server).await;
    let trending = client
        .get_trending_players(TrendDirection::Drop, None, None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(trending.is_empty());
}

#[tokio::test]
async fn test_get_sport_state() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/state/nfl")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"week": 2, "season": "2026", "season_type": "regular", "leg": 2}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let state = client.get_sport_state().await.unwrap();
    assert_eq!(state.week.as_u16(), 2);
    assert_eq!(state.season, "2026");
}

#[tokio::test]
async fn test_get_draft_picks() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/draft/257270643320426496/picks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"round": 1, "pick_no": 1, "draft_slot": 1,
                 "player_id": "2391", "picked_by": "234", "roster_id": 1}]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let picks = client
        .get_draft_picks(&DraftId::new("257270643320426496"))
        .await
        .unwrap();
    assert_eq!(picks[0].player_id.as_ref().unwrap().as_str(), "2391");
}

#[tokio::test]
async fn test_http_error_status_surfaces() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/user/nobody")
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let err = client.get_user("nobody").await.unwrap_err();
    assert!(matches!(err, crate::SleeperError::Http(_)));
}

#[tokio::test]
async fn test_get_all_players_directory() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/players/nfl")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "3086": {"player_id": "3086", "full_name": "Tom Brady",
                         "position": "QB", "fantasy_positions": ["QB"]},
                "DAL": {"player_id": "DAL", "first_name": "Dallas",
                        "last_name": "Cowboys", "position": "DEF"}
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let directory = client.get_all_players().await.unwrap();
    assert_eq!(directory.len(), 2);
    assert!(directory.contains_key(&crate::PlayerId::new("DAL")));
}
