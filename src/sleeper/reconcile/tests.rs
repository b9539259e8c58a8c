use super::*;
use crate::cli::types::Position;
use crate::sleeper::types::DirectoryPlayer;

fn roster(roster_id: u32, players: Option<&[&str]>) -> Roster {
    Roster {
        roster_id,
        owner_id: None,
        league_id: None,
        players: players.map(|ids| ids.iter().map(|id| PlayerId::from(*id)).collect()),
        starters: None,
        reserve: None,
        taxi: None,
        co_owners: None,
        settings: None,
    }
}

fn league(name: &str, slots: &[&str]) -> League {
    League {
        league_id: crate::LeagueId::new(format!("league_{name}")),
        name: name.to_string(),
        roster_positions: slots.iter().map(|s| s.to_string()).collect(),
        season: "2026".to_string(),
        status: "in_season".to_string(),
        total_rosters: 12,
        sport: Some("nfl".to_string()),
        season_type: Some("regular".to_string()),
        previous_league_id: None,
        draft_id: None,
        avatar: None,
    }
}

fn directory_entry(id: &str, name: &str, position: &str) -> DirectoryPlayer {
    DirectoryPlayer {
        player_id: PlayerId::from(id),
        full_name: Some(name.to_string()),
        first_name: None,
        last_name: None,
        position: Some(position.to_string()),
        fantasy_positions: None,
        team: None,
        status: None,
        age: None,
        years_exp: None,
        number: None,
        college: None,
        injury_status: None,
    }
}

fn directory(entries: &[(&str, &str, &str)]) -> PlayerDirectory {
    entries
        .iter()
        .map(|(id, name, pos)| (PlayerId::from(*id), directory_entry(id, name, pos)))
        .collect()
}

fn ids(tokens: &[&str]) -> Vec<PlayerId> {
    tokens.iter().map(|t| PlayerId::from(*t)).collect()
}

mod aggregate_tests {
    use super::*;

    #[test]
    fn test_union_covers_every_roster() {
        let rosters = vec![
            roster(1, Some(&["100", "101"])),
            roster(2, Some(&["102"])),
            roster(3, Some(&["101", "103"])),
        ];

        let membership = aggregate_rosters(&rosters);

        // Completeness: every rostered id is present.
        for roster in &rosters {
            for id in roster.player_ids() {
                assert!(membership.contains(id));
            }
        }
        // Duplicates collapse.
        assert_eq!(membership.len(), 4);
    }

    #[test]
    fn test_null_players_contribute_nothing() {
        let rosters = vec![roster(1, None), roster(2, Some(&[]))];
        assert!(aggregate_rosters(&rosters).is_empty());
    }

    #[test]
    fn test_empty_league() {
        assert!(aggregate_rosters(&[]).is_empty());
    }
}

mod availability_tests {
    use super::*;

    #[test]
    fn test_rostered_candidates_are_dropped() {
        let membership: HashSet<PlayerId> = ids(&["100", "101"]).into_iter().collect();
        let candidates = ids(&["100", "101", "102", "103"]);

        let available = filter_available(&candidates, &membership);

        assert_eq!(available, ids(&["102", "103"]));
    }

    #[test]
    fn test_result_is_disjoint_subset_in_order() {
        let membership: HashSet<PlayerId> = ids(&["2", "4", "6"]).into_iter().collect();
        let candidates = ids(&["1", "2", "3", "4", "5"]);

        let available = filter_available(&candidates, &membership);

        for id in &available {
            assert!(!membership.contains(id));
            assert!(candidates.contains(id));
        }
        // Original API ranking survives the filter.
        assert_eq!(available, ids(&["1", "3", "5"]));
        // Input is untouched and the filter is idempotent.
        assert_eq!(candidates.len(), 5);
        assert_eq!(filter_available(&available, &membership), available);
    }

    #[test]
    fn test_empty_membership_keeps_everything() {
        let candidates = ids(&["7", "8"]);
        assert_eq!(filter_available(&candidates, &HashSet::new()), candidates);
    }
}

mod eligibility_tests {
    use super::*;

    fn record(id: &str, position: Position) -> PlayerRecord {
        PlayerRecord {
            id: PlayerId::from(id),
            name: format!("Player {id}"),
            position,
        }
    }

    #[test]
    fn test_only_startable_positions_survive() {
        let slots = vec![
            "QB".to_string(),
            "RB".to_string(),
            "RB".to_string(),
            "WR".to_string(),
            "TE".to_string(),
            "BN".to_string(),
        ];
        let candidates = vec![record("5", Position::K), record("6", Position::RB)];

        let eligible = filter_eligible(candidates, &slots);

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].id, PlayerId::from("6"));
    }

    #[test]
    fn test_unknown_position_never_eligible() {
        let slots = vec!["QB".to_string(), "UNKNOWN".to_string()];
        let candidates = vec![record("9", Position::Unknown)];

        // Even a literal UNKNOWN slot cannot admit an unplaceable player.
        assert!(filter_eligible(candidates, &slots).is_empty());
    }

    #[test]
    fn test_flex_slot_not_expanded() {
        let slots = vec!["FLEX".to_string(), "SUPER_FLEX".to_string()];
        let candidates = vec![
            record("1", Position::RB),
            record("2", Position::WR),
            record("3", Position::QB),
        ];

        assert!(filter_eligible(candidates, &slots).is_empty());
    }

    #[test]
    fn test_slot_strings_are_normalized() {
        let slots = vec!["def".to_string(), " qb ".to_string()];
        let candidates = vec![record("DAL", Position::DEF), record("4", Position::TE)];

        let eligible = filter_eligible(candidates, &slots);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].position, Position::DEF);
    }
}

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_reconcile_league_end_to_end() {
        let context = LeagueContext {
            league: league("Dynasty", &["QB", "RB", "RB", "WR", "TE", "BN"]),
            rosters: vec![roster(1, Some(&["100", "101"])), roster(2, Some(&["102"]))],
        };
        let directory = directory(&[
            ("103", "Free Back", "RB"),
            ("104", "Free Kicker", "K"),
            ("102", "Taken Receiver", "WR"),
        ]);
        let candidates = ids(&["102", "103", "104", "999"]);

        let result = reconcile_league(&context, &candidates, &directory);

        // 102 is rostered, 104 has no startable slot, 999 is not in the
        // directory; only the RB survives.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Free Back");
        assert_eq!(result[0].position, Position::RB);
    }

    #[test]
    fn test_missing_directory_entry_skipped_not_fatal() {
        let context = LeagueContext {
            league: league("Redraft", &["RB"]),
            rosters: vec![],
        };
        let directory = directory(&[("1", "Known Back", "RB")]);

        let result = reconcile_league(&context, &ids(&["999", "1"]), &directory);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, PlayerId::from("1"));
    }

    #[test]
    fn test_reconcile_leagues_independent_results() {
        let contexts = vec![
            LeagueContext {
                league: league("Alpha", &["RB", "WR"]),
                rosters: vec![roster(1, Some(&["10"]))],
            },
            LeagueContext {
                league: league("Beta", &["RB", "WR"]),
                rosters: vec![roster(1, Some(&["20"]))],
            },
        ];
        let directory = directory(&[("10", "Back Ten", "RB"), ("20", "Back Twenty", "RB")]);
        let candidates = ids(&["10", "20"]);

        let report = reconcile_leagues("Test User", &contexts, &candidates, &directory);

        assert_eq!(report.user, "Test User");
        assert_eq!(report.leagues["Alpha"][0].id, PlayerId::from("20"));
        assert_eq!(report.leagues["Beta"][0].id, PlayerId::from("10"));
    }

    #[test]
    fn test_league_with_empty_rosters_everything_available() {
        let contexts = vec![LeagueContext {
            league: league("Fresh", &["QB"]),
            rosters: vec![roster(1, None)],
        }];
        let directory = directory(&[("42", "Open QB", "QB")]);

        let report = reconcile_leagues("Test User", &contexts, &ids(&["42"]), &directory);

        assert_eq!(report.leagues["Fresh"].len(), 1);
    }
}
