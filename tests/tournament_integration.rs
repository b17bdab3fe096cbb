//! End-to-end tournament rounds through the service layer.

use std::collections::HashSet;

use swiss_tournament::config::DatabaseSettings;
use swiss_tournament::services::TournamentService;
use swiss_tournament::TournamentError;

fn service_with_players(names: &[&str]) -> (TournamentService, Vec<i32>) {
    let service = TournamentService::in_memory().unwrap();
    let ids = names
        .iter()
        .map(|name| service.register_player(name).unwrap().id)
        .collect();
    (service, ids)
}

#[test]
fn count_tracks_registration_and_deletion() {
    let (service, _) = service_with_players(&["Chandra Nalaar", "Jace Beleren"]);
    assert_eq!(service.count_players().unwrap(), 2);

    service.delete_matches().unwrap();
    service.delete_players().unwrap();
    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn standings_before_any_match() {
    let (service, ids) = service_with_players(&["Melpomene Murray", "Randy Schwartz"]);

    let standings = service.player_standings().unwrap();

    assert_eq!(standings.len(), 2);
    assert!(standings.iter().all(|r| r.wins == 0 && r.matches_played == 0));
    let seen: HashSet<i32> = standings.iter().map(|r| r.id).collect();
    let registered: HashSet<i32> = ids.into_iter().collect();
    assert_eq!(seen, registered);
}

#[test]
fn first_round_trip() {
    let (service, ids) = service_with_players(&["A", "B", "C", "D"]);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

    service.report_match(a, b).unwrap();
    service.report_match(c, d).unwrap();

    let standings = service.player_standings().unwrap();
    let order: Vec<i32> = standings.iter().map(|r| r.id).collect();
    assert_eq!(order, vec![a, c, b, d]);
    assert_eq!(standings[0].wins, 1);
    assert_eq!(standings[1].wins, 1);
    assert_eq!(standings[2].wins, 0);
    assert_eq!(standings[3].wins, 0);
    assert!(standings.iter().all(|r| r.matches_played == 1));

    let pairings = service.swiss_pairings().unwrap();
    assert_eq!(pairings.len(), 2);
    assert_eq!((pairings[0].id1, pairings[0].id2), (a, c));
    assert_eq!((pairings[1].id1, pairings[1].id2), (b, d));

    let mut seen = HashSet::new();
    for p in &pairings {
        assert!(seen.insert(p.id1));
        assert!(seen.insert(p.id2));
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn win_loss_accounting_over_two_rounds() {
    let (service, ids) = service_with_players(&["A", "B", "C", "D", "E", "F"]);
    service.report_match(ids[0], ids[1]).unwrap();
    service.report_match(ids[2], ids[3]).unwrap();
    service.report_match(ids[4], ids[5]).unwrap();

    for pairing in service.swiss_pairings().unwrap() {
        service.report_match(pairing.id2, pairing.id1).unwrap();
    }

    for row in service.player_standings().unwrap() {
        let losses = service.losses_for(row.id).unwrap();
        assert_eq!(row.matches_played, row.wins + losses);
        assert_eq!(row.matches_played, 2);
    }
    assert_eq!(service.matches().unwrap().len(), 6);
}

#[test]
fn pairing_needs_at_least_two_players() {
    let (service, _) = service_with_players(&[]);
    assert!(matches!(
        service.swiss_pairings(),
        Err(TournamentError::InvalidTournamentState(_))
    ));

    service.register_player("Lonely").unwrap();
    assert!(matches!(
        service.swiss_pairings(),
        Err(TournamentError::InvalidTournamentState(_))
    ));
}

#[test]
fn pairing_rejects_odd_field() {
    let (service, _) = service_with_players(&["A", "B", "C"]);
    assert!(matches!(
        service.swiss_pairings(),
        Err(TournamentError::InvalidTournamentState(_))
    ));
}

#[test]
fn deleting_players_with_recorded_matches_fails() {
    let (service, ids) = service_with_players(&["A", "B"]);
    service.report_match(ids[0], ids[1]).unwrap();

    assert!(service.delete_players().is_err());
    assert_eq!(service.count_players().unwrap(), 2);
}

#[test]
fn file_store_persists_between_services() {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let settings = DatabaseSettings {
        path: dir.path().join("tournament.db").to_string_lossy().into_owned(),
        pool_size: 2,
    };

    {
        let service = TournamentService::open(&settings).unwrap();
        let a = service.register_player("Twilight Sparkle").unwrap();
        let b = service.register_player("Fluttershy").unwrap();
        service.report_match(b.id, a.id).unwrap();
    }

    let service = TournamentService::open(&settings).unwrap();
    let standings = service.player_standings().unwrap();
    assert_eq!(standings[0].name, "Fluttershy");
    assert_eq!(standings[0].wins, 1);

    service.reset().unwrap();
    assert_eq!(service.count_players().unwrap(), 0);
}

#[test]
fn player_lookup_after_report() {
    let (service, ids) = service_with_players(&["Bruno", "Boots"]);
    let recorded = service.report_match(ids[1], ids[0]).unwrap();

    let winner = service.player(recorded.winner_id).unwrap().unwrap();
    assert_eq!(winner.name, "Boots");
    assert!(service.player(ids[1] + 100).unwrap().is_none());
}
