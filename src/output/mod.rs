use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::database::Player;
use crate::tournament::{Pairing, StandingRow};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// `Name (#id)`, or just `#id` when the player record is missing.
pub fn player_label(id: i32, player: Option<&Player>) -> String {
    match player {
        Some(player) => format!("{} (#{})", player.name, id),
        None => format!("#{id}"),
    }
}

pub fn render_standings(standings: &[StandingRow]) -> String {
    let mut lines = vec![format!(
        "{:>4}  {:>5}  {:<30} {:>5} {:>7}",
        "Rank", "Id", "Name", "Wins", "Played"
    )
    .as_str()
    .bold()
    .to_string()];

    for (idx, row) in standings.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:>5}  {:<30} {:>5} {:>7}",
            idx + 1,
            row.id,
            row.name,
            row.wins.to_string().as_str().green(),
            row.matches_played
        ));
    }

    lines.join("\n")
}

pub fn render_pairings(pairings: &[Pairing]) -> String {
    let mut lines = vec![format!("{:>5}  {:<30}     {:<30}", "Table", "Player", "Opponent")
        .as_str()
        .bold()
        .to_string()];

    for (idx, pairing) in pairings.iter().enumerate() {
        let first = format!("{} (#{})", pairing.name1, pairing.id1);
        let second = format!("{} (#{})", pairing.name2, pairing.id2);
        lines.push(format!(
            "{:>5}  {:<30} {} {:<30}",
            idx + 1,
            first,
            "vs".dimmed(),
            second
        ));
    }

    lines.join("\n")
}

pub fn render_players(players: &[Player]) -> String {
    let mut lines = vec![format!("{:>5}  {:<30} {}", "Id", "Name", "Registered")
        .as_str()
        .bold()
        .to_string()];

    for player in players {
        let registered = player
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        lines.push(format!("{:>5}  {:<30} {}", player.id, player.name, registered));
    }

    lines.join("\n")
}
