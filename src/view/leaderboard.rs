use maud::{html, Markup};

use crate::scoring::{Leaderboard, LeaderboardMode};

fn format_to_par(to_par: i64) -> String {
    if to_par == 0 {
        "E".to_string()
    } else if to_par > 0 {
        format!("+{to_par}")
    } else {
        to_par.to_string()
    }
}

#[must_use]
pub fn render_leaderboard(data: &Leaderboard) -> Markup {
    let score_header = match data.mode {
        LeaderboardMode::Stableford => "POINTS",
        _ => "TO PAR",
    };

    html! {
        @if data.players.is_empty() {
            p { "No rounds completed yet!" }
        } @else {
            h3 { "Leaderboard" }
            table class="styled-table" {
                thead {
                    tr {
                        th { "PLACE" }
                        th { "PLAYER" }
                        th { "TEAM" }
                        th { "ROUNDS" }
                        th { "AVG" }
                        th { "BEST" }
                        th { (score_header) }
                        th { "TOTAL" }
                    }
                }
                tbody {
                    @for (i, standing) in data.players.iter().enumerate() {
                        tr {
                            td { (i + 1) }
                            td { (standing.name) }
                            td { (standing.team.as_deref().unwrap_or("-")) }
                            td { (standing.rounds_played) }
                            td { (format!("{:.1}", standing.average)) }
                            td { (standing.best_round.map_or_else(|| "-".to_string(), |b| b.to_string())) }
                            td {
                                @match standing.to_par {
                                    Some(to_par) => { (format_to_par(to_par)) }
                                    None => { (standing.total) }
                                }
                            }
                            td { (standing.total) }
                        }
                    }
                }
            }

            @if !data.teams.is_empty() {
                h3 { "Team Standings" }
                table class="styled-table" {
                    thead {
                        tr {
                            th { "PLACE" }
                            th { "TEAM" }
                            th { "PLAYERS" }
                            th { "ROUNDS" }
                            th { "AVG" }
                            th { (score_header) }
                            th { "TOTAL" }
                        }
                    }
                    tbody {
                        @for (i, standing) in data.teams.iter().enumerate() {
                            tr {
                                td { (i + 1) }
                                td { (standing.name) }
                                td { (standing.players_count) }
                                td { (standing.rounds_played) }
                                td { (format!("{:.1}", standing.average)) }
                                td {
                                    @match standing.to_par {
                                        Some(to_par) => { (format_to_par(to_par)) }
                                        None => { (standing.total) }
                                    }
                                }
                                td { (standing.total) }
                            }
                        }
                    }
                }
            }
        }
    }
}
