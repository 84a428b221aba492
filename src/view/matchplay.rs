use maud::{html, Markup};

use crate::scoring::{HoleWinner, MatchStanding};
use crate::HTMX_PATH;

pub struct MatchDisplay {
    /// "Side A vs Side B", team or player names.
    pub title: String,
    pub leader_name: Option<String>,
    pub standing: MatchStanding,
}

fn winner_mark(winner: HoleWinner) -> &'static str {
    match winner {
        HoleWinner::TeamA => "A",
        HoleWinner::TeamB => "B",
        HoleWinner::Tie => "=",
    }
}

fn render_match(display: &MatchDisplay) -> Markup {
    let standing = &display.standing;
    html! {
        div class="match-card" {
            h4 { (display.title) }
            p class="match-status" {
                strong { (standing.status) }
                @if let Some(leader) = &display.leader_name {
                    ", " (leader) " leads"
                }
            }
            p {
                (standing.holes_played) " holes played, "
                (standing.holes_won_a) " / " (standing.holes_won_b)
                " with " (standing.holes_halved) " halved"
            }
            @if !standing.hole_results.is_empty() {
                table class="styled-table" {
                    thead {
                        tr {
                            th { "HOLE" }
                            th { "PAR" }
                            th { "SIDE A" }
                            th { "SIDE B" }
                            th { "WINNER" }
                        }
                    }
                    tbody {
                        @for hole in &standing.hole_results {
                            tr {
                                td { (hole.hole) }
                                td { (hole.par) }
                                td { (hole.pair_a_points.iter().map(ToString::to_string).collect::<Vec<_>>().join(" / ")) }
                                td { (hole.pair_b_points.iter().map(ToString::to_string).collect::<Vec<_>>().join(" / ")) }
                                td { (winner_mark(hole.winner)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_matchplay_page(
    round_id: i64,
    fourballs: &[MatchDisplay],
    singles: &[MatchDisplay],
) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { "Matchplay — Round " (round_id) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { "Matchplay — Round " (round_id) }
            @if fourballs.is_empty() && singles.is_empty() {
                p { "No matches set up for this round yet." }
            }
            @if !fourballs.is_empty() {
                h3 { "Betterball" }
                @for display in fourballs {
                    (render_match(display))
                }
            }
            @if !singles.is_empty() {
                h3 { "Singles" }
                @for display in singles {
                    (render_match(display))
                }
            }
        }
    }
}
