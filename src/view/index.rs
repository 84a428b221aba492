use maud::{html, Markup};

use crate::HTMX_PATH;

pub const DEFAULT_INDEX_TITLE: &str = "Golf Trip";

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (title) }
            div class="mode-switches" {
                button hx-get="/leaderboard?mode=gross" hx-target="#leaderboard" { "Gross" }
                button hx-get="/leaderboard?mode=net" hx-target="#leaderboard" { "Net" }
                button hx-get="/leaderboard?mode=stableford" hx-target="#leaderboard" { "Stableford" }
            }
            div id="leaderboard" hx-get="/leaderboard" hx-trigger="load" hx-swap="innerHTML" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
        }
    }
}
