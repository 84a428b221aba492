pub mod args;
pub mod cache;
pub mod error;
pub mod model;
pub mod scoring;
pub mod storage;
pub mod controller {
    pub mod db_prefill;
    pub mod fines;
    pub mod leaderboard;
    pub mod matches;
    pub mod players;
    pub mod reference;
    pub mod rounds;
    pub mod scores;
    pub mod teams;
    pub mod votes;
}
pub mod view {
    pub mod index;
    pub mod leaderboard;
    pub mod matchplay;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";
