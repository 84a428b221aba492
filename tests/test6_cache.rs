use chrono::{Duration, Utc};

use golf_trip::cache::{self, CachedLeaderboard};
use golf_trip::scoring::{aggregate, LeaderboardMode};

fn empty_board() -> golf_trip::scoring::Leaderboard {
    aggregate(&[], &[], &[], &[], LeaderboardMode::Gross)
}

#[tokio::test]
async fn fresh_entries_are_served() {
    let cache = cache::new_cache();
    cache::put(&cache, "gross", empty_board()).await;
    assert!(cache::get_fresh(&cache, "gross").await.is_some());
    assert!(cache::get_fresh(&cache, "net").await.is_none());
}

#[tokio::test]
async fn stale_entries_are_dropped() {
    let cache = cache::new_cache();
    let stale_time = (Utc::now() - cache::CACHE_DURATION - Duration::seconds(1)).to_rfc3339();
    cache.write().await.insert(
        "gross".to_string(),
        CachedLeaderboard {
            data: empty_board(),
            cached_time: stale_time,
        },
    );
    assert!(cache::get_fresh(&cache, "gross").await.is_none());
}

#[tokio::test]
async fn garbage_timestamps_miss() {
    let cache = cache::new_cache();
    cache.write().await.insert(
        "gross".to_string(),
        CachedLeaderboard {
            data: empty_board(),
            cached_time: "not-a-timestamp".to_string(),
        },
    );
    assert!(cache::get_fresh(&cache, "gross").await.is_none());
}
