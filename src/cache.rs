use crate::scoring::Leaderboard;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Serialize, Clone)]
pub struct CachedLeaderboard {
    pub data: Leaderboard,
    pub cached_time: String,
}

/// Keyed by leaderboard mode.
pub type LeaderboardCache = Arc<RwLock<HashMap<String, CachedLeaderboard>>>;

pub const CACHE_DURATION: chrono::Duration = chrono::Duration::minutes(2);

#[must_use]
pub fn new_cache() -> LeaderboardCache {
    Arc::new(RwLock::new(HashMap::new()))
}

/// Returns the cached leaderboard if it is younger than [`CACHE_DURATION`].
pub async fn get_fresh(cache: &LeaderboardCache, key: &str) -> Option<Leaderboard> {
    let map = cache.read().await;
    let entry = map.get(key)?;
    let cached_time = DateTime::parse_from_rfc3339(&entry.cached_time).ok()?;
    let cached_time_utc: DateTime<Utc> = cached_time.with_timezone(&Utc);
    let elapsed = Utc::now() - cached_time_utc;
    if elapsed < CACHE_DURATION {
        Some(entry.data.clone())
    } else {
        None
    }
}

pub async fn put(cache: &LeaderboardCache, key: &str, data: Leaderboard) {
    let mut map = cache.write().await;
    map.insert(
        key.to_string(),
        CachedLeaderboard {
            data,
            cached_time: Utc::now().to_rfc3339(),
        },
    );
}
