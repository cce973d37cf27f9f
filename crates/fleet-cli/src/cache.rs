//! Snapshot cache: a JSON file reused for five minutes.
//!
//! Derivation is deterministic, so the cache key is just the reference
//! date; a cached snapshot derived for another date is never reused. A
//! missing or corrupt cache file means "derive again", never an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use fleet_model::Snapshot;

pub const STALE_AFTER_MINUTES: i64 = 5;

const CACHE_FILE: &str = "snapshot.json";

#[derive(Deserialize)]
struct CachedSnapshot {
    last_updated: DateTime<Utc>,
    snapshot: Snapshot,
}

#[derive(Serialize)]
struct CacheEntry<'a> {
    last_updated: DateTime<Utc>,
    snapshot: &'a Snapshot,
}

fn cache_path(dir: &Path) -> PathBuf {
    dir.join(CACHE_FILE)
}

/// The cached snapshot, if one exists for this reference date and is
/// younger than [`STALE_AFTER_MINUTES`].
pub fn load_fresh(dir: &Path, now: DateTime<Utc>, current_date: NaiveDate) -> Option<Snapshot> {
    let path = cache_path(dir);
    let raw = fs::read_to_string(&path).ok()?;
    let cached: CachedSnapshot = match serde_json::from_str(&raw) {
        Ok(cached) => cached,
        Err(error) => {
            debug!(path = %path.display(), %error, "ignoring unreadable snapshot cache");
            return None;
        }
    };
    if cached.snapshot.current_date != current_date {
        debug!(path = %path.display(), "cache is for another reference date");
        return None;
    }
    let age = now.signed_duration_since(cached.last_updated);
    if age.num_minutes() >= STALE_AFTER_MINUTES || age.num_seconds() < 0 {
        debug!(path = %path.display(), age_minutes = age.num_minutes(), "cache is stale");
        return None;
    }
    Some(cached.snapshot)
}

pub fn store(dir: &Path, now: DateTime<Utc>, snapshot: &Snapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create cache directory {}", dir.display()))?;
    let path = cache_path(dir);
    let entry = CacheEntry {
        last_updated: now,
        snapshot,
    };
    let json = serde_json::to_string(&entry).context("serialize snapshot cache")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use fleet_model::SnapshotMeta;

    fn snapshot(current_date: NaiveDate) -> Snapshot {
        Snapshot {
            current_date,
            vehicles: Vec::new(),
            meta: SnapshotMeta::default(),
        }
    }

    fn reference() -> (DateTime<Utc>, NaiveDate) {
        let now = Utc.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).single().expect("valid time");
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date");
        (now, date)
    }

    #[test]
    fn roundtrip_within_the_window() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (now, date) = reference();
        let stored = snapshot(date);
        store(dir.path(), now, &stored).expect("store cache");
        let loaded = load_fresh(dir.path(), now + Duration::minutes(4), date);
        assert_eq!(loaded, Some(stored));
    }

    #[test]
    fn five_minutes_is_already_stale() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (now, date) = reference();
        store(dir.path(), now, &snapshot(date)).expect("store cache");
        assert!(load_fresh(dir.path(), now + Duration::minutes(5), date).is_none());
    }

    #[test]
    fn a_different_reference_date_misses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (now, date) = reference();
        store(dir.path(), now, &snapshot(date)).expect("store cache");
        let other = NaiveDate::from_ymd_opt(2024, 2, 11).expect("valid date");
        assert!(load_fresh(dir.path(), now, other).is_none());
    }

    #[test]
    fn corrupt_cache_reads_as_a_miss() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (now, date) = reference();
        fs::write(cache_path(dir.path()), "{not json").expect("write corrupt file");
        assert!(load_fresh(dir.path(), now, date).is_none());
    }

    #[test]
    fn missing_file_reads_as_a_miss() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (now, date) = reference();
        assert!(load_fresh(dir.path(), now, date).is_none());
    }
}
