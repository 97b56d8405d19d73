use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::api::{decode_document, decode_list, ApiClient};
use crate::common::{ApiError, DEFAULT_CACHE_SECS};
use crate::models::Resource;

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    fetched_at: DateTime<Utc>,
}

/// Per-path cache of read-only GET responses for the public site.
#[derive(Debug, Clone)]
pub struct QueryCache {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(std::time::Duration::from_secs(DEFAULT_CACHE_SECS))
    }
}

impl QueryCache {
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::seconds(DEFAULT_CACHE_SECS as i64)),
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cached value for `path` if fetched less than `ttl` before `now`.
    pub fn get_fresh(&self, path: &str, now: DateTime<Utc>) -> Option<Value> {
        self.lock()
            .get(path)
            .filter(|e| now - e.fetched_at < self.ttl)
            .map(|e| e.value.clone())
    }

    pub fn put(&self, path: &str, value: Value, now: DateTime<Utc>) {
        self.lock().insert(
            path.to_string(),
            Entry {
                value,
                fetched_at: now,
            },
        );
    }

    pub fn invalidate(&self, path: &str) {
        self.lock().remove(path);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Fresh cached body or a new GET. Failures are not cached.
    pub async fn fetch(&self, client: &ApiClient, path: &str) -> Result<Value, ApiError> {
        if let Some(hit) = self.get_fresh(path, Utc::now()) {
            return Ok(hit);
        }
        let value = client.get_value(path).await?;
        self.put(path, value.clone(), Utc::now());
        Ok(value)
    }

    pub async fn document<R: Resource>(&self, client: &ApiClient, path: &str) -> Result<Option<R>, ApiError> {
        decode_document(self.fetch(client, path).await?)
    }

    pub async fn list<R: Resource>(&self, client: &ApiClient, path: &str) -> Result<Vec<R>, ApiError> {
        decode_list(self.fetch(client, path).await?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn entries_go_stale_after_ttl() {
        let cache = QueryCache::new(std::time::Duration::from_secs(60));
        let t0 = Utc::now();
        cache.put("/api/aff-notice", json!({"_id": "1"}), t0);

        assert!(cache.get_fresh("/api/aff-notice", t0 + Duration::seconds(59)).is_some());
        assert!(cache.get_fresh("/api/aff-notice", t0 + Duration::seconds(60)).is_none());
        assert!(cache.get_fresh("/api/footer", t0).is_none());
    }

    #[test]
    fn invalidate_removes_one_path() {
        let cache = QueryCache::default();
        let now = Utc::now();
        cache.put("/a", json!(1), now);
        cache.put("/b", json!(2), now);
        cache.invalidate("/a");
        assert!(cache.get_fresh("/a", now).is_none());
        assert_eq!(cache.get_fresh("/b", now), Some(json!(2)));
    }
}
