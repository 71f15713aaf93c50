//! Short-TTL memoization of finished recommendation results.
//!
//! Keyed by the canonical request signature. Expiry is lazy: an entry is
//! checked and evicted on the read path only, with no background sweep.
//! The mutex serializes same-key access; last write wins.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::types::RecommendationResult;

struct CacheEntry {
    value: RecommendationResult,
    expires_at: Instant,
}

/// Mutex-guarded map from request signature to cached result.
#[derive(Default)]
pub struct ResultCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached result, evicting it first if it has expired.
    pub async fn get(&self, key: &str) -> Option<RecommendationResult> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a result under the given key, replacing any previous entry.
    pub async fn put(&self, key: &str, value: RecommendationResult, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().await.insert(key.to_owned(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArticleCandidate, LicenseType, Source};

    fn make_result(title: &str) -> RecommendationResult {
        RecommendationResult {
            top_three: vec![ArticleCandidate {
                id: format!("wikipedia-{title}"),
                title: title.into(),
                url: format!("https://en.wikipedia.org/wiki/{title}"),
                source: Source::Wikipedia,
                date: None,
                snippet: String::new(),
                license: LicenseType::CreativeCommons,
                language: "en".into(),
                word_count: Some(900),
                raw_length_fields: Default::default(),
                extraction_failed: false,
            }],
            backups: vec![],
        }
    }

    #[tokio::test]
    async fn miss_returns_none() {
        let cache = ResultCache::new();
        assert!(cache.get("absent").await.is_none());
    }

    #[tokio::test]
    async fn insert_and_retrieve() {
        let cache = ResultCache::new();
        let result = make_result("Astronomy");
        cache.put("key", result.clone(), Duration::from_secs(60)).await;
        assert_eq!(cache.get("key").await, Some(result));
    }

    #[tokio::test]
    async fn expired_entry_evicted_on_read() {
        let cache = ResultCache::new();
        cache
            .put("key", make_result("Astronomy"), Duration::ZERO)
            .await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(cache.get("key").await.is_none());
        // The entry is gone, not just masked.
        assert!(cache.entries.lock().await.is_empty());
    }

    #[tokio::test]
    async fn overwrite_same_key() {
        let cache = ResultCache::new();
        cache
            .put("key", make_result("Old"), Duration::from_secs(60))
            .await;
        cache
            .put("key", make_result("New"), Duration::from_secs(60))
            .await;
        let cached = cache.get("key").await.expect("should be cached");
        assert_eq!(cached.top_three[0].title, "New");
    }

    #[tokio::test]
    async fn independent_keys() {
        let cache = ResultCache::new();
        cache
            .put("a", make_result("A"), Duration::from_secs(60))
            .await;
        cache
            .put("b", make_result("B"), Duration::from_secs(60))
            .await;
        assert_eq!(cache.get("a").await.unwrap().top_three[0].title, "A");
        assert_eq!(cache.get("b").await.unwrap().top_three[0].title, "B");
    }

    #[tokio::test]
    async fn concurrent_writers_leave_one_winner() {
        use std::sync::Arc;

        let cache = Arc::new(ResultCache::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                cache
                    .put("key", make_result(&format!("W{i}")), Duration::from_secs(60))
                    .await;
            }));
        }
        for handle in handles {
            handle.await.expect("writer task");
        }

        let cached = cache.get("key").await.expect("should be cached");
        assert!(cached.top_three[0].title.starts_with('W'));
    }
}
