use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use prometheus::Gauge;
use sha2::{Digest, Sha256};
use crate::models::ExplanationResult;

// Cache entry with timestamp
#[derive(Clone)]
pub struct CacheEntry {
    pub result: ExplanationResult,
    pub created_at: DateTime<Utc>,
}

// Create a cache key (hex sha256 of the exact question text)
pub fn key_for(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Explanation cache keyed by question text.
///
/// Entries expire lazily: an entry older than the TTL is dropped by the
/// lookup that sees it. Nothing else ever removes entries.
pub struct ExplanationCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
    size_gauge: Option<Gauge>, // tracks len() after every store and purge
}

impl ExplanationCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            size_gauge: None,
        }
    }

    pub fn with_size_gauge(mut self, gauge: Gauge) -> Self {
        gauge.set(self.entries.len() as f64);
        self.size_gauge = Some(gauge);
        self
    }

    fn report_size(&self) {
        if let Some(gauge) = &self.size_gauge {
            gauge.set(self.entries.len() as f64);
        }
    }

    pub fn lookup(&self, text: &str) -> Option<ExplanationResult> {
        self.lookup_at(text, Utc::now())
    }

    pub fn lookup_at(&self, text: &str, now: DateTime<Utc>) -> Option<ExplanationResult> {
        let key = key_for(text);

        // checked and removed under the shard lock
        // an entry exactly ttl old is already expired; keep >=, not >
        let removed = self
            .entries
            .remove_if(&key, |_, entry| now - entry.created_at >= self.ttl);
        if removed.is_some() {
            self.report_size();
            tracing::debug!(key = %key, "cache entry expired");
            return None;
        }

        self.entries.get(&key).map(|entry| entry.result.clone())
    }

    pub fn store(&self, text: &str, result: ExplanationResult) {
        self.store_at(text, result, Utc::now());
    }

    pub fn store_at(&self, text: &str, result: ExplanationResult, now: DateTime<Utc>) {
        self.entries.insert(
            key_for(text),
            CacheEntry {
                result,
                created_at: now,
            },
        );
        self.report_size();
    }

    // counts entries not yet purged, expired or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
