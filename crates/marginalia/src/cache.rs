//! Process-lifetime TTL cache over the parser and the content service
//!
//! Entries are version-tagged so a parsing-logic upgrade invalidates old
//! results without explicit flushes, and expire lazily on read. Fetch and
//! parse failures never escape: callers always receive a usable Insights
//! value, degraded at worst to the category fallback.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration};

use crate::fallback;
use crate::fetch::ContentFetcher;
use crate::insight::Insights;
use crate::parser;

/// Bump when parsing logic changes; stale entries re-parse on next read
pub const CACHE_VERSION: u32 = 2;

const TTL_MINUTES: i64 = 30;
const BATCH_CHUNK_SIZE: usize = 5;
// Courtesy pacing toward the content service, not a correctness requirement
const CHUNK_PAUSE_MS: u64 = 200;

/// Injected time source so tests can drive TTL expiry
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// One item of a batch request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
  pub id: String,
  pub title: String,
  pub category: String,
}

#[derive(Debug, Clone)]
struct CacheEntry {
  value: Insights,
  cached_at: DateTime<Utc>,
  version: u32,
}

/// Diagnostic counters; not part of the steady-state data path
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
  pub total_entries: usize,
  pub real_content_entries: usize,
  pub fallback_entries: usize,
  pub avg_key_points: f64,
  pub avg_practice_points: f64,
}

/// In-memory insight cache keyed by content id
pub struct InsightCache {
  entries: Mutex<HashMap<String, CacheEntry>>,
  fetcher: Arc<dyn ContentFetcher>,
  clock: Arc<dyn Clock>,
}

impl InsightCache {
  pub fn new(fetcher: Arc<dyn ContentFetcher>) -> Self {
    Self::with_clock(fetcher, Arc::new(SystemClock))
  }

  pub fn with_clock(fetcher: Arc<dyn ContentFetcher>, clock: Arc<dyn Clock>) -> Self {
    Self { entries: Mutex::new(HashMap::new()), fetcher, clock }
  }

  /// Resolve insights for one content id, fetching and parsing on a miss.
  /// Fetch failures are absorbed into the category fallback and nothing is
  /// cached for the failed id.
  pub async fn get(&self, id: &str, title: &str, category: &str) -> Insights {
    if let Some(value) = self.lookup(id) {
      return value;
    }

    match self.fetcher.fetch(id).await {
      Ok(record) => {
        let insights = parser::parse(record.raw_text.as_deref(), title, category).validated();
        self.store(id, insights.clone());
        insights
      }
      Err(error) => {
        scribe::warn(&format!("content fetch failed for {id}: {error:#}"));
        parser::parse(None, title, category).validated()
      }
    }
  }

  /// Resolve a whole reading list. Items resolve concurrently in chunks of
  /// five with a short pause between chunks to avoid bursting the content
  /// service. The result always carries exactly one entry per distinct id.
  pub async fn get_batch(&self, items: &[ContentRequest]) -> HashMap<String, Insights> {
    let mut results = HashMap::new();

    for (index, chunk) in items.chunks(BATCH_CHUNK_SIZE).enumerate() {
      if index > 0 {
        sleep(Duration::from_millis(CHUNK_PAUSE_MS)).await;
      }

      let resolved =
        join_all(chunk.iter().map(|item| self.get(&item.id, &item.title, &item.category))).await;

      for (item, insights) in chunk.iter().zip(resolved) {
        results.insert(item.id.clone(), insights);
      }
    }

    // get() always resolves, but the contract is guarded anyway: no input
    // item may be missing from the result map.
    for item in items {
      results.entry(item.id.clone()).or_insert_with(|| fallback::generate(&item.category));
    }

    results
  }

  /// Drop all entries unconditionally
  pub fn clear(&self) {
    self.entries.lock().expect("cache lock poisoned").clear();
  }

  /// Counters over live and expired entries alike
  pub fn stats(&self) -> CacheStats {
    let entries = self.entries.lock().expect("cache lock poisoned");

    let total_entries = entries.len();
    let real_content_entries =
      entries.values().filter(|entry| entry.value.has_real_content).count();

    let (key_sum, practice_sum) = entries.values().fold((0usize, 0usize), |(keys, practices), entry| {
      (keys + entry.value.key_points.len(), practices + entry.value.practice_points.len())
    });

    let average = |sum: usize| if total_entries == 0 { 0.0 } else { sum as f64 / total_entries as f64 };

    CacheStats {
      total_entries,
      real_content_entries,
      fallback_entries: total_entries - real_content_entries,
      avg_key_points: average(key_sum),
      avg_practice_points: average(practice_sum),
    }
  }

  fn lookup(&self, id: &str) -> Option<Insights> {
    let entries = self.entries.lock().expect("cache lock poisoned");
    let entry = entries.get(id)?;

    if entry.version != CACHE_VERSION {
      return None;
    }

    let age = self.clock.now() - entry.cached_at;
    (age < chrono::Duration::minutes(TTL_MINUTES)).then(|| entry.value.clone())
  }

  fn store(&self, id: &str, value: Insights) {
    let entry = CacheEntry { value, cached_at: self.clock.now(), version: CACHE_VERSION };
    self.entries.lock().expect("cache lock poisoned").insert(id.to_string(), entry);
  }
}
