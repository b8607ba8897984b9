//! Recent-query history: a bounded, deduplicated, most-recent-first list.
//!
//! Peripheral convenience state, not part of the matching core. The list is
//! persisted as JSON under a single key in whatever string-keyed store the
//! host provides; [`MemoryStore`] covers tests and the CLI's in-process use.

/// Maximum number of remembered queries.
pub const MAX_RECENT: usize = 5;

/// Storage key used by [`RecentQueries::load`] and [`RecentQueries::save`].
pub const STORE_KEY: &str = "lexfind.recent-queries";

/// A string-keyed persistent store, as simple as it sounds.
pub trait QueryStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl QueryStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Most-recent-first query history, capped at [`MAX_RECENT`] entries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecentQueries {
    entries: Vec<String>,
}

impl RecentQueries {
    pub fn new() -> Self {
        RecentQueries::default()
    }

    /// Restore the history from a store. Missing or corrupt state yields an
    /// empty history rather than an error; this is convenience state.
    pub fn load(store: &dyn QueryStore) -> Self {
        let entries = store
            .get(STORE_KEY)
            .and_then(|json| serde_json::from_str::<Vec<String>>(&json).ok())
            .unwrap_or_default();
        let mut recent = RecentQueries { entries };
        recent.entries.truncate(MAX_RECENT);
        recent
    }

    /// Persist the history under [`STORE_KEY`].
    pub fn save(&self, store: &mut dyn QueryStore) {
        if let Ok(json) = serde_json::to_string(&self.entries) {
            store.put(STORE_KEY, json);
        }
    }

    /// Record one executed query: moved (or inserted) to the front,
    /// duplicates collapsed, oldest entry dropped past the cap. Blank
    /// queries are ignored.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_and_dedup() {
        let mut recent = RecentQueries::new();
        recent.record("liberty");
        recent.record("fair trial");
        recent.record("liberty");
        assert_eq!(recent.entries(), &["liberty", "fair trial"]);
    }

    #[test]
    fn test_cap_at_five() {
        let mut recent = RecentQueries::new();
        for query in ["a", "b", "c", "d", "e", "f"] {
            recent.record(query);
        }
        assert_eq!(recent.entries(), &["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_blank_queries_ignored() {
        let mut recent = RecentQueries::new();
        recent.record("   ");
        recent.record("");
        assert!(recent.entries().is_empty());
    }

    #[test]
    fn test_store_round_trip() {
        let mut store = MemoryStore::default();
        let mut recent = RecentQueries::new();
        recent.record("article 25");
        recent.record("dignity");
        recent.save(&mut store);

        let restored = RecentQueries::load(&store);
        assert_eq!(restored, recent);
    }

    #[test]
    fn test_corrupt_state_yields_empty_history() {
        let mut store = MemoryStore::default();
        store.put(STORE_KEY, "not json at all".to_string());
        assert!(RecentQueries::load(&store).entries().is_empty());
    }
}
