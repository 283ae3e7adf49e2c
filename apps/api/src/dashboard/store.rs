use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::record::{CandidateRecord, StoredRecord};

/// Append-only, process-lifetime record collection backing the dashboard.
///
/// The write lock serializes appends from concurrent uploads; records are
/// never updated or removed, so readers always see a consistent prefix.
#[derive(Clone, Default)]
pub struct RecordStore {
    records: Arc<RwLock<Vec<StoredRecord>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns identity to a pipeline result and appends it.
    pub async fn append(&self, record: CandidateRecord) -> StoredRecord {
        let stored = StoredRecord {
            id: Uuid::new_v4(),
            record,
            parsed_at: Utc::now(),
        };
        self.records.write().await.push(stored.clone());
        stored
    }

    /// All accumulated records, in append order.
    pub async fn list(&self) -> Vec<StoredRecord> {
        self.records.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::SkillSet;

    fn record(name: &str) -> CandidateRecord {
        CandidateRecord {
            name: Some(name.to_string()),
            email: None,
            phone: None,
            linkedin: None,
            skills: SkillSet::NoneMatched,
            organizations: vec![],
            dates: vec![],
        }
    }

    #[tokio::test]
    async fn test_append_assigns_distinct_ids() {
        let store = RecordStore::new();
        let first = store.append(record("a")).await;
        let second = store.append(record("b")).await;
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_preserves_append_order() {
        let store = RecordStore::new();
        store.append(record("first")).await;
        store.append(record("second")).await;

        let rows = store.list().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].record.name.as_deref(), Some("first"));
        assert_eq!(rows[1].record.name.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = RecordStore::new();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_the_same_collection() {
        let store = RecordStore::new();
        let handle = store.clone();
        store.append(record("shared")).await;
        assert_eq!(handle.list().await.len(), 1);
    }
}
