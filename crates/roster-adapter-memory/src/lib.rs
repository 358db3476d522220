use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use roster_core::adapter::Adapter;
use roster_core::error::{Result, RosterError};
use roster_core::member::*;

// ---------------------------------------------------------------------------
// Internal storage types
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Inner {
    name: String,
    /// Members keyed by insertion sequence (natural order).
    members: BTreeMap<u64, Member>,
    /// Member ID -> insertion sequence.
    ids: HashMap<String, u64>,
    /// Next sequence number (monotonically increasing).
    next_seq: u64,
}

/// In-memory adapter for Roster. All data is held in RAM.
#[derive(Debug, Clone)]
pub struct MemoryAdapter {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryAdapter {
    pub fn new(name: &str) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                name: name.to_string(),
                members: BTreeMap::new(),
                ids: HashMap::new(),
                next_seq: 0,
            })),
        }
    }
}

// ---------------------------------------------------------------------------
// Adapter implementation
// ---------------------------------------------------------------------------

#[async_trait]
impl Adapter for MemoryAdapter {
    async fn info(&self) -> Result<DbInfo> {
        let inner = self.inner.read().await;
        Ok(DbInfo {
            db_name: inner.name.clone(),
            member_count: inner.members.len() as u64,
        })
    }

    async fn get(&self, id: &str) -> Result<Member> {
        let inner = self.inner.read().await;
        inner
            .ids
            .get(id)
            .and_then(|seq| inner.members.get(seq))
            .cloned()
            .ok_or_else(|| RosterError::NotFound(format!("member {id}")))
    }

    async fn put(&self, mut member: Member) -> Result<PutResult> {
        if member.id.is_empty() {
            member.id = Uuid::new_v4().to_string();
        }
        let id = member.id.clone();

        let mut inner = self.inner.write().await;
        let existing = inner.ids.get(&id).copied();
        let seq = match existing {
            Some(seq) => seq,
            None => {
                let seq = inner.next_seq;
                inner.next_seq += 1;
                inner.ids.insert(id.clone(), seq);
                seq
            }
        };
        inner.members.insert(seq, member);

        Ok(PutResult { ok: true, id })
    }

    async fn list(&self, opts: ListOptions) -> Result<Vec<Member>> {
        let inner = self.inner.read().await;
        let iter = inner.members.values().skip(opts.skip).cloned();
        Ok(match opts.limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        })
    }

    async fn remove(&self, id: &str) -> Result<PutResult> {
        let mut inner = self.inner.write().await;
        let seq = inner
            .ids
            .remove(id)
            .ok_or_else(|| RosterError::NotFound(format!("member {id}")))?;
        inner.members.remove(&seq);
        Ok(PutResult {
            ok: true,
            id: id.to_string(),
        })
    }

    async fn destroy(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.members.clear();
        inner.ids.clear();
        inner.next_seq = 0;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn info_empty() {
        let db = MemoryAdapter::new("test");
        let info = db.info().await.unwrap();
        assert_eq!(info.db_name, "test");
        assert_eq!(info.member_count, 0);
    }

    #[tokio::test]
    async fn put_assigns_id() {
        let db = MemoryAdapter::new("test");
        let result = db
            .put(Member::new("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();
        assert!(result.ok);
        assert!(!result.id.is_empty());

        let fetched = db.get(&result.id).await.unwrap();
        assert_eq!(fetched.first_name, "Ada");
        assert_eq!(fetched.id, result.id);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let db = MemoryAdapter::new("test");
        let err = db.get("nope").await.unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let db = MemoryAdapter::new("test");
        for id in ["charlie", "alice", "bob"] {
            db.put(Member::new(id, "X", "x@example.com").with_id(id))
                .await
                .unwrap();
        }

        let members = db.list(ListOptions::new()).await.unwrap();
        let ids: Vec<_> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["charlie", "alice", "bob"]);
    }

    #[tokio::test]
    async fn replace_keeps_position() {
        let db = MemoryAdapter::new("test");
        db.put(Member::new("A", "1", "a@x").with_id("a")).await.unwrap();
        db.put(Member::new("B", "1", "b@x").with_id("b")).await.unwrap();
        db.put(Member::new("A", "2", "a2@x").with_id("a")).await.unwrap();

        let members = db.list(ListOptions::new()).await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, "a");
        assert_eq!(members[0].last_name, "2");
        assert_eq!(members[1].id, "b");
    }

    #[tokio::test]
    async fn list_skip_and_limit() {
        let db = MemoryAdapter::new("test");
        for i in 0..15 {
            db.put(Member::new(&format!("m{i}"), "X", "x@x").with_id(&format!("m{i:02}")))
                .await
                .unwrap();
        }

        let page = db.list(ListOptions { limit: Some(10), skip: 0 }).await.unwrap();
        assert_eq!(page.len(), 10);

        let tail = db.list(ListOptions { limit: Some(10), skip: 12 }).await.unwrap();
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[0].id, "m12");
    }

    #[tokio::test]
    async fn remove_member() {
        let db = MemoryAdapter::new("test");
        db.put(Member::new("A", "B", "a@x").with_id("a")).await.unwrap();
        db.remove("a").await.unwrap();
        assert!(db.get("a").await.is_err());
        assert!(db.remove("a").await.is_err());
    }

    #[tokio::test]
    async fn destroy_clears_all() {
        let db = MemoryAdapter::new("test");
        db.put(Member::new("A", "B", "a@x")).await.unwrap();
        db.destroy().await.unwrap();
        assert_eq!(db.info().await.unwrap().member_count, 0);
    }
}
