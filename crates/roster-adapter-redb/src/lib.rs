use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use roster_core::adapter::Adapter;
use roster_core::error::{Result, RosterError};
use roster_core::member::*;

// ---------------------------------------------------------------------------
// Table definitions for redb
// ---------------------------------------------------------------------------

/// Members: insertion sequence -> serialized member JSON
const MEMBER_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("members");

/// Member ID index: member_id -> insertion sequence
const ID_TABLE: TableDefinition<&str, u64> = TableDefinition::new("member_ids");

/// Metadata table: key -> value
const META_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("metadata");

#[derive(Debug, Default, Serialize, Deserialize)]
struct MetaRecord {
    next_seq: u64,
}

macro_rules! db_err {
    ($e:expr) => {
        $e.map_err(|e| RosterError::DatabaseError(e.to_string()))
    };
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

/// Persistent adapter backed by `redb`.
pub struct RedbAdapter {
    db: Arc<Database>,
    name: String,
    /// Serializes read-modify-write sequences on the sequence counter.
    write_lock: Arc<RwLock<()>>,
}

impl RedbAdapter {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>, name: &str) -> Result<Self> {
        let db = db_err!(Database::create(path.as_ref()))?;

        // Opening tables in a write transaction creates them if they don't exist
        let write_txn = db_err!(db.begin_write())?;
        {
            db_err!(write_txn.open_table(MEMBER_TABLE))?;
            db_err!(write_txn.open_table(ID_TABLE))?;
            let mut meta = db_err!(write_txn.open_table(META_TABLE))?;
            if db_err!(meta.get("meta"))?.is_none() {
                let bytes = serde_json::to_vec(&MetaRecord::default())?;
                db_err!(meta.insert("meta", bytes.as_slice()))?;
            }
        }
        db_err!(write_txn.commit())?;

        Ok(Self {
            db: Arc::new(db),
            name: name.to_string(),
            write_lock: Arc::new(RwLock::new(())),
        })
    }
}

#[async_trait]
impl Adapter for RedbAdapter {
    async fn info(&self) -> Result<DbInfo> {
        let read_txn = db_err!(self.db.begin_read())?;
        let table = db_err!(read_txn.open_table(MEMBER_TABLE))?;
        Ok(DbInfo {
            db_name: self.name.clone(),
            member_count: db_err!(table.len())?,
        })
    }

    async fn get(&self, id: &str) -> Result<Member> {
        let read_txn = db_err!(self.db.begin_read())?;
        let ids = db_err!(read_txn.open_table(ID_TABLE))?;
        let members = db_err!(read_txn.open_table(MEMBER_TABLE))?;

        let seq = db_err!(ids.get(id))?
            .map(|guard| guard.value())
            .ok_or_else(|| RosterError::NotFound(format!("member {id}")))?;
        let guard = db_err!(members.get(seq))?
            .ok_or_else(|| RosterError::DatabaseError(format!("dangling index for {id}")))?;
        Ok(serde_json::from_slice(guard.value())?)
    }

    async fn put(&self, mut member: Member) -> Result<PutResult> {
        if member.id.is_empty() {
            member.id = Uuid::new_v4().to_string();
        }
        let id = member.id.clone();
        let bytes = serde_json::to_vec(&member)?;

        let _lock = self.write_lock.write().await;
        let write_txn = db_err!(self.db.begin_write())?;
        {
            let mut ids = db_err!(write_txn.open_table(ID_TABLE))?;
            let existing = db_err!(ids.get(id.as_str()))?.map(|guard| guard.value());
            let seq = match existing {
                Some(seq) => seq,
                None => {
                    let mut meta_table = db_err!(write_txn.open_table(META_TABLE))?;
                    let mut meta: MetaRecord = match db_err!(meta_table.get("meta"))? {
                        Some(guard) => serde_json::from_slice(guard.value())?,
                        None => MetaRecord::default(),
                    };
                    let seq = meta.next_seq;
                    meta.next_seq += 1;
                    let meta_bytes = serde_json::to_vec(&meta)?;
                    db_err!(meta_table.insert("meta", meta_bytes.as_slice()))?;
                    db_err!(ids.insert(id.as_str(), seq))?;
                    seq
                }
            };
            let mut members = db_err!(write_txn.open_table(MEMBER_TABLE))?;
            db_err!(members.insert(seq, bytes.as_slice()))?;
        }
        db_err!(write_txn.commit())?;

        Ok(PutResult { ok: true, id })
    }

    async fn list(&self, opts: ListOptions) -> Result<Vec<Member>> {
        let read_txn = db_err!(self.db.begin_read())?;
        let table = db_err!(read_txn.open_table(MEMBER_TABLE))?;

        let limit = opts.limit.unwrap_or(usize::MAX);
        let mut members = Vec::new();
        for entry in db_err!(table.iter())?.skip(opts.skip).take(limit) {
            let (_, value) = db_err!(entry)?;
            members.push(serde_json::from_slice(value.value())?);
        }
        Ok(members)
    }

    async fn remove(&self, id: &str) -> Result<PutResult> {
        let _lock = self.write_lock.write().await;
        let write_txn = db_err!(self.db.begin_write())?;
        {
            let mut ids = db_err!(write_txn.open_table(ID_TABLE))?;
            let seq = db_err!(ids.remove(id))?
                .map(|guard| guard.value())
                .ok_or_else(|| RosterError::NotFound(format!("member {id}")))?;
            let mut members = db_err!(write_txn.open_table(MEMBER_TABLE))?;
            db_err!(members.remove(seq))?;
        }
        db_err!(write_txn.commit())?;
        Ok(PutResult {
            ok: true,
            id: id.to_string(),
        })
    }

    async fn destroy(&self) -> Result<()> {
        let _lock = self.write_lock.write().await;
        let write_txn = db_err!(self.db.begin_write())?;
        {
            let mut members = db_err!(write_txn.open_table(MEMBER_TABLE))?;
            while db_err!(members.pop_last())?.is_some() {}
        }
        {
            let mut ids = db_err!(write_txn.open_table(ID_TABLE))?;
            while db_err!(ids.pop_last())?.is_some() {}
        }
        {
            let mut meta_table = db_err!(write_txn.open_table(META_TABLE))?;
            let bytes = serde_json::to_vec(&MetaRecord::default())?;
            db_err!(meta_table.insert("meta", bytes.as_slice()))?;
        }
        db_err!(write_txn.commit())?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
