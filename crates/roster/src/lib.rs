//! # Roster
//!
//! A small member store with pluggable storage adapters.
//!
//! ## Quick Start
//!
//! ```no_run
//! use roster::{Database, Member};
//!
//! # async fn example() -> roster::Result<()> {
//! // In-memory database (for testing)
//! let db = Database::memory("members");
//!
//! // Persistent database (redb)
//! let db = Database::open("path/to/members.redb", "members")?;
//!
//! // Store a member
//! let result = db.put(Member::new("Ada", "Lovelace", "ada@example.com")).await?;
//!
//! // Read it back
//! let member = db.get(&result.id).await?;
//! assert_eq!(member.display_name(), "Ada Lovelace");
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;

// Re-export core types
pub use roster_core::adapter::Adapter;
pub use roster_core::error::{Result, RosterError};
pub use roster_core::member::*;

// Re-export adapters
pub use roster_adapter_memory::MemoryAdapter;
pub use roster_adapter_redb::RedbAdapter;

/// A high-level database handle that wraps any adapter implementation.
///
/// Cheap to share behind an `Arc`; the host process owns its lifetime.
pub struct Database {
    adapter: Arc<dyn Adapter>,
}

impl Database {
    /// Create an in-memory database (data lost when dropped).
    pub fn memory(name: &str) -> Self {
        Self {
            adapter: Arc::new(MemoryAdapter::new(name)),
        }
    }

    /// Open or create a persistent database backed by redb.
    pub fn open(path: impl AsRef<Path>, name: &str) -> Result<Self> {
        let adapter = RedbAdapter::open(path, name)?;
        Ok(Self {
            adapter: Arc::new(adapter),
        })
    }

    /// Create a database from any adapter implementation.
    pub fn from_adapter(adapter: Arc<dyn Adapter>) -> Self {
        Self { adapter }
    }

    // -----------------------------------------------------------------
    // Member operations
    // -----------------------------------------------------------------

    /// Get database information.
    pub async fn info(&self) -> Result<DbInfo> {
        self.adapter.info().await
    }

    /// Retrieve a member by ID.
    pub async fn get(&self, id: &str) -> Result<Member> {
        self.adapter.get(id).await
    }

    /// Insert or replace a member.
    pub async fn put(&self, member: Member) -> Result<PutResult> {
        self.adapter.put(member).await
    }

    /// Insert or replace several members, stopping at the first failure.
    pub async fn put_all(&self, members: Vec<Member>) -> Result<Vec<PutResult>> {
        let mut results = Vec::with_capacity(members.len());
        for member in members {
            results.push(self.adapter.put(member).await?);
        }
        Ok(results)
    }

    /// Insert members parsed from a JSON array of objects.
    pub async fn import_json(&self, value: serde_json::Value) -> Result<Vec<PutResult>> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            _ => {
                return Err(RosterError::BadRequest(
                    "expected a JSON array of members".into(),
                ));
            }
        };
        let members = items
            .into_iter()
            .map(Member::from_json)
            .collect::<Result<Vec<_>>>()?;
        self.put_all(members).await
    }

    /// List members in natural order.
    pub async fn list(&self, opts: ListOptions) -> Result<Vec<Member>> {
        self.adapter.list(opts).await
    }

    /// Bounded read of the first `limit` members in natural order.
    pub async fn sample(&self, limit: usize) -> Result<Vec<Member>> {
        self.adapter.list(ListOptions::limit(limit)).await
    }

    /// Remove a member by ID.
    pub async fn remove(&self, id: &str) -> Result<PutResult> {
        self.adapter.remove(id).await
    }

    /// Close the database.
    pub async fn close(&self) -> Result<()> {
        self.adapter.close().await
    }

    /// Destroy the database and all its data.
    pub async fn destroy(&self) -> Result<()> {
        self.adapter.destroy().await
    }
}
