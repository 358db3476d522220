use async_trait::async_trait;

use crate::error::Result;
use crate::member::*;

/// The trait all member storage adapters must implement.
///
/// Adapters are responsible for:
/// - Storing members keyed by `_id`
/// - Preserving natural (insertion) order for listing
/// - Serializing concurrent writes
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Get database information: name and member count.
    async fn info(&self) -> Result<DbInfo>;

    /// Retrieve a single member by ID.
    async fn get(&self, id: &str) -> Result<Member>;

    /// Insert or replace a member.
    ///
    /// An empty `id` gets a freshly generated one. Replacing an existing
    /// member keeps its position in natural order.
    async fn put(&self, member: Member) -> Result<PutResult>;

    /// List members in natural order, honoring `skip` then `limit`.
    async fn list(&self, opts: ListOptions) -> Result<Vec<Member>>;

    /// Remove a member by ID.
    async fn remove(&self, id: &str) -> Result<PutResult>;

    /// Destroy the database and all its data.
    async fn destroy(&self) -> Result<()>;

    /// Close the database, releasing any held resources.
    /// Default implementation is a no-op.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
