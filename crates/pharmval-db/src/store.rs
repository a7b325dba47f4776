//! Storage trait for valuation snapshots.

use async_trait::async_trait;
use pharmval_common::{Result, ValuationInputs, ValuationOutputs};
use uuid::Uuid;

use crate::record::ValuationRecord;

/// Persistence for valuation snapshots.
///
/// Missing records are `Ok(None)`; errors are reserved for storage failures.
#[async_trait]
pub trait ValuationStore: Send + Sync {
    /// Persist a snapshot, assigning id, share id and timestamp.
    async fn save(&self, inputs: ValuationInputs, outputs: ValuationOutputs)
        -> Result<ValuationRecord>;

    async fn get(&self, id: Uuid) -> Result<Option<ValuationRecord>>;

    async fn get_by_share_id(&self, share_id: &str) -> Result<Option<ValuationRecord>>;

    /// All snapshots, oldest first.
    async fn list(&self) -> Result<Vec<ValuationRecord>>;

    /// Resolve either a UUID or a share id.
    async fn find(&self, key: &str) -> Result<Option<ValuationRecord>> {
        match Uuid::parse_str(key) {
            Ok(id) => self.get(id).await,
            Err(_) => self.get_by_share_id(key).await,
        }
    }
}
