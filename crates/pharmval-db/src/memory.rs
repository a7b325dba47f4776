//! In-memory store, for tests and single-process use.

use std::collections::HashMap;

use async_trait::async_trait;
use pharmval_common::{Result, ValuationInputs, ValuationOutputs};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::record::{ensure_storable, ValuationRecord};
use crate::store::ValuationStore;

#[derive(Debug, Default)]
pub struct InMemoryValuationStore {
    records: RwLock<HashMap<Uuid, ValuationRecord>>,
}

impl InMemoryValuationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ValuationStore for InMemoryValuationStore {
    async fn save(
        &self,
        inputs: ValuationInputs,
        outputs: ValuationOutputs,
    ) -> Result<ValuationRecord> {
        ensure_storable(&inputs, &outputs)?;
        let record = ValuationRecord::new(inputs, outputs);
        self.records.write().await.insert(record.id, record.clone());
        debug!(id = %record.id, share_id = %record.share_id, "Valuation saved in memory");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ValuationRecord>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn get_by_share_id(&self, share_id: &str) -> Result<Option<ValuationRecord>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|r| r.share_id == share_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<ValuationRecord>> {
        let mut all: Vec<ValuationRecord> = self.records.read().await.values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }
}
