//! JSON-file store: one `<id>.json` document per valuation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pharmval_common::{Result, ValuationInputs, ValuationOutputs};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::record::{ensure_storable, ValuationRecord};
use crate::store::ValuationStore;

#[derive(Debug, Clone)]
pub struct JsonFileValuationStore {
    dir: PathBuf,
}

impl JsonFileValuationStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        info!(dir = %dir.display(), "Valuation store opened");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    async fn read_record(path: &Path) -> Result<ValuationRecord> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Every parseable record in the directory. Unreadable files are
    /// skipped with a warning so one bad file cannot hide the rest.
    async fn scan(&self) -> Result<Vec<ValuationRecord>> {
        let mut records = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_record(&path).await {
                Ok(r) => records.push(r),
                Err(e) => warn!(path = %path.display(), "Skipping unreadable valuation: {e}"),
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl ValuationStore for JsonFileValuationStore {
    async fn save(
        &self,
        inputs: ValuationInputs,
        outputs: ValuationOutputs,
    ) -> Result<ValuationRecord> {
        ensure_storable(&inputs, &outputs)?;
        let record = ValuationRecord::new(inputs, outputs);
        let path = self.path_for(record.id);
        let content = serde_json::to_string_pretty(&record)?;
        tokio::fs::write(&path, content).await?;
        debug!(id = %record.id, share_id = %record.share_id, path = %path.display(), "Valuation saved");
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ValuationRecord>> {
        let path = self.path_for(id);
        if !tokio::fs::try_exists(&path).await? {
            return Ok(None);
        }
        Ok(Some(Self::read_record(&path).await?))
    }

    async fn get_by_share_id(&self, share_id: &str) -> Result<Option<ValuationRecord>> {
        Ok(self.scan().await?.into_iter().find(|r| r.share_id == share_id))
    }

    async fn list(&self) -> Result<Vec<ValuationRecord>> {
        let mut all = self.scan().await?;
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }
}
