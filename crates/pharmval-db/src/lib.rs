//! pharmval persistence layer.
//!
//! Stores valuation snapshots (inputs + outputs) under a primary id and an
//! opaque share id. The engine never touches this crate; callers compute
//! first and persist the result.
//!
//! # Example
//!
//! ```rust,no_run
//! use pharmval_common::ValuationInputs;
//! use pharmval_db::{JsonFileValuationStore, ValuationStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = JsonFileValuationStore::open("./data/valuations").await?;
//!     let inputs = ValuationInputs::default();
//!     let outputs = pharmval_engine::compose(&inputs, 2026);
//!     let record = store.save(inputs, outputs).await?;
//!     println!("share id: {}", record.share_id);
//!     Ok(())
//! }
//! ```

pub mod record;
pub mod store;
pub mod memory;
pub mod file;
pub mod export;

pub use export::{export_row, write_csv, EXPORT_HEADERS};
pub use file::JsonFileValuationStore;
pub use memory::InMemoryValuationStore;
pub use record::{ensure_storable, generate_share_id, ValuationRecord};
pub use store::ValuationStore;
