//! Implements DataProvider using a single JSON document.
//!
//! Layout: `{ "services": [...], "barbers": [...], "faqs": [...], "promotions": [...],
//! "locations": [...], "working_hours": [...] }`. The file is read and parsed once per
//! provider; each array is then decoded on its own, so one malformed collection does
//! not take the others down.

use crate::domain::{
    Barber, Collection, DomainError, Faq, Location, Promotion, Service, WorkingHours,
};
use crate::ports::DataProvider;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::OnceCell;
use tracing::debug;

pub struct JsonFileProvider {
    path: PathBuf,
    doc: OnceCell<serde_json::Value>,
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            doc: OnceCell::new(),
        }
    }

    /// Parsed document, cached after the first successful read.
    async fn document(&self) -> Result<&serde_json::Value, DomainError> {
        self.doc
            .get_or_try_init(|| async {
                let raw = fs::read_to_string(&self.path).await.map_err(|e| {
                    DomainError::DataProvider(format!("read {}: {}", self.path.display(), e))
                })?;
                debug!(path = %self.path.display(), bytes = raw.len(), "parsing reference file");
                serde_json::from_str(&raw).map_err(|e| {
                    DomainError::DataProvider(format!("parse {}: {}", self.path.display(), e))
                })
            })
            .await
    }

    async fn read_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, DomainError> {
        let doc = self.document().await?;
        let Some(section) = doc.get(collection.as_str()) else {
            debug!(%collection, path = %self.path.display(), "collection absent from file");
            return Ok(Vec::new());
        };
        Vec::<T>::deserialize(section)
            .map_err(|e| DomainError::DataProvider(format!("decode {}: {}", collection, e)))
    }
}

#[async_trait::async_trait]
impl DataProvider for JsonFileProvider {
    async fn fetch_services(&self) -> Result<Vec<Service>, DomainError> {
        self.read_collection(Collection::Services).await
    }

    async fn fetch_barbers(&self) -> Result<Vec<Barber>, DomainError> {
        self.read_collection(Collection::Barbers).await
    }

    async fn fetch_faqs(&self) -> Result<Vec<Faq>, DomainError> {
        self.read_collection(Collection::Faqs).await
    }

    async fn fetch_promotions(&self) -> Result<Vec<Promotion>, DomainError> {
        self.read_collection(Collection::Promotions).await
    }

    async fn fetch_locations(&self) -> Result<Vec<Location>, DomainError> {
        self.read_collection(Collection::Locations).await
    }

    async fn fetch_working_hours(&self) -> Result<Vec<WorkingHours>, DomainError> {
        self.read_collection(Collection::WorkingHours).await
    }
}
