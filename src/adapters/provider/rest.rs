//! PostgREST-style HTTP adapter. Implements DataProvider with one GET per table.

use crate::domain::{
    Barber, Collection, DomainError, Faq, Location, Promotion, Service, WorkingHours,
};
use crate::ports::DataProvider;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Reads the six tables from a REST endpoint (e.g. Supabase `/rest/v1`).
///
/// The key is sent both as `apikey` and as a bearer token.
pub struct RestProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl RestProvider {
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://xyz.supabase.co/rest/v1`
    /// * `api_key` - anon / service key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, collection: Collection) -> String {
        format!(
            "{}/{}?select=*",
            self.base_url.trim_end_matches('/'),
            collection.as_str()
        )
    }

    async fn fetch_table<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, DomainError> {
        let url = self.table_url(collection);
        debug!(%collection, url = %url, "fetching table");

        let res = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| DomainError::DataProvider(format!("{}: request failed: {}", collection, e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::DataProvider(format!(
                "{}: API error {}: {}",
                collection, status, text
            )));
        }

        res.json::<Vec<T>>()
            .await
            .map_err(|e| DomainError::DataProvider(format!("{}: invalid body: {}", collection, e)))
    }
}

#[async_trait::async_trait]
impl DataProvider for RestProvider {
    async fn fetch_services(&self) -> Result<Vec<Service>, DomainError> {
        self.fetch_table(Collection::Services).await
    }

    async fn fetch_barbers(&self) -> Result<Vec<Barber>, DomainError> {
        self.fetch_table(Collection::Barbers).await
    }

    async fn fetch_faqs(&self) -> Result<Vec<Faq>, DomainError> {
        self.fetch_table(Collection::Faqs).await
    }

    async fn fetch_promotions(&self) -> Result<Vec<Promotion>, DomainError> {
        self.fetch_table(Collection::Promotions).await
    }

    async fn fetch_locations(&self) -> Result<Vec<Location>, DomainError> {
        self.fetch_table(Collection::Locations).await
    }

    async fn fetch_working_hours(&self) -> Result<Vec<WorkingHours>, DomainError> {
        self.fetch_table(Collection::WorkingHours).await
    }
}
