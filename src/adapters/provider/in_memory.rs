//! In-memory DataProvider for tests and demos.
//!
//! Serves a fixed snapshot; individual collections can be made to fail.

use crate::domain::{
    Barber, Collection, DomainError, Faq, Location, Promotion, ReferenceStore, Service,
    WorkingHours,
};
use crate::ports::DataProvider;
use std::collections::HashSet;
use tracing::info;

pub struct InMemoryProvider {
    data: ReferenceStore,
    failing: HashSet<Collection>,
}

impl InMemoryProvider {
    pub fn new(data: ReferenceStore) -> Self {
        Self {
            data,
            failing: HashSet::new(),
        }
    }

    /// Make every fetch of `collection` fail.
    pub fn failing(mut self, collection: Collection) -> Self {
        self.failing.insert(collection);
        self
    }

    fn serve<T: Clone>(&self, collection: Collection, items: &[T]) -> Result<Vec<T>, DomainError> {
        if self.failing.contains(&collection) {
            info!(%collection, "[MOCK] simulating fetch failure");
            return Err(DomainError::DataProvider(format!(
                "{} unavailable (simulated)",
                collection
            )));
        }
        Ok(items.to_vec())
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new(ReferenceStore::default())
    }
}

#[async_trait::async_trait]
impl DataProvider for InMemoryProvider {
    async fn fetch_services(&self) -> Result<Vec<Service>, DomainError> {
        self.serve(Collection::Services, &self.data.services)
    }

    async fn fetch_barbers(&self) -> Result<Vec<Barber>, DomainError> {
        self.serve(Collection::Barbers, &self.data.barbers)
    }

    async fn fetch_faqs(&self) -> Result<Vec<Faq>, DomainError> {
        self.serve(Collection::Faqs, &self.data.faqs)
    }

    async fn fetch_promotions(&self) -> Result<Vec<Promotion>, DomainError> {
        self.serve(Collection::Promotions, &self.data.promotions)
    }

    async fn fetch_locations(&self) -> Result<Vec<Location>, DomainError> {
        self.serve(Collection::Locations, &self.data.locations)
    }

    async fn fetch_working_hours(&self) -> Result<Vec<WorkingHours>, DomainError> {
        self.serve(Collection::WorkingHours, &self.data.working_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failing_collection() {
        let provider = InMemoryProvider::default().failing(Collection::Faqs);
        assert!(provider.fetch_faqs().await.is_err());
        assert!(provider.fetch_services().await.unwrap().is_empty());
    }
}
