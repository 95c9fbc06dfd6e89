//! Load the reference snapshot. A failed collection becomes empty; it never aborts the load.

use crate::domain::{Collection, DomainError, ReferenceStore};
use crate::ports::DataProvider;
use tracing::{info, warn};

/// Collections that could not be loaded, with the reason.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub failed: Vec<(Collection, String)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// One-line human summary, e.g. "services, faqs could not be loaded".
    pub fn summary(&self) -> String {
        if self.is_complete() {
            return "all reference data loaded".to_string();
        }
        let names: Vec<&str> = self.failed.iter().map(|(c, _)| c.as_str()).collect();
        format!("{} could not be loaded", names.join(", "))
    }
}

fn or_empty<T>(
    collection: Collection,
    result: Result<Vec<T>, DomainError>,
    report: &mut LoadReport,
) -> Vec<T> {
    match result {
        Ok(items) => {
            info!(%collection, count = items.len(), "loaded collection");
            items
        }
        Err(e) => {
            warn!(%collection, error = %e, "collection unavailable; treating as empty");
            report.failed.push((collection, e.to_string()));
            Vec::new()
        }
    }
}

/// Fetch all six collections concurrently.
pub async fn load_store(provider: &dyn DataProvider) -> (ReferenceStore, LoadReport) {
    let (services, barbers, faqs, promotions, locations, working_hours) = tokio::join!(
        provider.fetch_services(),
        provider.fetch_barbers(),
        provider.fetch_faqs(),
        provider.fetch_promotions(),
        provider.fetch_locations(),
        provider.fetch_working_hours(),
    );

    let mut report = LoadReport::default();
    let store = ReferenceStore {
        services: or_empty(Collection::Services, services, &mut report),
        barbers: or_empty(Collection::Barbers, barbers, &mut report),
        faqs: or_empty(Collection::Faqs, faqs, &mut report),
        promotions: or_empty(Collection::Promotions, promotions, &mut report),
        locations: or_empty(Collection::Locations, locations, &mut report),
        working_hours: or_empty(Collection::WorkingHours, working_hours, &mut report),
    };
    (store, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::provider::InMemoryProvider;
    use crate::domain::Faq;

    #[tokio::test]
    async fn test_partial_failure_keeps_other_collections() {
        let snapshot = ReferenceStore {
            faqs: vec![Faq {
                question: "Walk-ins?".into(),
                answer: "Yes".into(),
            }],
            ..Default::default()
        };
        let provider = InMemoryProvider::new(snapshot)
            .failing(Collection::Services)
            .failing(Collection::WorkingHours);

        let (store, report) = load_store(&provider).await;

        assert_eq!(store.faqs.len(), 1);
        assert!(store.services.is_empty());
        assert!(!report.is_complete());
        let failed: Vec<Collection> = report.failed.iter().map(|(c, _)| *c).collect();
        assert_eq!(failed, vec![Collection::Services, Collection::WorkingHours]);
        assert_eq!(
            report.summary(),
            "services, working_hours could not be loaded"
        );
    }

    #[tokio::test]
    async fn test_full_load() {
        let provider = InMemoryProvider::new(ReferenceStore::default());
        let (_, report) = load_store(&provider).await;
        assert!(report.is_complete());
    }
}
