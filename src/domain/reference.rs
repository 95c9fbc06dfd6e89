//! Reference snapshot consumed by the reply pipeline.

use crate::domain::{Barber, Faq, Location, Promotion, Service, WorkingHours};
use serde::{Deserialize, Serialize};

/// Immutable per-session snapshot of all business records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceStore {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub barbers: Vec<Barber>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub working_hours: Vec<WorkingHours>,
}

impl ReferenceStore {
    /// The shop's main location. Always the first record; extra locations are ignored.
    pub fn primary_location(&self) -> Option<&Location> {
        self.locations.first()
    }
}

/// Names the six reference collections. `as_str` matches the table / JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Services,
    Barbers,
    Faqs,
    Promotions,
    Locations,
    WorkingHours,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Services,
        Collection::Barbers,
        Collection::Faqs,
        Collection::Promotions,
        Collection::Locations,
        Collection::WorkingHours,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Services => "services",
            Collection::Barbers => "barbers",
            Collection::Faqs => "faqs",
            Collection::Promotions => "promotions",
            Collection::Locations => "locations",
            Collection::WorkingHours => "working_hours",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
