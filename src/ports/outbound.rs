//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Barber, DomainError, Faq, Location, Promotion, Service, WorkingHours};

/// Source of the shop's reference records. Each fetch fails independently.
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_services(&self) -> Result<Vec<Service>, DomainError>;

    async fn fetch_barbers(&self) -> Result<Vec<Barber>, DomainError>;

    async fn fetch_faqs(&self) -> Result<Vec<Faq>, DomainError>;

    async fn fetch_promotions(&self) -> Result<Vec<Promotion>, DomainError>;

    /// Ordered; the first location is treated as the primary one.
    async fn fetch_locations(&self) -> Result<Vec<Location>, DomainError>;

    async fn fetch_working_hours(&self) -> Result<Vec<WorkingHours>, DomainError>;
}

/// Hands control over to the booking screen. Fire-and-forget: no result is awaited.
pub trait BookingNavigator: Send + Sync {
    fn navigate_to_booking(&self);
}

/// User-visible notifications (e.g. toasts). Purely observational.
pub trait Notifier: Send + Sync {
    fn report_error(&self, title: &str, description: &str);
}
