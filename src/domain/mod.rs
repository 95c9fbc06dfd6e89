//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod reference;

pub use entities::{
    Barber, ChatMessage, ContextTag, DayIndex, Faq, Location, Promotion, Sender, Service,
    WorkingHours,
};
pub use errors::DomainError;
pub use reference::{Collection, ReferenceStore};
