//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here. Adapters decode into these.

use crate::domain::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service (haircut, beard trim, ...). Names are not unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub price: f64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barber {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub title: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Promotion {
    /// No expiry means always active; otherwise the expiry must be strictly after `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            None => true,
            Some(expiry) => expiry > now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Weekday index as delivered by the data source: either a number or numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayIndex {
    Number(i64),
    Text(String),
}

impl DayIndex {
    /// Coerce to 0 (Sunday) ..= 6 (Saturday).
    pub fn resolve(&self) -> Result<u8, DomainError> {
        let raw = match self {
            DayIndex::Number(n) => *n,
            DayIndex::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                DomainError::MalformedRecord(format!("day_of_week {:?} is not a number", s))
            })?,
        };
        u8::try_from(raw)
            .ok()
            .filter(|d| *d <= 6)
            .ok_or_else(|| {
                DomainError::MalformedRecord(format!("day_of_week {} is out of range", raw))
            })
    }
}

impl From<u8> for DayIndex {
    fn from(day: u8) -> Self {
        DayIndex::Number(i64::from(day))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub day_of_week: DayIndex,
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
}

impl WorkingHours {
    pub fn day_index(&self) -> Result<u8, DomainError> {
        self.day_of_week.resolve()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

/// The single most recent conversation topic. `None` in an `Option<ContextTag>` is the null state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextTag {
    Booking,
    Service,
    Services,
    Barber,
    Barbers,
    Location,
    Hours,
    Promotions,
}

impl ContextTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextTag::Booking => "booking",
            ContextTag::Service => "service",
            ContextTag::Services => "services",
            ContextTag::Barber => "barber",
            ContextTag::Barbers => "barbers",
            ContextTag::Location => "location",
            ContextTag::Hours => "hours",
            ContextTag::Promotions => "promotions",
        }
    }
}

impl std::fmt::Display for ContextTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
