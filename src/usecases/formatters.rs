//! Render reference records as chat replies.
//!
//! Every formatter falls back to a fixed apology when its collection is empty.

use crate::domain::ReferenceStore;
use crate::usecases::finders::find_barber;
use chrono::{DateTime, Local, Utc};
use tracing::warn;

pub const NO_SERVICES: &str =
    "I'm sorry, I couldn't find any services right now. Please try again later.";
pub const NO_BARBERS: &str =
    "I'm sorry, I couldn't find any barber information right now. Please try again later.";
pub const NO_LOCATION: &str =
    "I'm sorry, our location details aren't available right now. Please try again later.";
pub const NO_HOURS: &str =
    "I'm sorry, our working hours aren't available right now. Please try again later.";
/// Shared by "no promotions at all" and "none currently active".
pub const NO_PROMOTIONS: &str = "I'm sorry, there are no active promotions at the moment. Check back soon!";

pub const NO_DESCRIPTION: &str = "No description available";
pub const NO_BIO: &str = "No bio available";
pub const NO_DETAILS: &str = "No details available";
pub const NOT_AVAILABLE: &str = "Not available";

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Day name for a 0 (Sunday) ..= 6 (Saturday) index.
pub fn day_name(index: u8) -> &'static str {
    DAY_NAMES.get(index as usize).copied().unwrap_or("Unknown")
}

/// `$25` for whole amounts, `$25.50` otherwise.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}

pub fn format_services(store: &ReferenceStore) -> String {
    if store.services.is_empty() {
        return NO_SERVICES.to_string();
    }
    let items: Vec<String> = store
        .services
        .iter()
        .map(|s| {
            format!(
                "✂️ {} - {} ({} minutes)\n{}",
                s.name,
                format_price(s.price),
                s.duration_minutes,
                s.description.as_deref().unwrap_or(NO_DESCRIPTION)
            )
        })
        .collect();
    format!("Here are our services:\n\n{}", items.join("\n\n"))
}

pub fn format_barbers(store: &ReferenceStore) -> String {
    if store.barbers.is_empty() {
        return NO_BARBERS.to_string();
    }
    let items: Vec<String> = store
        .barbers
        .iter()
        .map(|b| format!("💈 {}\n{}", b.name, b.bio.as_deref().unwrap_or(NO_BIO)))
        .collect();
    format!("Meet our barbers:\n\n{}", items.join("\n\n"))
}

/// Detail card for the first barber whose name contains `name`.
pub fn format_barber_detail(store: &ReferenceStore, name: &str) -> String {
    let Some(barber) = find_barber(store, None, Some(name)) else {
        return format!("I'm sorry, I couldn't find a barber named \"{}\".", name);
    };
    let availability = if barber.is_active {
        "✅ Currently available for appointments"
    } else {
        "❌ Not currently taking appointments"
    };
    format!(
        "💈 {}\n\n{}\n\n{}",
        barber.name,
        barber.bio.as_deref().unwrap_or(NO_BIO),
        availability
    )
}

pub fn format_location(store: &ReferenceStore) -> String {
    let Some(loc) = store.primary_location() else {
        return NO_LOCATION.to_string();
    };
    format!(
        "📍 {}\n{}, {}\n📞 Phone: {}\n✉️ Email: {}",
        loc.name,
        loc.address,
        loc.city,
        loc.phone.as_deref().unwrap_or(NOT_AVAILABLE),
        loc.email.as_deref().unwrap_or(NOT_AVAILABLE)
    )
}

/// Weekly schedule in day order. Records with an unusable day index are skipped.
pub fn format_hours(store: &ReferenceStore) -> String {
    if store.working_hours.is_empty() {
        return NO_HOURS.to_string();
    }
    let mut days: Vec<(u8, &crate::domain::WorkingHours)> = store
        .working_hours
        .iter()
        .filter_map(|h| match h.day_index() {
            Ok(day) => Some((day, h)),
            Err(e) => {
                warn!(error = %e, "skipping working-hours record");
                None
            }
        })
        .collect();
    if days.is_empty() {
        return NO_HOURS.to_string();
    }
    days.sort_by_key(|(day, _)| *day);

    let lines: Vec<String> = days
        .iter()
        .map(|(day, h)| {
            if h.is_closed {
                format!("{}: Closed", day_name(*day))
            } else {
                format!(
                    "{}: {} - {}",
                    day_name(*day),
                    h.open_time.as_deref().unwrap_or("?"),
                    h.close_time.as_deref().unwrap_or("?")
                )
            }
        })
        .collect();
    format!("🕐 Our working hours:\n\n{}", lines.join("\n"))
}

/// Active promotions as of `now`.
pub fn format_promotions(store: &ReferenceStore, now: DateTime<Utc>) -> String {
    let active: Vec<String> = store
        .promotions
        .iter()
        .filter(|p| p.is_active_at(now))
        .map(|p| {
            let validity = match p.expires_at {
                Some(expiry) => format!(
                    "Valid until: {}",
                    expiry.with_timezone(&Local).format("%m/%d/%Y")
                ),
                None => "No expiration date".to_string(),
            };
            format!(
                "🎉 {}\n{}\n{}",
                p.title,
                p.details.as_deref().unwrap_or(NO_DETAILS),
                validity
            )
        })
        .collect();
    if active.is_empty() {
        return NO_PROMOTIONS.to_string();
    }
    format!("Current promotions:\n\n{}", active.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Barber, Location, Promotion, Service, WorkingHours};
    use chrono::Duration;

    fn store() -> ReferenceStore {
        ReferenceStore {
            services: vec![
                Service {
                    name: "Classic Cut".into(),
                    price: 25.0,
                    duration_minutes: 30,
                    description: Some("Standard haircut".into()),
                },
                Service {
                    name: "Beard Trim".into(),
                    price: 12.5,
                    duration_minutes: 15,
                    description: None,
                },
            ],
            barbers: vec![
                Barber {
                    id: "b1".into(),
                    name: "Marco Rossi".into(),
                    bio: Some("Fades and classic styles".into()),
                    is_active: true,
                },
                Barber {
                    id: "b2".into(),
                    name: "Jin Park".into(),
                    bio: None,
                    is_active: false,
                },
            ],
            locations: vec![
                Location {
                    name: "Downtown".into(),
                    address: "1 Main St".into(),
                    city: "Springfield".into(),
                    phone: Some("555-0100".into()),
                    email: None,
                },
                Location {
                    name: "Uptown".into(),
                    address: "9 Hill Rd".into(),
                    city: "Springfield".into(),
                    phone: None,
                    email: None,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_store_apologises_everywhere() {
        let empty = ReferenceStore::default();
        let now = Utc::now();
        assert_eq!(format_services(&empty), NO_SERVICES);
        assert_eq!(format_barbers(&empty), NO_BARBERS);
        assert_eq!(format_location(&empty), NO_LOCATION);
        assert_eq!(format_hours(&empty), NO_HOURS);
        assert_eq!(format_promotions(&empty, now), NO_PROMOTIONS);
    }

    #[test]
    fn test_services_list_uses_placeholder() {
        let text = format_services(&store());
        assert!(!text.contains(NO_SERVICES));
        assert!(text.contains("Classic Cut - $25 (30 minutes)"));
        assert!(text.contains("Beard Trim - $12.50 (15 minutes)"));
        assert!(text.contains(NO_DESCRIPTION));
        assert!(text.contains("\n\n✂️ Beard Trim"));
    }

    #[test]
    fn test_barbers_list_and_detail() {
        let s = store();
        let list = format_barbers(&s);
        assert!(list.contains("Marco Rossi"));
        assert!(list.contains(NO_BIO));

        let marco = format_barber_detail(&s, "marco");
        assert!(marco.contains("Fades and classic styles"));
        assert!(marco.contains("Currently available"));

        let jin = format_barber_detail(&s, "Jin");
        assert!(jin.contains("Not currently taking appointments"));

        let missing = format_barber_detail(&s, "Alice");
        assert!(missing.contains("\"Alice\""));
    }

    #[test]
    fn test_location_uses_first_record() {
        let text = format_location(&store());
        assert!(text.contains("Downtown"));
        assert!(!text.contains("Uptown"));
        assert!(text.contains("Phone: 555-0100"));
        assert!(text.contains("Email: Not available"));
    }

    #[test]
    fn test_hours_sorted_by_day() {
        let s = ReferenceStore {
            working_hours: vec![
                WorkingHours {
                    day_of_week: 1.into(),
                    open_time: Some("09:00".into()),
                    close_time: Some("18:00".into()),
                    is_closed: false,
                },
                WorkingHours {
                    day_of_week: crate::domain::DayIndex::Text("garbage".into()),
                    open_time: None,
                    close_time: None,
                    is_closed: true,
                },
                WorkingHours {
                    day_of_week: 0.into(),
                    open_time: None,
                    close_time: None,
                    is_closed: true,
                },
            ],
            ..Default::default()
        };
        let text = format_hours(&s);
        let sunday = text.find("Sunday: Closed").unwrap();
        let monday = text.find("Monday: 09:00 - 18:00").unwrap();
        assert!(sunday < monday);
        assert_eq!(text.lines().filter(|l| l.contains(':')).count(), 3);
    }

    #[test]
    fn test_promotions_filter_expired() {
        let now = Utc::now();
        let mut s = ReferenceStore {
            promotions: vec![Promotion {
                title: "Summer".into(),
                details: None,
                expires_at: Some(now - Duration::days(1)),
            }],
            ..Default::default()
        };
        assert_eq!(format_promotions(&s, now), NO_PROMOTIONS);

        s.promotions.push(Promotion {
            title: "Student discount".into(),
            details: Some("10% off with ID".into()),
            expires_at: None,
        });
        s.promotions.push(Promotion {
            title: "Fall".into(),
            details: None,
            expires_at: Some(now + Duration::days(10)),
        });
        let text = format_promotions(&s, now);
        assert!(!text.contains("Summer"));
        assert!(text.contains("10% off with ID"));
        assert!(text.contains("No expiration date"));
        assert!(text.contains("Valid until: "));
        assert!(text.contains(NO_DETAILS));
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(25.0), "$25");
        assert_eq!(format_price(7.5), "$7.50");
        assert_eq!(format_price(0.0), "$0");
    }
}
