//! Fuzzy record lookups: services, barbers, today's schedule.

use crate::domain::{Barber, ReferenceStore, Service};
use crate::usecases::formatters::format_price;
use tracing::warn;

/// Question words that say nothing about which service is meant.
const FILLER_TERMS: &[&str] = &[
    "much", "what", "whats", "your", "does", "have", "with", "price", "prices", "pricing", "cost",
    "costs", "charge", "about", "there", "want", "would", "like", "need", "please", "tell",
    "give", "this", "that", "service", "services",
];

fn query_terms(query: &str) -> Vec<String> {
    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 3)
        .map(str::to_lowercase)
        .filter(|w| !FILLER_TERMS.contains(&w.as_str()))
        .collect()
}

fn service_matches(service: &Service, query: &str, terms: &[String]) -> bool {
    let name = service.name.to_lowercase();
    let description = service
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let haystack_has = |needle: &str| name.contains(needle) || description.contains(needle);

    haystack_has(query)
        || (!name.is_empty() && query.contains(&name))
        || terms.iter().any(|t| haystack_has(t))
}

/// Services matching `query` by name or description.
///
/// - no match: `None`
/// - one match: full description with a call to book
/// - several: one terse bullet per match
pub fn find_service(store: &ReferenceStore, query: &str) -> Option<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    let terms = query_terms(&query);
    let matches: Vec<&Service> = store
        .services
        .iter()
        .filter(|s| service_matches(s, &query, &terms))
        .collect();

    match matches.as_slice() {
        [] => None,
        [service] => Some(format!(
            "✂️ {}\n\nPrice: {}\nDuration: {} minutes\n{}\n\nWould you like to book this service? Just say \"book\" and I'll help you schedule.",
            service.name,
            format_price(service.price),
            service.duration_minutes,
            service
                .description
                .as_deref()
                .unwrap_or(crate::usecases::formatters::NO_DESCRIPTION)
        )),
        many => {
            let bullets: Vec<String> = many
                .iter()
                .map(|s| {
                    format!(
                        "• {} - {} ({} minutes)",
                        s.name,
                        format_price(s.price),
                        s.duration_minutes
                    )
                })
                .collect();
            Some(format!(
                "I found several services that match:\n\n{}",
                bullets.join("\n")
            ))
        }
    }
}

/// Exact match by `id` when given, otherwise first barber whose name contains `name`.
pub fn find_barber<'a>(
    store: &'a ReferenceStore,
    id: Option<&str>,
    name: Option<&str>,
) -> Option<&'a Barber> {
    if let Some(id) = id {
        return store.barbers.iter().find(|b| b.id == id);
    }
    let needle = name?.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    store
        .barbers
        .iter()
        .find(|b| b.name.to_lowercase().contains(&needle))
}

/// Schedule line for weekday `today` (0 = Sunday). First record for the day wins.
pub fn find_todays_hours(store: &ReferenceStore, today: u8) -> Option<String> {
    let entry = store.working_hours.iter().find(|h| match h.day_index() {
        Ok(day) => day == today,
        Err(e) => {
            warn!(error = %e, "skipping working-hours record");
            false
        }
    })?;

    if entry.is_closed {
        return Some("Sorry, we're closed today.".to_string());
    }
    Some(format!(
        "We're open today from {} to {}.",
        entry.open_time.as_deref().unwrap_or("?"),
        entry.close_time.as_deref().unwrap_or("?")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayIndex, WorkingHours};

    fn service(name: &str, price: f64, minutes: u32, description: Option<&str>) -> Service {
        Service {
            name: name.into(),
            price,
            duration_minutes: minutes,
            description: description.map(Into::into),
        }
    }

    fn store() -> ReferenceStore {
        ReferenceStore {
            services: vec![
                service("Classic Cut", 25.0, 30, Some("Standard haircut")),
                service("Skin Fade", 30.0, 45, Some("Fade haircut with clean edges")),
                service("Beard Trim", 15.0, 20, None),
            ],
            barbers: vec![
                Barber {
                    id: "1".into(),
                    name: "Marco Rossi".into(),
                    bio: None,
                    is_active: true,
                },
                Barber {
                    id: "2".into(),
                    name: "Marcus Lee".into(),
                    bio: None,
                    is_active: true,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_single_service_match_is_verbose() {
        let s = ReferenceStore {
            services: vec![service("Classic Cut", 25.0, 30, Some("Standard haircut"))],
            ..Default::default()
        };
        let text = find_service(&s, "How much for a haircut?").unwrap();
        assert!(text.contains("$25"));
        assert!(text.contains("30 minutes"));
        assert!(text.contains("Standard haircut"));
        assert!(text.contains("book"));
    }

    #[test]
    fn test_multiple_matches_are_bullets() {
        let text = find_service(&store(), "haircut").unwrap();
        let bullets = text.lines().filter(|l| l.starts_with("• ")).count();
        assert_eq!(bullets, 2);
        assert!(text.contains("• Skin Fade - $30 (45 minutes)"));
    }

    #[test]
    fn test_query_containing_service_name() {
        let text = find_service(&store(), "do you do a beard trim").unwrap();
        assert!(text.contains("Beard Trim"));
        assert!(text.contains("Duration: 20 minutes"));
    }

    #[test]
    fn test_no_service_match() {
        assert!(find_service(&store(), "manicure").is_none());
        assert!(find_service(&store(), "   ").is_none());
        assert!(find_service(&store(), "how much").is_none());
    }

    #[test]
    fn test_find_barber_by_id_then_name() {
        let s = store();
        assert_eq!(find_barber(&s, Some("2"), None).unwrap().name, "Marcus Lee");
        assert!(find_barber(&s, Some("9"), Some("marco")).is_none());
        assert_eq!(find_barber(&s, None, Some("MARC")).unwrap().name, "Marco Rossi");
        assert!(find_barber(&s, None, Some("zed")).is_none());
        assert!(find_barber(&s, None, None).is_none());
    }

    #[test]
    fn test_todays_hours() {
        let s = ReferenceStore {
            working_hours: vec![
                WorkingHours {
                    day_of_week: DayIndex::Text("x".into()),
                    open_time: None,
                    close_time: None,
                    is_closed: false,
                },
                WorkingHours {
                    day_of_week: DayIndex::Text("0".into()),
                    open_time: None,
                    close_time: None,
                    is_closed: true,
                },
                WorkingHours {
                    day_of_week: 1.into(),
                    open_time: Some("09:00".into()),
                    close_time: Some("18:00".into()),
                    is_closed: false,
                },
                WorkingHours {
                    day_of_week: 1.into(),
                    open_time: Some("10:00".into()),
                    close_time: Some("12:00".into()),
                    is_closed: false,
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            find_todays_hours(&s, 0).as_deref(),
            Some("Sorry, we're closed today.")
        );
        assert_eq!(
            find_todays_hours(&s, 1).as_deref(),
            Some("We're open today from 09:00 to 18:00.")
        );
        assert!(find_todays_hours(&s, 3).is_none());
    }
}
