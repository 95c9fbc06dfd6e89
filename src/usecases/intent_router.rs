//! Intent routing: ordered keyword rules over normalized input.
//!
//! Pure: `(input, context, store, now) -> Classification`. The session owns the
//! transcript and the context slot; this module only decides what to say.

use crate::domain::{ContextTag, ReferenceStore};
use crate::usecases::{faq_scorer, finders, formatters};
use chrono::{DateTime, Datelike, Local, Utc};
use tracing::debug;

pub const BOOKING_OFFER: &str = "I'd be happy to help you book an appointment! 📅 You can pick your service, barber and time slot on our booking page.";
pub const BOOKING_PROMPT: &str =
    "Would you like me to take you to the booking page now? Just reply \"yes\".";
pub const BOOKING_CONFIRMED: &str = "Great! Taking you to the booking page now... 📅";
pub const FALLBACK: &str = "I'm sorry, I can only help with questions about our services, prices, barbers, opening hours, location, promotions and bookings. Could you try rephrasing?";
pub const CLOCK_MARKER: &str = "🕐 ";

const BOOKING_WORDS: &[&str] = &["book", "appointment", "schedule", "reserve"];
const HAIR_WORDS: &[&str] = &["haircut", "cut", "hair", "trim"];
const PRICE_WORDS: &[&str] = &["price", "cost", "how much", "fee", "charge", "pricing"];
const STAFF_WORDS: &[&str] = &["barber", "stylist", "staff"];
const TODAY_WORDS: &[&str] = &["open", "hour", "time"];
const CONFIRM_WORD: &str = "yes";

/// General topics, checked in order after the specific rules.
const TOPICS: &[(&[&str], Topic)] = &[
    (&["service", "price", "offer"], Topic::Services),
    (&["barber", "stylist", "staff"], Topic::Barbers),
    (&["location", "address", "where", "find"], Topic::Location),
    (&["hour", "time", "open", "close"], Topic::Hours),
    (&["promotion", "deal", "discount", "offer"], Topic::Promotions),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Services,
    Barbers,
    Location,
    Hours,
    Promotions,
}

/// Something the session must do in response to a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Bot message shown once the typing delay elapses.
    Say(String),
    /// Bot message staged after an additional follow-up delay.
    SayLater(String),
    /// Close the chat and hand over to the booking screen after the navigation delay.
    NavigateToBooking,
}

/// Routing rules. Evaluated in table order; the first that produces an outcome wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Booking,
    ServiceLookup,
    BarberLookup,
    TodaysHours,
    FaqAnswer,
    GeneralTopic,
    BookingConfirmation,
}

pub const DEFAULT_RULES: [Rule; 7] = [
    Rule::Booking,
    Rule::ServiceLookup,
    Rule::BarberLookup,
    Rule::TodaysHours,
    Rule::FaqAnswer,
    Rule::GeneralTopic,
    Rule::BookingConfirmation,
];

/// Result of classifying one user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub effects: Vec<Effect>,
    /// Context after this turn (`None` = cleared).
    pub context: Option<ContextTag>,
    /// Rule that fired; `None` means the fallback apology.
    pub rule: Option<Rule>,
}

struct Turn<'a> {
    text: String,
    context: Option<ContextTag>,
    store: &'a ReferenceStore,
    now: DateTime<Local>,
}

impl Turn<'_> {
    fn has(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    fn has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.text.contains(n))
    }
}

struct Outcome {
    effects: Vec<Effect>,
    context: Option<ContextTag>,
}

impl Outcome {
    fn say(text: String, context: Option<ContextTag>) -> Self {
        Self {
            effects: vec![Effect::Say(text)],
            context,
        }
    }
}

impl Rule {
    fn apply(self, turn: &Turn<'_>) -> Option<Outcome> {
        let store = turn.store;
        match self {
            Rule::Booking => turn.has_any(BOOKING_WORDS).then(|| Outcome {
                effects: vec![
                    Effect::Say(BOOKING_OFFER.to_string()),
                    Effect::SayLater(BOOKING_PROMPT.to_string()),
                ],
                context: Some(ContextTag::Booking),
            }),
            Rule::ServiceLookup => {
                if !turn.has_any(HAIR_WORDS) && !turn.has_any(PRICE_WORDS) {
                    return None;
                }
                Some(match finders::find_service(store, &turn.text) {
                    Some(text) => Outcome::say(text, Some(ContextTag::Service)),
                    None => Outcome::say(
                        formatters::format_services(store),
                        Some(ContextTag::Services),
                    ),
                })
            }
            Rule::BarberLookup => {
                if !turn.has_any(STAFF_WORDS) {
                    return None;
                }
                let named = store.barbers.iter().find(|b| {
                    let name = b.name.trim().to_lowercase();
                    !name.is_empty() && turn.has(&name)
                });
                Some(match named {
                    Some(barber) => Outcome::say(
                        formatters::format_barber_detail(store, &barber.name),
                        Some(ContextTag::Barber),
                    ),
                    None => Outcome::say(
                        formatters::format_barbers(store),
                        Some(ContextTag::Barbers),
                    ),
                })
            }
            Rule::TodaysHours => {
                if !turn.has("today") || !turn.has_any(TODAY_WORDS) {
                    return None;
                }
                let today = turn.now.weekday().num_days_from_sunday() as u8;
                // No entry for today: let the later rules have a go.
                finders::find_todays_hours(store, today).map(|text| {
                    Outcome::say(format!("{}{}", CLOCK_MARKER, text), Some(ContextTag::Hours))
                })
            }
            Rule::FaqAnswer => faq_scorer::answer(&turn.text, &store.faqs)
                .map(|text| Outcome::say(text, turn.context)),
            Rule::GeneralTopic => {
                let (_, topic) = TOPICS.iter().find(|(words, _)| turn.has_any(words))?;
                let now_utc = turn.now.with_timezone(&Utc);
                Some(match topic {
                    Topic::Services => Outcome::say(
                        formatters::format_services(store),
                        Some(ContextTag::Services),
                    ),
                    Topic::Barbers => Outcome::say(
                        formatters::format_barbers(store),
                        Some(ContextTag::Barbers),
                    ),
                    Topic::Location => Outcome::say(
                        formatters::format_location(store),
                        Some(ContextTag::Location),
                    ),
                    Topic::Hours => {
                        Outcome::say(formatters::format_hours(store), Some(ContextTag::Hours))
                    }
                    Topic::Promotions => Outcome::say(
                        formatters::format_promotions(store, now_utc),
                        Some(ContextTag::Promotions),
                    ),
                })
            }
            Rule::BookingConfirmation => {
                (turn.has(CONFIRM_WORD) && turn.context == Some(ContextTag::Booking)).then(|| {
                    Outcome {
                        effects: vec![
                            Effect::Say(BOOKING_CONFIRMED.to_string()),
                            Effect::NavigateToBooking,
                        ],
                        // Left as booking: a later "yes" confirms again.
                        context: turn.context,
                    }
                })
            }
        }
    }
}

/// Ordered rule table plus fallback.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<Rule>,
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRouter {
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify one user turn. Never fails: unmatched input gets the fallback apology
    /// and clears the context.
    pub fn classify(
        &self,
        input: &str,
        context: Option<ContextTag>,
        store: &ReferenceStore,
        now: DateTime<Local>,
    ) -> Classification {
        let turn = Turn {
            text: input.trim().to_lowercase(),
            context,
            store,
            now,
        };

        for &rule in &self.rules {
            if let Some(outcome) = rule.apply(&turn) {
                debug!(
                    ?rule,
                    context = ?outcome.context,
                    effects = outcome.effects.len(),
                    "rule matched"
                );
                return Classification {
                    effects: outcome.effects,
                    context: outcome.context,
                    rule: Some(rule),
                };
            }
        }

        debug!(previous_context = ?context, "no rule matched; fallback");
        Classification {
            effects: vec![Effect::Say(FALLBACK.to_string())],
            context: None,
            rule: None,
        }
    }
}
