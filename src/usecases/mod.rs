//! Application use cases. Orchestrate domain logic via ports.

pub mod dialogue_session;
pub mod faq_scorer;
pub mod finders;
pub mod formatters;
pub mod intent_router;
pub mod reference_store;

pub use dialogue_session::{DialogueSession, PendingReply, SessionTiming, Submission};
pub use intent_router::{Classification, Effect, IntentRouter, Rule};
pub use reference_store::{LoadReport, load_store};
