//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: a chat surface that feeds user text into the dialogue session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive chat until the user leaves or the chat is closed by navigation.
    async fn run(&self) -> Result<(), DomainError>;
}
