//! Implements InputPort. Inquire-based chat prompt loop.

use crate::adapters::ui::console::{print_bot, print_notice};
use crate::adapters::ui::progress::spinner;
use crate::domain::{DomainError, Sender};
use crate::ports::InputPort;
use crate::usecases::{DialogueSession, Submission};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::Text;
use std::sync::Arc;

pub const GREETING: &str = "Hi! 👋 I'm the shop assistant. Ask me about our services, prices, barbers, hours, location or promotions, or say \"book\" to make an appointment.";

const HELP: &str = "Commands: /book opens the booking page, /help shows this message, /quit leaves the chat.";

/// Chat command typed at the prompt instead of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Book,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "/book" => Some(Command::Book),
        "/help" | "/?" => Some(Command::Help),
        "/quit" | "/exit" | "/q" => Some(Command::Quit),
        _ => None,
    }
}

/// Prompt styling shared by every inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("💈").with_fg(Color::LightRed))
        .with_answered_prompt_prefix(Styled::new("You").with_fg(Color::LightBlue));
    inquire::set_global_render_config(config);
}

/// TUI adapter. Inquire prompts over a DialogueSession.
pub struct TuiChat {
    session: Arc<DialogueSession>,
}

impl TuiChat {
    pub fn new(session: Arc<DialogueSession>) -> Self {
        Self { session }
    }

    /// Print bot messages appended since `seen`; returns the new transcript length.
    async fn print_new_replies(&self, seen: usize) -> usize {
        let transcript = self.session.transcript().await;
        for msg in transcript.iter().skip(seen) {
            if msg.sender == Sender::Bot {
                print_bot(&msg.text);
            }
        }
        transcript.len()
    }
}

#[async_trait]
impl InputPort for TuiChat {
    async fn run(&self) -> Result<(), DomainError> {
        self.session.show().await;
        print_bot(GREETING);
        print_notice(HELP);
        let mut seen = self.session.transcript().await.len();

        while self.session.is_open().await {
            let line = match Text::new("").with_placeholder("Type a message").prompt() {
                Ok(line) => line,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };

            match parse_command(&line) {
                Some(Command::Quit) => break,
                Some(Command::Help) => {
                    print_notice(HELP);
                    continue;
                }
                Some(Command::Book) => {
                    self.session.book_now().await;
                    break;
                }
                None => {}
            }

            self.session.set_draft(&line).await;
            match self.session.submit(&line).await {
                Submission::Accepted(pending) => {
                    let pb = spinner("typing...");
                    pending.settled().await;
                    pb.finish_and_clear();
                }
                Submission::Ignored => continue,
                Submission::Busy => print_notice("Still answering your last message..."),
                Submission::NotReady => print_notice("Still loading shop data, one moment."),
                Submission::Closed => break,
            }
            seen = self.print_new_replies(seen).await;
        }

        self.session.hide().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(" /BOOK "), Some(Command::Book));
        assert_eq!(parse_command("/help"), Some(Command::Help));
        assert_eq!(parse_command("/q"), Some(Command::Quit));
        assert_eq!(parse_command("book a cut"), None);
    }
}
