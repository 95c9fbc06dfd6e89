//! Terminal side effects: colored chat lines, booking hand-off, notifications.

use crate::ports::{BookingNavigator, Notifier};
use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{Write, stdout};
use tracing::{info, warn};

const BOT_COLOR: Color = Color::Cyan;
const NOTICE_COLOR: Color = Color::Yellow;
const ERROR_COLOR: Color = Color::Red;

/// Print a labelled, colored block. Multi-line text is indented under the label.
pub fn print_block(label: &str, color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(SetAttribute(Attribute::Bold));
    let _ = out.execute(Print(format!("{}: ", label)));
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(SetForegroundColor(color));
    let body = text.replace('\n', "\n    ");
    let _ = out.execute(Print(format!("{}\r\n", body)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

pub fn print_bot(text: &str) {
    print_block("Bot", BOT_COLOR, text);
}

pub fn print_notice(text: &str) {
    print_block("Info", NOTICE_COLOR, text);
}

/// Prints where booking continues. The chat loop ends once the session is hidden.
pub struct TerminalNavigator {
    booking_url: String,
}

impl TerminalNavigator {
    pub fn new(booking_url: impl Into<String>) -> Self {
        Self {
            booking_url: booking_url.into(),
        }
    }
}

impl BookingNavigator for TerminalNavigator {
    fn navigate_to_booking(&self) {
        info!(url = %self.booking_url, "handing over to booking");
        print_notice(&format!("Continue your booking at {}", self.booking_url));
    }
}

/// Logs and prints notifications; never affects control flow.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn report_error(&self, title: &str, description: &str) {
        warn!(title, description, "notification");
        print_block(title, ERROR_COLOR, description);
    }
}
