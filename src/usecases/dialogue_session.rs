//! Dialogue session: one request/response cycle per submission.
//!
//! - Appends the user message at once, then replies after a typing delay
//! - Rejects a second submission while a reply is being composed
//! - Every delayed step races the session's cancellation token, so nothing is
//!   appended after `shutdown()` or drop

use crate::domain::{ChatMessage, ContextTag, ReferenceStore};
use crate::ports::{BookingNavigator, DataProvider, Notifier};
use crate::shared::config::AppConfig;
use crate::usecases::intent_router::{Effect, IntentRouter};
use crate::usecases::reference_store::{LoadReport, load_store};
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Artificial pauses that pace the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    /// Before the first reply of a turn.
    pub typing: Duration,
    /// Before a staged second message.
    pub follow_up: Duration,
    /// Between a booking confirmation and navigation.
    pub navigate: Duration,
}

impl SessionTiming {
    pub fn immediate() -> Self {
        Self {
            typing: Duration::ZERO,
            follow_up: Duration::ZERO,
            navigate: Duration::ZERO,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            typing: cfg.typing_delay(),
            follow_up: cfg.follow_up_delay(),
            navigate: cfg.navigate_delay(),
        }
    }
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[derive(Debug, Default)]
struct SessionState {
    store: Arc<ReferenceStore>,
    transcript: Vec<ChatMessage>,
    context: Option<ContextTag>,
    draft: String,
    composing: bool,
    open: bool,
    ready: bool,
}

/// Outcome of [`DialogueSession::submit`].
#[derive(Debug)]
pub enum Submission {
    /// User message recorded; the reply is on its way.
    Accepted(PendingReply),
    /// Blank input. Nothing recorded.
    Ignored,
    /// A reply is still being composed.
    Busy,
    /// Reference data has not finished loading.
    NotReady,
    /// The session was shut down.
    Closed,
}

/// Handle on a reply in flight.
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<()>,
}

impl PendingReply {
    /// Wait until the turn, including staged messages and navigation, has finished or was cancelled.
    pub async fn settled(self) {
        if let Err(e) = self.handle.await {
            warn!(error = %e, "reply task failed");
        }
    }
}

pub struct DialogueSession {
    state: Arc<RwLock<SessionState>>,
    router: Arc<IntentRouter>,
    navigator: Arc<dyn BookingNavigator>,
    timing: SessionTiming,
    cancel: CancellationToken,
}

impl DialogueSession {
    /// New, closed and not yet ready session. Call [`Self::load_reference_data`] next.
    pub fn new(navigator: Arc<dyn BookingNavigator>, timing: SessionTiming) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            router: Arc::new(IntentRouter::new()),
            navigator,
            timing,
            cancel: CancellationToken::new(),
        }
    }

    /// Load the reference snapshot and mark the session ready.
    /// Missing collections are reported through `notifier` but never block the chat.
    pub async fn load_reference_data(
        &self,
        provider: &dyn DataProvider,
        notifier: &dyn Notifier,
    ) -> LoadReport {
        let (store, report) = load_store(provider).await;
        if !report.is_complete() {
            notifier.report_error("Data unavailable", &report.summary());
        }
        let mut state = self.state.write().await;
        state.store = Arc::new(store);
        state.ready = true;
        info!(complete = report.is_complete(), "reference data ready");
        report
    }

    /// Submit user text. See [`Submission`] for the rejection cases.
    pub async fn submit(&self, text: &str) -> Submission {
        let text = text.trim();
        if text.is_empty() {
            return Submission::Ignored;
        }
        if self.cancel.is_cancelled() {
            return Submission::Closed;
        }

        let mut state = self.state.write().await;
        if !state.ready {
            return Submission::NotReady;
        }
        if state.composing {
            warn!("submission rejected: reply still being composed");
            return Submission::Busy;
        }

        state.transcript.push(ChatMessage::user(text));
        state.draft.clear();
        state.composing = true;

        let task = TurnTask {
            state: Arc::clone(&self.state),
            router: Arc::clone(&self.router),
            navigator: Arc::clone(&self.navigator),
            timing: self.timing,
            cancel: self.cancel.clone(),
            store: Arc::clone(&state.store),
            context: state.context,
            input: text.to_string(),
        };
        drop(state);

        debug!(len = text.len(), "user message accepted");
        Submission::Accepted(PendingReply {
            handle: tokio::spawn(task.run()),
        })
    }

    /// Direct "take me to booking" action: close the chat and hand over.
    pub async fn book_now(&self) {
        self.state.write().await.open = false;
        self.navigator.navigate_to_booking();
    }

    /// Cancel every pending reply. Safe to call repeatedly.
    pub fn shutdown(&self) {
        if !self.cancel.is_cancelled() {
            info!("dialogue session shutting down");
        }
        self.cancel.cancel();
    }

    pub async fn show(&self) {
        self.state.write().await.open = true;
    }

    pub async fn hide(&self) {
        self.state.write().await.open = false;
    }

    pub async fn set_draft(&self, text: &str) {
        self.state.write().await.draft = text.to_string();
    }

    pub async fn draft(&self) -> String {
        self.state.read().await.draft.clone()
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.state.read().await.transcript.clone()
    }

    pub async fn context(&self) -> Option<ContextTag> {
        self.state.read().await.context
    }

    pub async fn is_composing(&self) -> bool {
        self.state.read().await.composing
    }

    pub async fn is_open(&self) -> bool {
        self.state.read().await.open
    }

    pub async fn is_ready(&self) -> bool {
        self.state.read().await.ready
    }
}

impl Drop for DialogueSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Everything one spawned turn needs, detached from the session borrow.
struct TurnTask {
    state: Arc<RwLock<SessionState>>,
    router: Arc<IntentRouter>,
    navigator: Arc<dyn BookingNavigator>,
    timing: SessionTiming,
    cancel: CancellationToken,
    store: Arc<ReferenceStore>,
    context: Option<ContextTag>,
    input: String,
}

impl TurnTask {
    /// Play the turn, then release the composing guard. The guard stays up
    /// through staged messages and navigation so turns never interleave.
    async fn run(self) {
        self.play().await;
        self.state.write().await.composing = false;
    }

    async fn play(&self) {
        if !self.pause(self.timing.typing).await {
            debug!("reply cancelled while typing");
            return;
        }

        let classification =
            self.router.classify(&self.input, self.context, &self.store, Local::now());

        let mut staged = Vec::new();
        {
            let mut state = self.state.write().await;
            if self.cancel.is_cancelled() {
                return;
            }
            state.context = classification.context;
            for effect in classification.effects {
                match effect {
                    Effect::Say(text) => state.transcript.push(ChatMessage::bot(text)),
                    other => staged.push(other),
                }
            }
        }

        for effect in staged {
            match effect {
                Effect::Say(text) | Effect::SayLater(text) => {
                    if !self.pause(self.timing.follow_up).await {
                        debug!("staged message cancelled");
                        return;
                    }
                    let mut state = self.state.write().await;
                    if self.cancel.is_cancelled() {
                        return;
                    }
                    state.transcript.push(ChatMessage::bot(text));
                }
                Effect::NavigateToBooking => {
                    if !self.pause(self.timing.navigate).await {
                        debug!("navigation cancelled");
                        return;
                    }
                    {
                        let mut state = self.state.write().await;
                        if self.cancel.is_cancelled() {
                            return;
                        }
                        state.open = false;
                    }
                    info!("navigating to booking");
                    self.navigator.navigate_to_booking();
                }
            }
        }
    }

    /// Sleep for `delay` unless cancelled first. Returns false on cancellation.
    async fn pause(&self, delay: Duration) -> bool {
        tokio::select! {
            _ = self.cancel.cancelled() => false,
            _ = tokio::time::sleep(delay) => !self.cancel.is_cancelled(),
        }
    }
}
