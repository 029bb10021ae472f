use crate::form::ApplicationForm;
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;

/// Misuse of the modal controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("use_modal must be used within a ModalProvider")]
    MissingProvider,
    #[error("the form modal is already open; await its result before opening it again")]
    AlreadyOpen,
}

/// Outcome of one open/close cycle: the submitted form, or `None` when cancelled
pub type ModalResult = Option<ApplicationForm>;

/// Resolves once the dialog is submitted or dismissed.
///
/// If the session is torn down while the request is still pending, the
/// sender is dropped and this resolves to `None` instead of hanging.
#[derive(Debug)]
#[must_use = "the form result is only delivered through this future"]
pub struct PendingForm {
    receiver: oneshot::Receiver<ModalResult>,
}

impl Future for PendingForm {
    type Output = ModalResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.unwrap_or(None))
    }
}

/// Controller state for the form modal.
///
/// Generic over the trigger handle so the bookkeeping can be exercised
/// without a DOM; the frontend instantiates it with `HtmlElement`.
///
/// A second `open` while a request is pending is rejected with
/// [`ModalError::AlreadyOpen`]; the first caller keeps its pending result.
#[derive(Debug)]
pub struct ModalSession<T> {
    is_open: bool,
    pending: Option<oneshot::Sender<ModalResult>>,
    trigger: Option<T>,
    generation: u64,
}

impl<T> Default for ModalSession<T> {
    fn default() -> Self {
        Self {
            is_open: false,
            pending: None,
            trigger: None,
            generation: 0,
        }
    }
}

impl<T> ModalSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of accepted open requests so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new cycle, remembering `trigger` for focus restoration
    pub fn open(&mut self, trigger: Option<T>) -> Result<PendingForm, ModalError> {
        if self.pending.is_some() {
            tracing::warn!(generation = self.generation, "rejected open request while one is pending");
            return Err(ModalError::AlreadyOpen);
        }

        let (sender, receiver) = oneshot::channel();
        self.pending = Some(sender);
        self.trigger = trigger;
        self.is_open = true;
        self.generation += 1;

        tracing::debug!(generation = self.generation, "form modal opened");
        Ok(PendingForm { receiver })
    }

    /// End the current cycle.
    ///
    /// Fulfills the pending request with `result` (at most once) and hands
    /// back the trigger so the caller can move focus to it. Safe to call
    /// when nothing is pending.
    pub fn close(&mut self, result: ModalResult) -> Option<T> {
        self.is_open = false;

        match self.pending.take() {
            Some(sender) => {
                let submitted = result.is_some();
                if sender.send(result).is_err() {
                    tracing::debug!(generation = self.generation, "result receiver was dropped");
                } else {
                    tracing::debug!(generation = self.generation, submitted, "form modal closed");
                }
            }
            None => {
                tracing::trace!(generation = self.generation, "close with nothing pending");
            }
        }

        self.trigger.take()
    }
}

/// Visual lifecycle of the dialog view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// Mounted, entry transition not yet started
    Mounting,
    /// Transition classes applied
    Visible,
    Closing,
}

impl DialogPhase {
    /// Advance once the entry delay has elapsed
    pub fn entered(self) -> DialogPhase {
        match self {
            DialogPhase::Mounting => DialogPhase::Visible,
            phase => phase,
        }
    }

    /// A submit or dismissal has been reported; further ones are ignored
    pub fn closing(self) -> DialogPhase {
        DialogPhase::Closing
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, DialogPhase::Visible)
    }

    /// Whether the view may still report an outcome
    pub fn accepts_outcome(&self) -> bool {
        matches!(self, DialogPhase::Mounting | DialogPhase::Visible)
    }
}
