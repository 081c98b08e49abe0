// Confirmation before destructive actions.
//
// A request goes to the presenter; the caller awaits a single boolean.
// Closing the dialog without choosing counts as a refusal.
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::config::ConfirmationLabels;

// Shows confirmation requests to the user.
pub trait ConfirmationPresenter: Send + Sync {
    fn present(&self, request: ConfirmationRequest);
}

// What the presenter needs to draw the dialog, plus the means to answer it.
//
// Answering consumes the request, so it can be answered at most once.
// Dropping it unanswered resolves the pending side to `false`.
#[derive(Debug)]
pub struct ConfirmationRequest {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
    responder: oneshot::Sender<bool>,
}

impl ConfirmationRequest {
    pub fn accept(self) {
        self.respond(true);
    }

    pub fn cancel(self) {
        self.respond(false);
    }

    fn respond(self, confirmed: bool) {
        // The caller may have stopped waiting; nothing left to tell it.
        if self.responder.send(confirmed).is_err() {
            tracing::debug!("Confirmation answered after the caller went away");
        }
    }
}

// Resolves to the user's answer.
#[derive(Debug)]
pub struct PendingConfirmation {
    receiver: oneshot::Receiver<bool>,
}

impl PendingConfirmation {
    // Returns the answer if one is already available, without waiting.
    pub fn try_outcome(&mut self) -> Option<bool> {
        match self.receiver.try_recv() {
            Ok(confirmed) => Some(confirmed),
            Err(oneshot::error::TryRecvError::Closed) => Some(false),
            Err(oneshot::error::TryRecvError::Empty) => None,
        }
    }
}

impl Future for PendingConfirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|outcome| outcome.unwrap_or(false))
    }
}

pub fn request_confirmation(
    message: impl Into<String>,
    labels: &ConfirmationLabels,
) -> (ConfirmationRequest, PendingConfirmation) {
    let (responder, receiver) = oneshot::channel();
    let request = ConfirmationRequest {
        title: labels.title.clone(),
        message: message.into(),
        cancel_label: labels.cancel_label.clone(),
        confirm_label: labels.confirm_label.clone(),
        responder,
    };
    (request, PendingConfirmation { receiver })
}
