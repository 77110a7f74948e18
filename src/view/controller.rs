use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::client::ExamBackend;
use crate::view::clipboard::Clipboard;
use crate::view::render::{self, Labels, ResultView};
use crate::view::state::{update, Action, Effect, ExamViewState};
use crate::view::validation::GenerationRequest;

/// Runs the reducer and its effects.
///
/// Network calls and timers run as spawned tasks that report back through a
/// channel; [`ExamView::next`] applies their results. Every task is tied to the
/// view's cancellation token, so nothing reaches the state after teardown.
pub struct ExamView {
    state: ExamViewState,
    backend: Arc<dyn ExamBackend>,
    clipboard: Arc<dyn Clipboard>,
    cancel: CancellationToken,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ExamView {
    pub fn new(backend: Arc<dyn ExamBackend>, clipboard: Arc<dyn Clipboard>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: ExamViewState::default(),
            backend,
            clipboard,
            cancel: CancellationToken::new(),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ExamViewState {
        &self.state
    }

    pub fn result_view(&self) -> ResultView {
        render::render_result(&self.state.result, self.state.show_answers)
    }

    pub fn labels(&self) -> Labels {
        render::labels(&self.state)
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Applies `action` and runs the effects it produces. Clipboard writes are
    /// awaited in place; generation and timers complete later via [`Self::next`].
    pub async fn dispatch(&mut self, action: Action) {
        let mut pending = Some(action);
        while let Some(action) = pending.take() {
            match update(&mut self.state, action) {
                Effect::None => {}
                Effect::Generate(request) => self.spawn_generation(request),
                Effect::Copy(text) => {
                    pending = Some(match self.clipboard.write_text(&text).await {
                        Ok(()) => Action::CopySucceeded,
                        Err(err) => Action::CopyFailed(err),
                    });
                }
                Effect::ExpireCopyFeedback(after) => self.spawn_copy_reset(after),
            }
        }
    }

    /// Waits until a background task (generation or copy-feedback timer) completes
    /// and applies its result, returning `true`. Returns `false` once the view is
    /// torn down. With nothing in flight this keeps waiting until teardown, so
    /// callers that poll it should bound the wait themselves.
    pub async fn next(&mut self) -> bool {
        // The view holds a sender, so `recv` only yields `Some`.
        let action = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return false,
            Some(action) = self.rx.recv() => action,
        };
        self.dispatch(action).await;
        true
    }

    /// Cancels in-flight work. Results that arrive afterwards are dropped.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    fn spawn_generation(&self, request: GenerationRequest) {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!("View torn down, dropping generation");
                    return;
                }
                outcome = backend.generate_exam(&request.topic, request.count) => outcome,
            };
            let action = match outcome {
                Ok(resp) => Action::GenerateSucceeded(resp.questions),
                Err(err) => Action::GenerateFailed(err.to_string()),
            };
            if !cancel.is_cancelled() {
                let _ = tx.send(action);
            }
        });
    }

    fn spawn_copy_reset(&self, after: Duration) {
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(after) => {
                    let _ = tx.send(Action::CopyFeedbackExpired);
                }
            }
        });
    }
}

impl Drop for ExamView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
