//! Application state and core logic

use crate::config::AppConfig;
use crate::controller::{FormController, FormEvent, SubmitRequest};
use crate::gateway::{SimulatedGateway, SubmissionGateway, SubmissionOutcome, TransportError};
use crate::state::{AppState, FieldName, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Main application struct
pub struct App {
    /// UI state (focus, dialogs, status line)
    pub state: AppState,
    /// The contact form state machine
    pub form: FormController,
    /// Where submissions are sent
    gateway: Arc<dyn SubmissionGateway>,
    /// Receiver for the outcome of the in-flight submission
    in_flight: Option<oneshot::Receiver<SubmissionOutcome>>,
    /// Whether the app should quit
    quit: bool,
    /// Quit was requested while a submission was in flight
    quit_pending: bool,
}

impl App {
    /// Create the app with the simulated gateway described by `config`
    pub fn new(config: &AppConfig) -> Self {
        let gateway = SimulatedGateway::new(config.gateway_config());
        Self::with_gateway(Arc::new(gateway), config.success_message())
    }

    /// Create the app around an arbitrary gateway
    pub fn with_gateway(gateway: Arc<dyn SubmissionGateway>, success_message: &str) -> Self {
        Self {
            state: AppState::default(),
            form: FormController::with_success_message(success_message),
            gateway,
            in_flight: None,
            quit: false,
            quit_pending: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }

    /// Ask to leave. An in-flight submission is always allowed to land first.
    pub fn request_quit(&mut self) {
        if self.is_submitting() {
            self.quit_pending = true;
            self.state.status_message = Some("Quitting once the message is sent...".to_string());
        } else {
            self.quit = true;
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.request_quit();
            return;
        }

        // Dialogs are modal
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return;
        }

        self.state.status_message = None;

        match key.code {
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => self.reset(),
            KeyCode::Esc => self.request_quit(),
            KeyCode::Enter => match self.state.focus {
                Focus::SendButton => self.submit(),
                Focus::Field(field) if field.is_multiline() => self.append_char(field, '\n'),
                Focus::Field(_) => self.state.next_focus(),
            },
            KeyCode::Char(c) => {
                if let Some(field) = self.state.focused_field() {
                    self.append_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.focused_field() {
                    let mut value = self.form.state().values.get(field).to_string();
                    value.pop();
                    self.form.change_field(field, value);
                }
            }
            _ => {}
        }
    }

    fn append_char(&mut self, field: FieldName, c: char) {
        let mut value = self.form.state().values.get(field).to_string();
        value.push(c);
        self.form.change_field(field, value);
    }

    /// Clear the form back to its initial values
    fn reset(&mut self) {
        if self.form.reset() {
            self.drain_form_events();
            self.state.status_message = Some("Form cleared".to_string());
        } else {
            self.state.status_message = Some("Can't clear while sending...".to_string());
        }
    }

    /// Start a submission, running the gateway call on a background task
    fn submit(&mut self) {
        match self.form.request_submit() {
            SubmitRequest::Ignored => {
                self.state.status_message = Some("Already sending...".to_string());
            }
            SubmitRequest::Invalid(errors) => {
                if let Some(first) = errors.keys().next() {
                    self.state.focus = Focus::Field(*first);
                }
            }
            SubmitRequest::Dispatch(data) => {
                let (tx, rx) = oneshot::channel();
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    let outcome = gateway.submit(data).await;
                    if tx.send(outcome).is_err() {
                        tracing::debug!("Submission outcome dropped, receiver gone");
                    }
                });
                self.in_flight = Some(rx);
            }
        }
    }

    /// Check whether the in-flight submission has finished and apply it.
    /// Called once per event loop tick.
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.in_flight.as_mut() else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => {
                TransportError::Disconnected("submission task ended unexpectedly".to_string())
                    .into()
            }
        };
        self.in_flight = None;
        self.apply_outcome(outcome);

        if self.quit_pending {
            self.quit = true;
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        let rejected_field = match &outcome {
            SubmissionOutcome::Rejected(errors) => errors.keys().next().copied(),
            _ => None,
        };

        self.form.complete_submit(outcome);

        if let Some(field) = rejected_field {
            self.state.focus = Focus::Field(field);
        }
        if let Some(err) = self.form.state().form_error.clone() {
            self.state.push_error(err);
        }

        self.drain_form_events();
    }

    fn drain_form_events(&mut self) {
        for event in self.form.take_events() {
            match event {
                FormEvent::Submitted { message, receipt } => {
                    self.state.status_message = Some(format!("Receipt {}", receipt.id));
                    self.state.push_success(message);
                }
                FormEvent::Reset => self.state.focus = Focus::default(),
            }
        }
    }
}
