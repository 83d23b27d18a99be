//! Application state and logic

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use wikictl_api::responses::ActionResponse;
use wikictl_client::HttpClient;
use wikictl_core::{
    COPY_LABEL, ClickOutcome, Completion, Control, ControlState, Field, REVERT_DELAY, Region,
    UiPort, WikiAction, WikiController, WikiRequest,
};

use crate::action::TuiAction;

/// UI focus state: three input fields and four controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Password,
    Wiki,
    Create,
    Update,
    Delete,
    Copy,
}

impl Focus {
    /// Whether this element accepts text input
    pub fn is_field(self) -> bool {
        matches!(self, Focus::Username | Focus::Password | Focus::Wiki)
    }

    fn ring(copy_visible: bool) -> &'static [Focus] {
        static WITH_COPY: [Focus; 7] = [
            Focus::Username,
            Focus::Password,
            Focus::Wiki,
            Focus::Create,
            Focus::Update,
            Focus::Delete,
            Focus::Copy,
        ];
        if copy_visible {
            &WITH_COPY
        } else {
            &WITH_COPY[..6]
        }
    }
}

/// Activity log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Widget state mirrored from the controller through the UI port.
///
/// The controller is the only writer of labels, enablement, visibility, and
/// the result text; the fields are edited by the user and only read here.
pub struct UiState {
    pub username: String,
    pub password: String,
    pub wiki: String,
    labels: HashMap<Control, String>,
    enabled: HashMap<Control, bool>,
    pub link_visible: bool,
    pub copy_visible: bool,
    pub result: String,
}

impl UiState {
    fn new() -> Self {
        let mut labels = HashMap::new();
        for action in WikiAction::ALL {
            labels.insert(action.control(), action.resting_label().to_string());
        }
        labels.insert(Control::CopyButton, COPY_LABEL.to_string());

        Self {
            username: String::new(),
            password: String::new(),
            wiki: String::new(),
            labels,
            enabled: HashMap::new(),
            link_visible: false,
            copy_visible: false,
            result: String::new(),
        }
    }

    /// Current label of a control
    pub fn label(&self, control: Control) -> &str {
        self.labels.get(&control).map(String::as_str).unwrap_or("")
    }

    /// Whether a control accepts clicks
    pub fn is_enabled(&self, control: Control) -> bool {
        self.enabled.get(&control).copied().unwrap_or(true)
    }
}

impl UiPort for UiState {
    fn field(&self, field: Field) -> String {
        match field {
            Field::Username => self.username.clone(),
            Field::Password => self.password.clone(),
            Field::Wiki => self.wiki.clone(),
        }
    }

    fn set_label(&mut self, control: Control, text: &str) {
        self.labels.insert(control, text.to_string());
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.enabled.insert(control, enabled);
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        match region {
            Region::LinkContainer => self.link_visible = visible,
            Region::CopyButton => self.copy_visible = visible,
        }
    }

    fn set_result(&mut self, text: &str) {
        self.result = text.to_string();
    }
}

/// Application state
pub struct App {
    /// Server URL, for the status bar
    pub server_url: String,
    /// Widget state behind the controller's UI port
    pub ui: UiState,
    /// Current focus
    pub focus: Focus,
    /// The action controller state machine
    controller: WikiController,
    /// HTTP client for the wiki endpoint
    client: HttpClient,
    /// Channel back into the event loop for completions and timers
    actions: mpsc::UnboundedSender<TuiAction>,
    /// Pending revert timer per control, cancel-and-reschedule
    revert_timers: HashMap<Control, JoinHandle<()>>,
    /// System clipboard, absent when unavailable
    clipboard: Option<arboard::Clipboard>,
    /// Activity log
    pub log: VecDeque<LogEntry>,
    /// Tick counter for animations
    pub tick: u64,
    /// Should quit
    should_quit: bool,
}

impl App {
    /// Create a new application
    pub fn new(
        server_url: &str,
        actions: mpsc::UnboundedSender<TuiAction>,
    ) -> color_eyre::Result<Self> {
        let client = HttpClient::new(server_url)?;
        let clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(error) => {
                warn!(%error, "clipboard unavailable");
                None
            }
        };

        Ok(Self {
            server_url: server_url.to_string(),
            ui: UiState::new(),
            focus: Focus::default(),
            controller: WikiController::new(),
            client,
            actions,
            revert_timers: HashMap::new(),
            clipboard,
            log: VecDeque::with_capacity(100),
            tick: 0,
            should_quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// State of an action's control, for rendering
    pub fn action_state(&self, action: WikiAction) -> ControlState {
        self.controller.state(action)
    }

    /// Handle an action
    pub fn handle_action(&mut self, action: TuiAction) {
        match action {
            TuiAction::Quit => {
                self.should_quit = true;
            }
            TuiAction::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            TuiAction::FocusNext => self.cycle_focus(1),
            TuiAction::FocusPrev => self.cycle_focus(-1),
            TuiAction::Input(c) => {
                if let Some(field) = self.focused_field_mut() {
                    field.push(c);
                }
            }
            TuiAction::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.pop();
                }
            }
            TuiAction::Activate => match self.focus {
                Focus::Create => self.submit(WikiAction::Create),
                Focus::Update => self.submit(WikiAction::Update),
                Focus::Delete => self.submit(WikiAction::Delete),
                Focus::Copy => self.copy_result(),
                _ => {}
            },
            TuiAction::Submit(action) => self.submit(action),
            TuiAction::Copy => self.copy_result(),
            TuiAction::Completed(action, result) => self.completed(action, result),
            TuiAction::Revert(control) => {
                self.revert_timers.remove(&control);
                self.controller.revert(&mut self.ui, control);
            }
            TuiAction::Render | TuiAction::None => {}
        }
    }

    /// Submit an action: let the controller decide, then dispatch the
    /// request as a background task reporting back over the action channel.
    fn submit(&mut self, action: WikiAction) {
        match self.controller.click(&mut self.ui, action) {
            ClickOutcome::Busy => {}
            ClickOutcome::Rejected => {
                self.push_log(LogLevel::Warning, "Missing required fields".to_string());
            }
            ClickOutcome::Dispatch(request) => {
                // A dispatch supersedes any revert still pending from a
                // previous success, so the stale timer cannot rewrite the
                // busy label mid-flight.
                if let Some(previous) = self.revert_timers.remove(&action.control()) {
                    previous.abort();
                }
                self.push_log(
                    LogLevel::Info,
                    format!("{} ({action:?})", action.busy_label()),
                );
                let client = self.client.clone();
                let sender = self.actions.clone();
                tokio::spawn(async move {
                    let result = match request {
                        WikiRequest::Create(body) => client.create_wiki(&body).await,
                        WikiRequest::Update(body) => client.update_wiki(&body).await,
                        WikiRequest::Delete(body) => client.delete_wiki(&body).await,
                    };
                    let _ = sender.send(TuiAction::Completed(action, result));
                });
            }
        }
    }

    /// Apply a request completion to the controller and arm the revert timer
    /// when asked to.
    fn completed(
        &mut self,
        action: WikiAction,
        result: Result<serde_json::Value, wikictl_client::ClientError>,
    ) {
        match &result {
            Ok(body) => match ActionResponse::from_value(body, action.response_shape()) {
                ActionResponse::Parsed(outcome) if outcome.success => {
                    self.push_log(LogLevel::Success, action.done_label().to_string());
                }
                ActionResponse::Parsed(outcome) => {
                    self.push_log(
                        LogLevel::Warning,
                        format!(
                            "{action:?} failed: {}",
                            outcome.error.as_deref().unwrap_or_default()
                        ),
                    );
                }
                ActionResponse::Malformed => {
                    self.push_log(LogLevel::Error, format!("{action:?}: malformed response"));
                }
            },
            Err(error) => {
                self.push_log(LogLevel::Error, format!("{action:?} failed: {error}"));
            }
        }

        if let Completion::ScheduleRevert(control) =
            self.controller.complete(&mut self.ui, action, result)
        {
            self.schedule_revert(control);
        }
    }

    /// Copy the result display to the system clipboard
    fn copy_result(&mut self) {
        if !self.ui.copy_visible {
            return;
        }
        let Some(text) = self.controller.copy_clicked(&mut self.ui) else {
            return;
        };
        // The label flip above is optimistic; a clipboard failure is only
        // logged.
        match self.clipboard.as_mut() {
            Some(clipboard) => {
                if let Err(error) = clipboard.set_text(text.clone()) {
                    warn!(%error, "clipboard copy failed");
                    self.push_log(LogLevel::Warning, format!("Copy failed: {error}"));
                } else {
                    self.push_log(LogLevel::Info, format!("Copied {text}"));
                }
            }
            None => {
                self.push_log(LogLevel::Warning, "Clipboard unavailable".to_string());
            }
        }
        self.schedule_revert(Control::CopyButton);
    }

    /// Arm (or re-arm) the one-shot label revert timer for a control
    fn schedule_revert(&mut self, control: Control) {
        // Cancel-and-reschedule so repeated triggers inside the revert
        // window cannot race.
        if let Some(previous) = self.revert_timers.remove(&control) {
            previous.abort();
        }
        let sender = self.actions.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(REVERT_DELAY).await;
            let _ = sender.send(TuiAction::Revert(control));
        });
        self.revert_timers.insert(control, handle);
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Username => Some(&mut self.ui.username),
            Focus::Password => Some(&mut self.ui.password),
            Focus::Wiki => Some(&mut self.ui.wiki),
            _ => None,
        }
    }

    fn cycle_focus(&mut self, direction: isize) {
        let ring = Focus::ring(self.ui.copy_visible);
        let position = ring
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        let len = ring.len() as isize;
        let next = (position as isize + direction).rem_euclid(len) as usize;
        self.focus = ring[next];
    }

    /// Append an activity log entry
    fn push_log(&mut self, level: LogLevel, message: String) {
        let entry = LogEntry {
            timestamp: Utc::now(),
            message,
            level,
        };
        self.log.push_front(entry);
        if self.log.len() > 100 {
            self.log.pop_back();
        }
    }
}
