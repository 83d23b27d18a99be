//! The wiki action controller
//!
//! Orchestrates the three action flows against an injected [`UiPort`]. Each
//! flow follows the same shape: enter in-flight, check preconditions, hand a
//! request to the caller, validate the completion, and land in a terminal
//! label state. The caller owns the event loop, the HTTP dispatch, and the
//! revert timers; the controller decides every transition.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use wikictl_api::requests::{DeleteWikiRequest, SaveWikiRequest};
use wikictl_api::responses::{ActionResponse, public_wiki_url};
use wikictl_client::ClientError;

use crate::action::WikiAction;
use crate::port::{Control, Field, Region, UiPort};
use crate::state::ControlState;

/// Delay before a transient success label reverts to the resting text.
pub const REVERT_DELAY: Duration = Duration::from_millis(2000);

/// Shown when a required input field is empty. No request is issued.
pub const GUIDANCE_MESSAGE: &str =
    "Please make sure to have filled out the username, the password and the wiki text fields";

/// Resting label of the copy affordance.
pub const COPY_LABEL: &str = "Copy";

/// Transient label after a copy.
pub const COPIED_LABEL: &str = "Copied!";

/// Request the caller must issue, exactly once, for a dispatched click.
#[derive(Debug, Clone)]
pub enum WikiRequest {
    /// `POST /wikis`
    Create(SaveWikiRequest),
    /// `PATCH /wikis`
    Update(SaveWikiRequest),
    /// `DELETE /wikis`
    Delete(DeleteWikiRequest),
}

/// What a click turned into.
#[derive(Debug)]
pub enum ClickOutcome {
    /// The control is already in flight; the click is dropped.
    Busy,
    /// A required field was empty. The guidance message is already on the
    /// result display and no request may be issued.
    Rejected,
    /// Preconditions passed; the caller must issue this request and report
    /// back through [`WikiController::complete`].
    Dispatch(WikiRequest),
}

/// What the caller must do after a completion was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Terminal state reached (or deliberately not reached); nothing to arm.
    Settled,
    /// Success: arm (or re-arm) the revert timer for this control, firing
    /// [`WikiController::revert`] after [`REVERT_DELAY`].
    ScheduleRevert(Control),
}

/// State machine for the three wiki action controls plus the copy affordance.
#[derive(Debug, Default)]
pub struct WikiController {
    states: [ControlState; 3],
    pending_user: [Option<String>; 3],
    /// Mirror of the result display text; the controller is its only writer.
    result_text: Option<String>,
}

impl WikiController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of an action's control.
    pub fn state(&self, action: WikiAction) -> ControlState {
        self.states[action.index()]
    }

    /// Text currently on the result display, if it was ever populated.
    pub fn result_text(&self) -> Option<&str> {
        self.result_text.as_deref()
    }

    /// Handle a click on an action control.
    ///
    /// Enters the in-flight state, checks preconditions, and either rejects
    /// locally or hands back the request to issue. Each accepted click is an
    /// independent cycle; identical consecutive clicks are deliberately not
    /// deduplicated.
    pub fn click(&mut self, port: &mut impl UiPort, action: WikiAction) -> ClickOutcome {
        let control = action.control();
        if self.state(action) == ControlState::InFlight {
            return ClickOutcome::Busy;
        }

        // In-flight label and disablement come before validation, matching
        // the transition order in the state machine: the resting label is
        // restored on local rejection.
        port.set_label(control, action.busy_label());
        port.set_enabled(control, false);
        self.states[action.index()] = ControlState::InFlight;

        let username = port.field(Field::Username);
        let password = port.field(Field::Password);

        let request = match action {
            WikiAction::Create | WikiAction::Update => {
                let content = port.field(Field::Wiki);
                if username.is_empty() || password.is_empty() || content.is_empty() {
                    self.fail_local(port, action);
                    return ClickOutcome::Rejected;
                }
                let body = SaveWikiRequest {
                    username: username.clone(),
                    content,
                    password,
                };
                if action == WikiAction::Create {
                    WikiRequest::Create(body)
                } else {
                    WikiRequest::Update(body)
                }
            }
            WikiAction::Delete => {
                if username.is_empty() || password.is_empty() {
                    self.fail_local(port, action);
                    return ClickOutcome::Rejected;
                }
                WikiRequest::Delete(DeleteWikiRequest {
                    username: username.clone(),
                    password,
                })
            }
        };

        debug!(?action, user = %username, "dispatching request");
        self.pending_user[action.index()] = Some(username);
        ClickOutcome::Dispatch(request)
    }

    /// Apply the result of a dispatched request.
    ///
    /// A transport failure or a malformed body deliberately reaches no
    /// terminal label state: the in-flight text stays put and only the
    /// control's guard is cleared, so a further click can recover.
    pub fn complete(
        &mut self,
        port: &mut impl UiPort,
        action: WikiAction,
        outcome: Result<Value, ClientError>,
    ) -> Completion {
        let control = action.control();
        let username = self.pending_user[action.index()].take().unwrap_or_default();

        let body = match outcome {
            Ok(body) => body,
            Err(error) => {
                warn!(?action, %error, "transport failure, leaving control on in-flight label");
                self.clear_guard(port, action);
                return Completion::Settled;
            }
        };

        let ActionResponse::Parsed(parsed) =
            ActionResponse::from_value(&body, action.response_shape())
        else {
            warn!(?action, "malformed response body, leaving control on in-flight label");
            self.clear_guard(port, action);
            return Completion::Settled;
        };

        if parsed.success {
            self.states[action.index()] = ControlState::Succeeded;
            port.set_label(control, action.done_label());
            port.set_enabled(control, true);
            if action.requires_content() {
                // The endpoint's url field is ignored; the public URL is
                // constructed from the identity that was submitted.
                let url = public_wiki_url(&username);
                self.show_result(port, &url);
                port.set_visible(Region::CopyButton, true);
            }
            // Delete leaves the result display untouched.
            Completion::ScheduleRevert(control)
        } else {
            self.states[action.index()] = ControlState::Failed;
            port.set_label(control, action.resting_label());
            port.set_enabled(control, true);
            let message = format!(
                "An error occurred: {}",
                parsed.error.as_deref().unwrap_or_default()
            );
            self.show_result(port, &message);
            port.set_visible(Region::CopyButton, false);
            Completion::Settled
        }
    }

    /// Revert a control's label to its resting text. Fired by the caller's
    /// timer [`REVERT_DELAY`] after a success, or after a copy.
    pub fn revert(&mut self, port: &mut impl UiPort, control: Control) {
        match control {
            Control::CreateWiki => self.revert_action(port, WikiAction::Create),
            Control::UpdateWiki => self.revert_action(port, WikiAction::Update),
            Control::DeleteWiki => self.revert_action(port, WikiAction::Delete),
            Control::CopyButton => port.set_label(control, COPY_LABEL),
        }
    }

    /// Handle a click on the copy affordance.
    ///
    /// Returns the text to place on the clipboard; the label flip is
    /// optimistic and happens regardless of whether the copy succeeds. The
    /// caller arms the same revert timer as for action controls.
    pub fn copy_clicked(&mut self, port: &mut impl UiPort) -> Option<String> {
        let text = self.result_text.clone()?;
        port.set_label(Control::CopyButton, COPIED_LABEL);
        Some(text)
    }

    fn revert_action(&mut self, port: &mut impl UiPort, action: WikiAction) {
        // Only the label is restored; a late timer firing after a newer
        // transition is harmless since every path lands on this same text.
        port.set_label(action.control(), action.resting_label());
        if self.state(action) == ControlState::Succeeded {
            self.states[action.index()] = ControlState::Resting;
        }
    }

    /// Local validation failure: resting label, guidance message, no timer.
    fn fail_local(&mut self, port: &mut impl UiPort, action: WikiAction) {
        let control = action.control();
        self.states[action.index()] = ControlState::Failed;
        port.set_label(control, action.resting_label());
        port.set_enabled(control, true);
        self.show_result(port, GUIDANCE_MESSAGE);
        port.set_visible(Region::CopyButton, false);
    }

    /// Transport or shape failure: no label transition, guard cleared.
    fn clear_guard(&mut self, port: &mut impl UiPort, action: WikiAction) {
        self.states[action.index()] = ControlState::Failed;
        port.set_enabled(action.control(), true);
    }

    fn show_result(&mut self, port: &mut impl UiPort, text: &str) {
        port.set_result(text);
        port.set_visible(Region::LinkContainer, true);
        self.result_text = Some(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full flow coverage lives in tests/controller_flow.rs; these only pin
    // the constants the UI contract depends on.

    #[test]
    fn revert_delay_is_two_seconds() {
        assert_eq!(REVERT_DELAY, Duration::from_millis(2000));
    }

    #[test]
    fn guidance_message_is_verbatim() {
        assert_eq!(
            GUIDANCE_MESSAGE,
            "Please make sure to have filled out the username, the password and the wiki text fields"
        );
    }
}
