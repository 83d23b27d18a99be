//! User actions for the TUI application

use serde_json::Value;
use wikictl_client::ClientError;
use wikictl_core::{Control, WikiAction};

/// Actions that can be performed in the application
#[derive(Debug)]
#[allow(dead_code)]
pub enum TuiAction {
    /// Quit the application
    Quit,
    /// Tick event for animations/timers
    Tick,
    /// Render the UI
    Render,
    /// Move focus to the next element
    FocusNext,
    /// Move focus to the previous element
    FocusPrev,
    /// Type a character into the focused field
    Input(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Activate the focused control
    Activate,
    /// Submit a wiki action
    Submit(WikiAction),
    /// Copy the result display to the clipboard
    Copy,
    /// A dispatched request completed
    Completed(WikiAction, Result<Value, ClientError>),
    /// A revert timer fired for a control
    Revert(Control),
    /// No operation
    None,
}
