//! Event handling for terminal and application events

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::action::TuiAction;
use crate::app::Focus;

/// Terminal event types
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal key event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for animations
    Tick,
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    /// Event sender
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Tick rate
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            tick_rate,
        }
    }

    /// Start the event loop in a background task
    pub fn start(&self) {
        let sender = self.sender.clone();
        let tick_rate = self.tick_rate;

        tokio::spawn(async move {
            let mut last_tick = std::time::Instant::now();

            loop {
                // Calculate timeout until next tick
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                // Poll for events
                if event::poll(timeout).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if sender.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if sender.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                }

                // Send tick event
                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = std::time::Instant::now();
                }
            }
        });
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

/// Convert a key event to an action, depending on what holds focus
pub fn key_to_action(key: KeyEvent, focus: Focus) -> TuiAction {
    // Global bindings first
    match key.code {
        KeyCode::Esc => return TuiAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return TuiAction::Quit;
        }
        KeyCode::Tab => return TuiAction::FocusNext,
        KeyCode::BackTab => return TuiAction::FocusPrev,
        _ => {}
    }

    if focus.is_field() {
        match key.code {
            // The wiki text is multi-line; Enter elsewhere advances focus.
            KeyCode::Enter if focus == Focus::Wiki => TuiAction::Input('\n'),
            KeyCode::Enter => TuiAction::FocusNext,
            KeyCode::Backspace => TuiAction::Backspace,
            KeyCode::Char(c) => TuiAction::Input(c),
            _ => TuiAction::None,
        }
    } else {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => TuiAction::Activate,
            KeyCode::Char('q') => TuiAction::Quit,
            _ => TuiAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_inserts_newline_only_in_wiki_field() {
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), Focus::Wiki),
            TuiAction::Input('\n')
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), Focus::Username),
            TuiAction::FocusNext
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), Focus::Create),
            TuiAction::Activate
        ));
    }

    #[test]
    fn typed_characters_reach_fields_not_controls() {
        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), Focus::Password),
            TuiAction::Input('q')
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), Focus::Delete),
            TuiAction::Quit
        ));
    }
}
