//! wikictl-core: the wiki action controller state machine
//!
//! Pure control logic for the create/update/delete flows: precondition
//! checks, dispatch decisions, response validation, and the bounded UI
//! transitions (resting -> in-flight -> succeeded/failed -> auto-revert).
//! All UI access goes through the injected [`UiPort`] trait, so the
//! controller carries no I/O and is unit-testable against a fake port.
//!
//! The controller never performs network calls itself: a click yields a
//! [`ClickOutcome`] describing the request to issue (if any), the caller
//! runs it and feeds the result back through [`WikiController::complete`],
//! and timers are armed by the caller when a completion asks for one.

pub mod action;
pub mod controller;
pub mod port;
pub mod state;

pub use action::WikiAction;
pub use controller::{
    COPIED_LABEL, COPY_LABEL, ClickOutcome, Completion, GUIDANCE_MESSAGE, REVERT_DELAY,
    WikiController, WikiRequest,
};
pub use port::{Control, Field, Region, UiPort};
pub use state::ControlState;
