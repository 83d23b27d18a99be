//! Per-control state machine types

/// States for one action control.
///
/// A control is disabled while `InFlight`, which is what prevents re-entrant
/// submission of the same action. `Succeeded` and `Failed` are both
/// re-clickable; the 2 s label revert after `Succeeded` is cosmetic and does
/// not gate a new dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Resting,
    InFlight,
    Succeeded,
    Failed,
}
