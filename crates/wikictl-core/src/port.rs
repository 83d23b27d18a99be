//! UI port: the controller's only window onto the interface
//!
//! The controller exclusively owns reading the input fields and writing
//! control labels, enablement, visibility, and the result display. Any
//! front-end (the TUI, or a fake in tests) implements this trait.

/// Input fields the controller reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Wiki,
}

/// Clickable controls whose label and enablement the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    CreateWiki,
    UpdateWiki,
    DeleteWiki,
    CopyButton,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::CreateWiki,
        Control::UpdateWiki,
        Control::DeleteWiki,
        Control::CopyButton,
    ];
}

/// Regions whose visibility the controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The result display container.
    LinkContainer,
    /// The copy affordance inside it.
    CopyButton,
}

/// Injected UI surface.
pub trait UiPort {
    /// Read the raw value of an input field. No sanitization beyond what the
    /// controller's own emptiness checks apply.
    fn field(&self, field: Field) -> String;

    /// Set a control's visible label.
    fn set_label(&mut self, control: Control, text: &str);

    /// Enable or disable a control.
    fn set_enabled(&mut self, control: Control, enabled: bool);

    /// Show or hide a region.
    fn set_visible(&mut self, region: Region, visible: bool);

    /// Overwrite the shared result display text.
    fn set_result(&mut self, text: &str);
}
