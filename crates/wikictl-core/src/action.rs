//! The three wiki actions and their labels

use wikictl_api::responses::ResponseShape;

use crate::port::Control;

/// One of the three mutually-independent wiki flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WikiAction {
    Create,
    Update,
    Delete,
}

impl WikiAction {
    pub const ALL: [WikiAction; 3] = [WikiAction::Create, WikiAction::Update, WikiAction::Delete];

    /// Label shown while the control is idle.
    pub fn resting_label(self) -> &'static str {
        match self {
            WikiAction::Create => "Create Wiki",
            WikiAction::Update => "Update Wiki",
            WikiAction::Delete => "Delete Wiki",
        }
    }

    /// Label shown while a request is in flight.
    pub fn busy_label(self) -> &'static str {
        match self {
            WikiAction::Create => "Creating wiki...",
            WikiAction::Update => "Updating wiki...",
            WikiAction::Delete => "Deleting wiki...",
        }
    }

    /// Transient confirmation label shown on success.
    pub fn done_label(self) -> &'static str {
        match self {
            WikiAction::Create => "Created Wiki!",
            WikiAction::Update => "Updated Wiki!",
            WikiAction::Delete => "Deleted Wiki!",
        }
    }

    /// Whether the wiki text field is a required input.
    pub fn requires_content(self) -> bool {
        !matches!(self, WikiAction::Delete)
    }

    /// The control driving this action.
    pub fn control(self) -> Control {
        match self {
            WikiAction::Create => Control::CreateWiki,
            WikiAction::Update => Control::UpdateWiki,
            WikiAction::Delete => Control::DeleteWiki,
        }
    }

    /// Key set the response body must carry for this action.
    pub fn response_shape(self) -> ResponseShape {
        match self {
            WikiAction::Create | WikiAction::Update => ResponseShape::Save,
            WikiAction::Delete => ResponseShape::Delete,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            WikiAction::Create => 0,
            WikiAction::Update => 1,
            WikiAction::Delete => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_does_not_require_content() {
        assert!(WikiAction::Create.requires_content());
        assert!(WikiAction::Update.requires_content());
        assert!(!WikiAction::Delete.requires_content());
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen = [false; 3];
        for action in WikiAction::ALL {
            assert!(!seen[action.index()]);
            seen[action.index()] = true;
        }
    }
}
