use std::collections::HashMap;

use serde_json::json;

use wikictl_client::ClientError;
use wikictl_core::{
    ClickOutcome, Completion, Control, ControlState, Field, GUIDANCE_MESSAGE, Region, UiPort,
    WikiAction, WikiController, WikiRequest,
};

// Fake UI port recording every mutation the controller performs.
#[derive(Default)]
struct FakePort {
    username: String,
    password: String,
    wiki: String,
    labels: HashMap<Control, String>,
    enabled: HashMap<Control, bool>,
    link_visible: bool,
    copy_visible: bool,
    result: Option<String>,
    result_writes: usize,
}

impl FakePort {
    fn filled() -> Self {
        Self {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
            wiki: "# My wiki".to_string(),
            ..Self::default()
        }
    }

    fn label(&self, control: Control) -> &str {
        self.labels.get(&control).map(String::as_str).unwrap_or("")
    }

    fn is_enabled(&self, control: Control) -> bool {
        self.enabled.get(&control).copied().unwrap_or(true)
    }
}

impl UiPort for FakePort {
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
        self.result = Some(text.to_string());
        self.result_writes += 1;
    }
}

fn dispatch(
    controller: &mut WikiController,
    port: &mut FakePort,
    action: WikiAction,
) -> WikiRequest {
    match controller.click(port, action) {
        ClickOutcome::Dispatch(request) => request,
        other => panic!("expected dispatch, got {other:?}"),
    }
}

#[test]
fn empty_required_fields_reject_without_dispatch() {
    for action in WikiAction::ALL {
        // Username missing for every action.
        let mut port = FakePort::filled();
        port.username.clear();
        let mut controller = WikiController::new();

        let outcome = controller.click(&mut port, action);
        assert!(matches!(outcome, ClickOutcome::Rejected));
        assert_eq!(port.result.as_deref(), Some(GUIDANCE_MESSAGE));
        assert!(port.link_visible);
        assert!(!port.copy_visible);
        assert_eq!(port.label(action.control()), action.resting_label());
        assert!(port.is_enabled(action.control()));
        assert_eq!(controller.state(action), ControlState::Failed);
    }

    // Empty wiki text blocks create/update but not delete.
    for action in [WikiAction::Create, WikiAction::Update] {
        let mut port = FakePort::filled();
        port.wiki.clear();
        let mut controller = WikiController::new();
        assert!(matches!(
            controller.click(&mut port, action),
            ClickOutcome::Rejected
        ));
    }
    let mut port = FakePort::filled();
    port.wiki.clear();
    let mut controller = WikiController::new();
    assert!(matches!(
        controller.click(&mut port, WikiAction::Delete),
        ClickOutcome::Dispatch(WikiRequest::Delete(_))
    ));
}

#[test]
fn create_success_reaches_succeeded_and_reverts() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    let request = dispatch(&mut controller, &mut port, WikiAction::Create);
    let WikiRequest::Create(body) = request else {
        panic!("create click must yield a create request");
    };
    assert_eq!(body.username, "alice");
    assert_eq!(body.content, "# My wiki");
    assert_eq!(body.password, "hunter2");

    // In flight: busy label, control disabled.
    assert_eq!(port.label(Control::CreateWiki), "Creating wiki...");
    assert!(!port.is_enabled(Control::CreateWiki));
    assert_eq!(controller.state(WikiAction::Create), ControlState::InFlight);

    let response = json!({ "success": true, "error": null, "url": "/wikis/alice" });
    let completion = controller.complete(&mut port, WikiAction::Create, Ok(response));

    assert_eq!(completion, Completion::ScheduleRevert(Control::CreateWiki));
    assert_eq!(port.label(Control::CreateWiki), "Created Wiki!");
    assert!(port.is_enabled(Control::CreateWiki));
    // Constructed URL, not the endpoint's relative one.
    assert_eq!(
        port.result.as_deref(),
        Some("https://personalwiki.com.de/wikis/alice")
    );
    assert!(port.link_visible);
    assert!(port.copy_visible);

    // Timer fires: only the label is restored.
    controller.revert(&mut port, Control::CreateWiki);
    assert_eq!(port.label(Control::CreateWiki), "Create Wiki");
    assert_eq!(controller.state(WikiAction::Create), ControlState::Resting);
    assert_eq!(
        port.result.as_deref(),
        Some("https://personalwiki.com.de/wikis/alice")
    );
}

#[test]
fn update_failure_shows_remote_error_and_hides_copy() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    dispatch(&mut controller, &mut port, WikiAction::Update);
    let response = json!({ "success": false, "error": "bad password", "url": null });
    let completion = controller.complete(&mut port, WikiAction::Update, Ok(response));

    assert_eq!(completion, Completion::Settled);
    assert_eq!(port.result.as_deref(), Some("An error occurred: bad password"));
    assert!(port.link_visible);
    assert!(!port.copy_visible);
    assert_eq!(port.label(Control::UpdateWiki), "Update Wiki");
    assert!(port.is_enabled(Control::UpdateWiki));
    assert_eq!(controller.state(WikiAction::Update), ControlState::Failed);
}

#[test]
fn delete_success_leaves_result_display_untouched() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    dispatch(&mut controller, &mut port, WikiAction::Delete);
    let response = json!({ "success": true, "error": null });
    let completion = controller.complete(&mut port, WikiAction::Delete, Ok(response));

    assert_eq!(completion, Completion::ScheduleRevert(Control::DeleteWiki));
    assert_eq!(port.label(Control::DeleteWiki), "Deleted Wiki!");
    assert_eq!(port.result, None);
    assert_eq!(port.result_writes, 0);
    assert!(!port.link_visible);

    controller.revert(&mut port, Control::DeleteWiki);
    assert_eq!(port.label(Control::DeleteWiki), "Delete Wiki");
}

#[test]
fn delete_failure_shows_remote_error() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    dispatch(&mut controller, &mut port, WikiAction::Delete);
    let response = json!({ "success": false, "error": "not found" });
    controller.complete(&mut port, WikiAction::Delete, Ok(response));

    assert_eq!(port.result.as_deref(), Some("An error occurred: not found"));
    assert!(!port.copy_visible);
    assert_eq!(port.label(Control::DeleteWiki), "Delete Wiki");
}

#[test]
fn identical_clicks_are_not_deduplicated() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    let first = dispatch(&mut controller, &mut port, WikiAction::Create);
    let response = json!({ "success": true, "error": null, "url": null });
    controller.complete(&mut port, WikiAction::Create, Ok(response.clone()));

    // Same inputs click again: an independent second cycle is dispatched.
    let second = dispatch(&mut controller, &mut port, WikiAction::Create);
    let (WikiRequest::Create(a), WikiRequest::Create(b)) = (first, second) else {
        panic!("both clicks must dispatch create requests");
    };
    assert_eq!(a.username, b.username);
    assert_eq!(a.content, b.content);
    assert_eq!(a.password, b.password);
    controller.complete(&mut port, WikiAction::Create, Ok(response));
}

#[test]
fn click_while_in_flight_is_dropped() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    dispatch(&mut controller, &mut port, WikiAction::Create);
    assert!(matches!(
        controller.click(&mut port, WikiAction::Create),
        ClickOutcome::Busy
    ));
    // Other controls stay live while one is in flight.
    assert!(matches!(
        controller.click(&mut port, WikiAction::Delete),
        ClickOutcome::Dispatch(_)
    ));
}

#[test]
fn malformed_shape_reaches_no_terminal_state() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    dispatch(&mut controller, &mut port, WikiAction::Create);
    // Missing the url key required for create responses.
    let response = json!({ "success": true, "error": null });
    let completion = controller.complete(&mut port, WikiAction::Create, Ok(response));

    assert_eq!(completion, Completion::Settled);
    // Label stays on the in-flight text; result display untouched.
    assert_eq!(port.label(Control::CreateWiki), "Creating wiki...");
    assert_eq!(port.result, None);
    // The guard is cleared, so another click can recover.
    assert!(port.is_enabled(Control::CreateWiki));
    assert!(matches!(
        controller.click(&mut port, WikiAction::Create),
        ClickOutcome::Dispatch(_)
    ));
}

#[test]
fn transport_failure_reaches_no_terminal_state() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    dispatch(&mut controller, &mut port, WikiAction::Update);
    let error = ClientError::Api {
        status: 500,
        message: "internal error".to_string(),
    };
    let completion = controller.complete(&mut port, WikiAction::Update, Err(error));

    assert_eq!(completion, Completion::Settled);
    assert_eq!(port.label(Control::UpdateWiki), "Updating wiki...");
    assert_eq!(port.result, None);
    assert!(port.is_enabled(Control::UpdateWiki));
}

#[test]
fn result_display_is_last_writer_wins_across_actions() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    dispatch(&mut controller, &mut port, WikiAction::Create);
    dispatch(&mut controller, &mut port, WikiAction::Update);

    controller.complete(
        &mut port,
        WikiAction::Create,
        Ok(json!({ "success": false, "error": "first", "url": null })),
    );
    controller.complete(
        &mut port,
        WikiAction::Update,
        Ok(json!({ "success": false, "error": "second", "url": null })),
    );

    assert_eq!(port.result.as_deref(), Some("An error occurred: second"));
}

#[test]
fn copy_flips_label_and_returns_displayed_text() {
    let mut port = FakePort::filled();
    let mut controller = WikiController::new();

    // Nothing displayed yet: nothing to copy.
    assert_eq!(controller.copy_clicked(&mut port), None);

    dispatch(&mut controller, &mut port, WikiAction::Create);
    controller.complete(
        &mut port,
        WikiAction::Create,
        Ok(json!({ "success": true, "error": null, "url": null })),
    );

    let copied = controller.copy_clicked(&mut port);
    assert_eq!(
        copied.as_deref(),
        Some("https://personalwiki.com.de/wikis/alice")
    );
    assert_eq!(port.label(Control::CopyButton), "Copied!");

    controller.revert(&mut port, Control::CopyButton);
    assert_eq!(port.label(Control::CopyButton), "Copy");
}
