// ABOUTME: Test UI display of the toast group, alert list, menu bar and help overlay

use alert_box::alerts::AlertProvider;
use alert_box::app::App;
use alert_box::components::{LayoutComponent, ToastGroupComponent};
use alert_box::models::NewAlert;
use ratatui::{backend::TestBackend, Terminal};

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
}

fn sticky_provider(titles: &[&str]) -> AlertProvider {
    let mut provider = AlertProvider::default();
    for title in titles {
        provider.add_alert(NewAlert::new(*title).skip_auto_close());
    }
    provider
}

#[test]
fn test_menu_bar_and_status_render_when_empty() {
    let app = App::new();
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new(5);

    terminal.draw(|frame| {
        layout.render(frame, &app.state);
    }).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("[1-5]raise"), "Menu bar should list raise keys");
    assert!(content.contains("[q]uit"), "Should contain '[q]uit'");
    assert!(content.contains("Active alerts: 0"), "Status line should count alerts");
    assert!(content.contains("Auto-close: 8000 ms"));
}

#[test]
fn test_toasts_show_title_variant_and_body() {
    let mut provider = AlertProvider::default();
    provider.add_alert(
        NewAlert::danger("Build failed")
            .body("exit code 101")
            .skip_auto_close(),
    );
    provider.add_alert(NewAlert::success("Saved").skip_auto_close());

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let toasts = ToastGroupComponent::new(5);
    terminal.draw(|frame| {
        toasts.render(frame, frame.size(), provider.alerts(), None);
    }).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("Build failed"));
    assert!(content.contains("exit code 101"));
    assert!(content.contains("danger"));
    assert!(content.contains("Saved"));
    assert!(content.contains("success"));
    assert!(!content.contains("[x]"), "Close hint only appears on the selected toast");

    let build_row = content.find("Build failed").unwrap();
    let saved_row = content.find("Saved").unwrap();
    assert!(build_row < saved_row, "Older alerts are stacked above newer ones");
}

#[test]
fn test_overflow_is_summarised() {
    let provider = sticky_provider(&["oldest", "older", "newer", "newest"]);

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let toasts = ToastGroupComponent::new(2);
    terminal.draw(|frame| {
        toasts.render(frame, frame.size(), provider.alerts(), None);
    }).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("+2 more"));
    assert!(content.contains("newer"));
    assert!(content.contains("newest"));
    assert!(!content.contains("oldest"));
}

#[test]
fn test_selected_toast_has_close_hint() {
    let provider = sticky_provider(&["first", "second"]);
    let selected = provider.alerts()[1].key;

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let toasts = ToastGroupComponent::default();
    terminal.draw(|frame| {
        toasts.render(frame, frame.size(), provider.alerts(), Some(selected));
    }).unwrap();

    let content = buffer_text(&terminal);
    let hint = content.find("[x]").expect("selected toast should show [x]");
    assert!(hint > content.find("first").unwrap());
}

#[test]
fn test_no_toasts_leaves_screen_blank() {
    let provider = AlertProvider::default();
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let toasts = ToastGroupComponent::default();

    terminal.draw(|frame| {
        toasts.render(frame, frame.size(), provider.alerts(), None);
    }).unwrap();

    assert!(buffer_text(&terminal).trim().is_empty());
}

#[test]
fn test_help_screen_lists_alert_keys() {
    let mut app = App::new();
    app.state.help_visible = true;

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let mut layout = LayoutComponent::new(5);
    terminal.draw(|frame| {
        layout.render(frame, &app.state);
    }).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("Raise Alerts:"), "Should contain 'Raise Alerts:' section");
    assert!(content.contains("Manage Alerts:"), "Should contain 'Manage Alerts:' section");
    assert!(content.contains("Sticky alert (no auto-close)"));
}

#[test]
fn test_alert_list_marks_sticky_alerts() {
    let mut app = App::new();
    app.state
        .alerts
        .add_alert(NewAlert::warning("Disk almost full").skip_auto_close());

    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    // Keep toasts out of the way so only the list shows the alert
    let mut layout = LayoutComponent::new(1);
    terminal.draw(|frame| {
        layout.render(frame, &app.state);
    }).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("[alert-1, sticky]"));
    assert!(content.contains("Active alerts: 1"));
}

#[test]
fn test_long_title_wraps_without_clipping_body() {
    let mut provider = AlertProvider::default();
    let title = format!("Deploy{}finished", "-".repeat(52));
    assert_eq!(title.len(), 66);
    provider.add_alert(NewAlert::danger(title).body("BODYLINE").skip_auto_close());

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let toasts = ToastGroupComponent::default();
    terminal.draw(|frame| {
        toasts.render(frame, frame.size(), provider.alerts(), None);
    }).unwrap();

    let content = buffer_text(&terminal);
    assert!(content.contains("Deploy"));
    assert!(content.contains("finished"), "Wrapped tail of the title should be visible");
    assert!(content.contains("BODYLINE"), "Body must not be clipped by a wrapped title");
}
