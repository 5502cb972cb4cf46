//! Step definitions for panels, tabs, the status bar and exported pages

use crate::common::world::SeedlineWorld;
use cucumber::then;
use seedline::repl::events::{ModelEvent, TabId};

// === PANELS ===

#[then("the results should be visible")]
async fn then_results_visible(world: &mut SeedlineWorld) {
    assert!(world.view_model().is_results_visible());
}

#[then("the results should be hidden")]
async fn then_results_hidden(world: &mut SeedlineWorld) {
    assert!(!world.view_model().is_results_visible());
}

#[then("the loading indicator should be shown")]
async fn then_loading_shown(world: &mut SeedlineWorld) {
    assert!(world.view_model().is_loading());
    assert!(world.screen().contains("Loading"));
}

#[then("the loading indicator should be hidden")]
async fn then_loading_hidden(world: &mut SeedlineWorld) {
    assert!(!world.view_model().is_loading());
}

#[then("the error banner should be hidden")]
async fn then_error_hidden(world: &mut SeedlineWorld) {
    assert_eq!(world.view_model().error_message(), None);
}

#[then("the error banner should be shown")]
async fn then_error_shown(world: &mut SeedlineWorld) {
    let message = world
        .view_model()
        .error_message()
        .map(str::to_string)
        .expect("error banner shown");
    assert!(world.screen().contains(&format!("Error: {message}")));
}

#[then(expr = "the error banner should read {string}")]
async fn then_error_reads(world: &mut SeedlineWorld, expected: String) {
    assert_eq!(world.view_model().error_message(), Some(expected.as_str()));
    assert!(world.screen().contains(&format!("Error: {expected}")));
}

// === TABS ===

#[then(expr = "the active tab should be {string}")]
async fn then_active_tab(world: &mut SeedlineWorld, tab: String) {
    assert_eq!(world.view_model().active_tab(), Some(&TabId::new(tab)));
}

#[then(expr = "only the {string} region should be visible")]
async fn then_only_region_visible(world: &mut SeedlineWorld, tab: String) {
    let tabs = world.view_model().tabs();
    assert_eq!(tabs.visible_region_count(), 1);
    assert_eq!(tabs.active_button_count(), 1);
    let visible = tabs
        .tabs()
        .iter()
        .find(|t| t.is_content_visible())
        .expect("one visible region");
    assert_eq!(visible.id(), &TabId::new(tab));
}

#[then(expr = "the {string} tab should contain {string}")]
async fn then_tab_contains(world: &mut SeedlineWorld, tab: String, text: String) {
    let content = world.region_text(&tab).expect("tab exists");
    assert!(content.contains(&text), "{tab} region was: {content}");
}

#[then(expr = "the {string} tab should be empty")]
async fn then_tab_empty(world: &mut SeedlineWorld, tab: String) {
    assert_eq!(world.region_text(&tab).as_deref(), Some(""));
}

// === STATUS BAR ===

#[then(expr = "the screen should show {string}")]
async fn then_screen_shows(world: &mut SeedlineWorld, text: String) {
    let screen = world.screen();
    assert!(screen.contains(&text), "screen was:\n{screen}");
}

#[then(expr = "the status bar should show {string}")]
async fn then_status_shows(world: &mut SeedlineWorld, text: String) {
    let message = world
        .view_model()
        .status_line()
        .status_message()
        .unwrap_or_default()
        .to_string();
    assert!(message.contains(&text), "status was: {message}");
}

#[then("the trigger should have been rejected")]
async fn then_trigger_rejected(world: &mut SeedlineWorld) {
    assert!(world
        .last_events
        .iter()
        .any(|event| matches!(event, ModelEvent::RequestRejected { .. })));
}

// === EXPORT ===

#[then(expr = "the exported page should contain {string}")]
async fn then_export_contains(world: &mut SeedlineWorld, text: String) {
    let path = world
        .last_events
        .iter()
        .find_map(|event| match event {
            ModelEvent::ExportWritten { path } => Some(path.clone()),
            _ => None,
        })
        .expect("page exported");
    let html = std::fs::read_to_string(path).expect("exported page readable");
    assert!(html.contains(&text), "page was:\n{html}");
}
