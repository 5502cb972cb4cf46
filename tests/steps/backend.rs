//! Step definitions for the mock keyword backend
//!
//! This module contains step definitions for:
//! - Canned keyword and report responses
//! - Error statuses, malformed bodies and unreachable backends
//! - Inspecting what the backend received

use crate::common::world::SeedlineWorld;
use cucumber::{given, then};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::info;
use wiremock::ResponseTemplate;

fn keyword_payload() -> Value {
    json!({
        "seed_keywords": ["yoga mat", "eco yoga mat", "non slip yoga mat"],
        "competitor_gaps": {"thick yoga mat": 0.42, "travel yoga mat": null},
        "question_keywords": ["which yoga mat is best for beginners?"]
    })
}

fn report_payload() -> Value {
    json!({
        "report": "Demand for <eco> yoga mats grows & stays steady.",
        "keywords": keyword_payload()
    })
}

// === CANNED RESPONSES ===

#[given("the backend returns keywords")]
async fn given_backend_returns_keywords(world: &mut SeedlineWorld) {
    info!("Mounting keyword response");
    world
        .mount_json("/generate-keywords", keyword_payload(), None)
        .await;
}

#[given(expr = "the backend returns keywords after {int} ms")]
async fn given_backend_returns_keywords_slowly(world: &mut SeedlineWorld, delay_ms: u64) {
    world
        .mount_json(
            "/generate-keywords",
            keyword_payload(),
            Some(Duration::from_millis(delay_ms)),
        )
        .await;
}

#[given("the backend returns a report")]
async fn given_backend_returns_report(world: &mut SeedlineWorld) {
    info!("Mounting report response");
    world
        .mount_json("/generate-report", report_payload(), None)
        .await;
}

#[given(expr = "the backend answers {string} with status {int}")]
async fn given_backend_answers_with_status(world: &mut SeedlineWorld, endpoint: String, status: u16) {
    world
        .mount(&endpoint, ResponseTemplate::new(status))
        .await;
}

#[given(expr = "the backend answers {string} with body {string}")]
async fn given_backend_answers_with_body(world: &mut SeedlineWorld, endpoint: String, body: String) {
    world
        .mount(&endpoint, ResponseTemplate::new(200).set_body_string(body))
        .await;
}

#[given("the backend is unreachable")]
async fn given_backend_unreachable(world: &mut SeedlineWorld) {
    world.use_unreachable_backend();
}

// === RECEIVED REQUESTS ===

#[then(expr = "the backend should have received {int} request(s)")]
async fn then_backend_received_count(world: &mut SeedlineWorld, count: usize) {
    assert_eq!(world.received_bodies().await.len(), count);
}

#[then(expr = "the backend should have received category {string} and platform {string}")]
async fn then_backend_received_body(world: &mut SeedlineWorld, category: String, platform: String) {
    let bodies = world.received_bodies().await;
    let body = bodies.last().expect("backend received a request");
    assert_eq!(
        body,
        &json!({"category": category, "target_platform": platform})
    );
}
