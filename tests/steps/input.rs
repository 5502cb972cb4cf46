//! Step definitions for starting the application and typing commands

use crate::common::world::SeedlineWorld;
use cucumber::{given, when};
use tracing::debug;

#[given("the application is started")]
async fn given_application_started(world: &mut SeedlineWorld) {
    world.start().expect("application should start");
}

#[given(expr = "I have entered {string}")]
#[when(expr = "I enter {string}")]
async fn when_enter_line(world: &mut SeedlineWorld, line: String) {
    debug!("Entering line: {}", line);
    world.enter(&line).expect("line should be processed");
}

#[when("the request finishes")]
#[given("the request has finished")]
async fn when_request_finishes(world: &mut SeedlineWorld) {
    world.settle().await.expect("request should settle");
}

#[when(expr = "I export the page to {string}")]
async fn when_export_page(world: &mut SeedlineWorld, file_name: String) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(file_name);
    world.export_dir = Some(dir);
    world
        .enter(&format!("export {}", path.display()))
        .expect("export should be processed");
}
