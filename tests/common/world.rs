use anyhow::Result;
use cucumber::World;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seedline::config::Profile;
use seedline::repl::{
    events::{ModelEvent, TabId},
    io::{MockEventStream, MockRenderStream},
    models::RegionContent,
    utils::markup_text,
    view_models::ViewModel,
    AppController,
};

type TestController = AppController<MockEventStream, MockRenderStream>;

/// Address nothing listens on, for connection failures
const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";

/// Application state for one scenario
///
/// Drives a real [`AppController`] with mock I/O streams against a wiremock
/// backend.
#[derive(World)]
#[world(init = Self::new)]
pub struct SeedlineWorld {
    /// Mock keyword backend
    pub mock_server: Option<MockServer>,

    /// Base URL used when the application starts
    pub base_url: Option<String>,

    /// Running application
    pub controller: Option<TestController>,

    /// Events produced by the last input line
    pub last_events: Vec<ModelEvent>,

    /// Scratch directory for exported pages
    pub export_dir: Option<TempDir>,
}

impl fmt::Debug for SeedlineWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedlineWorld")
            .field("base_url", &self.base_url)
            .field("started", &self.controller.is_some())
            .field("last_events", &self.last_events)
            .finish()
    }
}

impl SeedlineWorld {
    pub fn new() -> Self {
        Self {
            mock_server: None,
            base_url: None,
            controller: None,
            last_events: Vec::new(),
            export_dir: None,
        }
    }

    /// Start the mock backend if it is not running yet
    pub async fn server(&mut self) -> &MockServer {
        if self.mock_server.is_none() {
            let server = MockServer::start().await;
            self.base_url = Some(server.uri());
            self.mock_server = Some(server);
        }
        self.mock_server.as_ref().expect("mock server started")
    }

    /// Answer POSTs to `endpoint` with the given status, body and delay
    pub async fn mount(&mut self, endpoint: &str, template: ResponseTemplate) {
        let server = self.server().await;
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(template)
            .mount(server)
            .await;
    }

    pub async fn mount_json(&mut self, endpoint: &str, body: Value, delay: Option<Duration>) {
        let mut template = ResponseTemplate::new(200).set_body_json(body);
        if let Some(delay) = delay {
            template = template.set_delay(delay);
        }
        self.mount(endpoint, template).await;
    }

    pub fn use_unreachable_backend(&mut self) {
        self.base_url = Some(UNREACHABLE_BASE_URL.to_string());
    }

    pub fn start(&mut self) -> Result<()> {
        let mut profile = Profile::blank("test");
        if let Some(base_url) = &self.base_url {
            profile.base_url = base_url.clone();
        }

        let mut controller =
            AppController::with_profile(profile, MockEventStream::empty(), MockRenderStream::new())?;
        controller.set_use_color(false);
        self.controller = Some(controller);
        Ok(())
    }

    pub fn controller(&mut self) -> &mut TestController {
        if self.controller.is_none() {
            self.start().expect("application should start");
        }
        self.controller.as_mut().expect("controller started")
    }

    pub fn view_model(&mut self) -> &ViewModel {
        self.controller().view_model()
    }

    /// Type one command line and redraw
    pub fn enter(&mut self, line: &str) -> Result<()> {
        let controller = self.controller();
        let events = controller.handle_line(line);
        controller.tick()?;
        self.last_events = events;
        Ok(())
    }

    /// Wait for any outstanding request and redraw
    pub async fn settle(&mut self) -> Result<()> {
        let controller = self.controller();
        tokio::time::timeout(Duration::from_secs(10), controller.settle()).await?;
        controller.tick()
    }

    /// Text of the most recent frame
    pub fn screen(&mut self) -> String {
        self.controller().render_stream().last_frame()
    }

    /// Visible text of a tab region, with highlighting removed
    pub fn region_text(&mut self, tab: &str) -> Option<String> {
        let content = self.view_model().tabs().content(&TabId::new(tab))?.clone();
        Some(match content {
            RegionContent::Empty => String::new(),
            RegionContent::Highlighted(markup) => markup_text(&markup),
            RegionContent::Plain(text) => text,
        })
    }

    /// JSON bodies of every request the backend received
    pub async fn received_bodies(&mut self) -> Vec<Value> {
        let Some(server) = &self.mock_server else {
            return Vec::new();
        };
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| request.body_json::<Value>().ok())
            .collect()
    }
}

impl Default for SeedlineWorld {
    fn default() -> Self {
        Self::new()
    }
}
