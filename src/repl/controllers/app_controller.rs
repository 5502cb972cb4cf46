//! # Application Controller
//!
//! The controller orchestrates the MVVM components and owns the event loop.
//! It routes input lines to commands, feeds backend responses into the
//! ViewModel and coordinates view updates.

use crate::repl::{
    commands::{CommandRegistry, ExecutionContext},
    events::{Action, FormField, InputEvent, ModelEvent, ViewEvent},
    io::{EventStream, RenderStream, StdinEventStream, TerminalRenderStream},
    services::Services,
    view_models::ViewModel,
    views::{export_html, TerminalRenderer, ViewRenderer},
};
use crate::{
    cmd_args::CommandLineArgs,
    config::{self, Profile},
};
use anyhow::Result;
use std::io::Stdout;
use std::path::Path;
use std::time::Duration;

/// How long the loop sleeps when no input is waiting
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    services: Services,
    event_stream: ES,
    should_quit: bool,
}

impl AppController<StdinEventStream, TerminalRenderStream<Stdout>> {
    /// Controller reading stdin and drawing to the terminal
    pub fn new(cmd_args: &CommandLineArgs) -> Result<Self> {
        Self::with_io_streams(
            cmd_args,
            StdinEventStream::new(),
            TerminalRenderStream::new(),
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams
    ///
    /// Loads the profile named on the command line, applies the command line
    /// overrides and pre-fills the form.
    pub fn with_io_streams(
        cmd_args: &CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let profile_path = config::get_profile_path();
        let mut profile = config::load_profile(cmd_args.profile(), &profile_path)?;
        cmd_args.apply_to(&mut profile);

        let mut controller = Self::with_profile(profile, event_stream, render_stream)?;
        if let Some(category) = cmd_args.category() {
            controller.view_model.set_field(FormField::Category, category);
        }
        if let Some(platform) = cmd_args.platform() {
            controller.view_model.set_field(FormField::Platform, platform);
        }
        controller.view_renderer.set_use_color(!cmd_args.no_color());
        Ok(controller)
    }

    /// Create a controller for an already resolved profile
    pub fn with_profile(profile: Profile, event_stream: ES, render_stream: RS) -> Result<Self> {
        let services = Services::new(&profile)?;

        let mut view_model = ViewModel::new();
        view_model.set_request_options(profile.options.clone());
        view_model.set_profile_info(profile.name.clone(), profile.base_url.clone());

        tracing::debug!(
            "Controller ready for profile '{}' at {}",
            profile.name,
            profile.base_url
        );

        Ok(Self {
            view_model,
            view_renderer: TerminalRenderer::with_render_stream(render_stream),
            command_registry: CommandRegistry::new(),
            services,
            event_stream,
            should_quit: false,
        })
    }

    pub fn set_use_color(&mut self, use_color: bool) {
        self.view_renderer.set_use_color(use_color);
    }

    /// Run the interactive loop until quit or end of input
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_renderer.render_full(&self.view_model)?;
        self.view_model.collect_pending_view_events();

        while !self.should_quit {
            // Never block the runtime on input; sleep instead when idle
            let has_input = self.event_stream.poll(Duration::ZERO)?;
            if has_input {
                match self.event_stream.read()? {
                    InputEvent::Line(line) => {
                        tracing::debug!("Received input line: {:?}", line);
                        self.handle_line(&line);
                    }
                    InputEvent::EndOfInput => {
                        tracing::debug!("End of input, settling outstanding request");
                        self.settle().await;
                        self.should_quit = true;
                    }
                }
            }

            // Also draws the settled state once more before leaving
            self.tick()?;

            if has_input {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(INPUT_POLL_INTERVAL).await;
            }
        }

        self.view_renderer.cleanup()?;
        Ok(())
    }

    /// Execute one input line; returns the resulting model events
    ///
    /// Command failures end up in the status bar rather than aborting the loop.
    pub fn handle_line(&mut self, line: &str) -> Vec<ModelEvent> {
        self.view_model.clear_status_message();

        let mut context = ExecutionContext {
            view_model: &mut self.view_model,
            services: &mut self.services,
        };

        match self.command_registry.process_line(line, &mut context) {
            Ok(events) => {
                if events.contains(&ModelEvent::QuitRequested) {
                    self.should_quit = true;
                }
                tracing::debug!("Command events generated: {:?}", events);
                events
            }
            Err(e) => {
                tracing::debug!("Command failed for '{}': {}", line, e);
                vec![self.view_model.set_status_message(e.to_string())]
            }
        }
    }

    /// Apply arrived responses and redraw what changed
    pub fn tick(&mut self) -> Result<()> {
        self.drain_responses();
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(view_events)
    }

    /// Apply every response that has already arrived
    fn drain_responses(&mut self) {
        while let Some(message) = self.services.http.poll_response() {
            self.view_model.complete_request(message);
        }
    }

    /// Wait until no request is in flight
    pub async fn settle(&mut self) {
        while self.view_model.in_flight_token().is_some() {
            match self.services.http.next_response().await {
                Some(message) => {
                    self.view_model.complete_request(message);
                }
                None => break,
            }
        }
    }

    /// Run a single request to completion without the interactive loop
    ///
    /// Returns whether results are shown without an error banner.
    pub async fn run_once(&mut self, action: Action) -> Result<bool> {
        let pending = match self.view_model.begin_request(action) {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!("One-shot {} not started: {}", action, e);
                return Ok(false);
            }
        };

        self.services
            .http
            .execute_async(pending.token, pending.action, pending.request);
        self.settle().await;

        // Nothing is drawn incrementally in one-shot mode
        self.view_model.collect_pending_view_events();

        Ok(self.view_model.error_message().is_none() && self.view_model.is_results_visible())
    }

    /// Print the active tab content, if any
    pub fn render_summary(&mut self) -> Result<()> {
        self.view_renderer.render_summary(&self.view_model)
    }

    /// Write the current page as HTML
    pub fn export(&self, path: &Path) -> Result<()> {
        export_html(&self.view_model, path)
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut ViewModel {
        &mut self.view_model
    }

    pub fn render_stream(&self) -> &RS {
        self.view_renderer.render_stream()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Coalesce view events so each loop iteration draws at most once
    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        if view_events.is_empty() {
            return Ok(());
        }

        let needs_full_redraw = view_events
            .iter()
            .any(|event| matches!(event, ViewEvent::FullRedrawRequired));

        if needs_full_redraw {
            self.view_renderer.render_full(&self.view_model)
        } else {
            self.view_renderer
                .handle_view_event(&ViewEvent::StatusBarUpdateRequired, &self.view_model)
        }
    }
}
