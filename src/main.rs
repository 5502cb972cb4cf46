//! # seedline Main Entry Point
//!
//! Interactive keyword research client, or a one-shot request with `--action`.

use anyhow::Result;
use seedline::{cmd_args::CommandLineArgs, config, AppController};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{fmt, fmt::time::ChronoLocal, EnvFilter};

/// Dependencies that stay at `warn` regardless of the requested level
const QUIET_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util", "rustls", "tokio"];

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut filter = EnvFilter::try_from_env(config::LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    for target in QUIET_TARGETS {
        if let Ok(directive) = format!("{target}=warn").parse() {
            filter = filter.add_directive(directive);
        }
    }

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing(cmd_args.verbose());

    let mut app = AppController::new(&cmd_args)?;

    let Some(action) = cmd_args.action() else {
        app.run().await?;
        return Ok(ExitCode::SUCCESS);
    };

    let use_color = !cmd_args.no_color() && atty::is(atty::Stream::Stdout);
    app.set_use_color(use_color);

    let succeeded = app.run_once(action).await?;
    app.render_summary()?;

    if let Some(path) = cmd_args.export() {
        let path = shellexpand::tilde(path).to_string();
        app.export(Path::new(&path))?;
    }

    if succeeded {
        Ok(ExitCode::SUCCESS)
    } else {
        let message = app
            .view_model()
            .error_message()
            .unwrap_or("Request failed");
        eprintln!("Error: {message}");
        Ok(ExitCode::FAILURE)
    }
}
