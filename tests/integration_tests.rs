use cucumber::World;

pub mod common;
pub mod steps;

pub use common::world::SeedlineWorld;

/// # seedline Integration Tests
///
/// Cucumber features drive a real `AppController` through mock I/O streams
/// against a wiremock backend, so no terminal or live server is needed.
///
/// ```bash
/// cargo test --test integration_tests
/// ```
#[tokio::main]
async fn main() {
    init_tracing();
    run_features_sequentially().await;
}

fn init_tracing() {
    #[allow(clippy::disallowed_methods)]
    let log_level = std::env::var("SEEDLINE_LOG_LEVEL")
        .unwrap_or_else(|_| "error".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Each feature runs on its own so mock servers never overlap
async fn run_features_sequentially() {
    let features = [
        "features/keywords.feature",
        "features/report.feature",
        "features/tabs.feature",
        "features/errors.feature",
        "features/export.feature",
    ];

    for (i, feature) in features.iter().enumerate() {
        tracing::info!("[{}/{}] Starting {}", i + 1, features.len(), feature);
        SeedlineWorld::cucumber()
            .fail_on_skipped()
            .run_and_exit(feature)
            .await;
        tracing::info!("[{}/{}] Completed {}", i + 1, features.len(), feature);
    }
}
