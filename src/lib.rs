pub mod models;
pub mod services;

pub use models::{MediaKind, MediaVerdict, RiskLevel, Verdict};
pub use services::config_store::{ConfigStore, ScorerConfig};
pub use services::detection::LexicalRiskScorer;
pub use services::media::{MediaAssessor, TrustMode};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize console logging for the CLI binaries. Logs go to stderr so
/// stdout stays reserved for the JSON verdict.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
