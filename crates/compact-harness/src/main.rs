use compact_harness::{run_suite, HarnessConfig};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let loaded = HarnessConfig::from_env();
    let config = HarnessConfig::or_default(&loaded);

    // Logs go to stderr, stdout carries only the summary line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    if let Err(err) = loaded {
        warn!("{err:#}, falling back to defaults");
    }

    let report = run_suite(&config);
    println!("{}", report.summary());
}
