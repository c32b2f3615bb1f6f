use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Custom logger initialization to exclude timestamps but keep colors.
///
/// Use SCRAWL_LOG=info or SCRAWL_LOG=debug to increase verbosity.
/// Example: SCRAWL_LOG=debug cargo run
pub fn init_custom_logger() {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    // Default to warn for minimal noise unless the user overrides
    let default_level =
        std::env::var("SCRAWL_LOG").unwrap_or_else(|_| "warn".to_string());

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_filter(
                    tracing_subscriber::filter::EnvFilter::from_default_env()
                        .add_directive(default_level.parse().unwrap())
                        // Keep generation summaries visible by default
                        .add_directive("scrawl=info".parse().unwrap()),
                ),
        )
        .init();
}
