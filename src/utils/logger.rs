use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "fivegc_sdk=debug,fivegc=debug,info";

/// `RUST_LOG` wins; otherwise the library and the CLI log at `level`, or at
/// debug when verbose.
fn env_filter(level: &str, verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_FILTER.to_string()
    } else {
        format!("fivegc_sdk={0},fivegc={0}", level)
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// 終端機用的精簡格式
fn init_compact(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON 格式，給收集日誌的平台使用
fn init_json(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// Install the subscriber described by the `[logging]` section.
pub fn init_logger(config: &LoggingConfig, verbose: bool) {
    if config.json {
        init_json(&config.level, verbose);
    } else {
        init_compact(&config.level, verbose);
    }
}
