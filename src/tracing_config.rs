//! Tracing configuration for applications embedding blazing.
//!
//! The library crates only emit `tracing` events (descriptor builds at
//! `debug`, parse strategy hits at `trace`, parse failures at `debug`).
//! `init_tracing` installs a subscriber for them. Output format is chosen
//! with `BLAZING_LOG_FORMAT`:
//!
//! - `text` (default): plain `tracing-subscriber` lines
//! - `tree`: indented output via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! BLAZING_LOG=blazing_enums=trace BLAZING_LOG_FORMAT=tree my-app
//! ```
//!
//! Nothing is installed unless `BLAZING_LOG` or `RUST_LOG` is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "BLAZING_LOG";
/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "BLAZING_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to `Text`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "tree" => LogFormat::Tree,
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// Filter directives: `BLAZING_LOG` first, then `RUST_LOG`.
fn filter_directives() -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
}

/// Install the global subscriber.
///
/// Returns `false` without touching global state when no filter variable
/// is set, or when another subscriber is already installed. Output always
/// goes to stderr.
pub fn init_tracing() -> bool {
    let Some(directives) = filter_directives() else {
        return false;
    };
    init_with(&directives, LogFormat::from_env())
}

/// Install the global subscriber with explicit settings.
pub fn init_with(directives: &str, format: LogFormat) -> bool {
    let filter = EnvFilter::builder().parse_lossy(directives);

    match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init().is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
