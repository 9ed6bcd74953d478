//! Opt-in log output for hosts that want to watch assignability decisions.
//!
//! Nothing is installed unless `TYPECOMPAT_LOG` or `RUST_LOG` names a filter.
//! `TYPECOMPAT_LOG_FORMAT` then picks how events are rendered:
//!
//! | value  | rendering                                            |
//! |--------|------------------------------------------------------|
//! | `text` | one line per event (also used for unknown values)    |
//! | `tree` | nested spans indented by `tracing-tree`              |
//! | `json` | one JSON object per event                            |
//!
//! ```bash
//! TYPECOMPAT_LOG=typecompat_solver=trace TYPECOMPAT_LOG_FORMAT=tree my-host
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "TYPECOMPAT_LOG";
const FORMAT_VAR: &str = "TYPECOMPAT_LOG_FORMAT";

/// Rendering selected by `TYPECOMPAT_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Maps a format name to a variant. Case and surrounding whitespace are
    /// ignored; anything unrecognised renders as [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        std::env::var(FORMAT_VAR)
            .map(|value| Self::parse(&value))
            .unwrap_or(Self::Text)
    }
}

fn requested_filter() -> Option<EnvFilter> {
    match std::env::var(LOG_VAR) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() => {
            Some(EnvFilter::from_default_env())
        }
        Err(_) => None,
    }
}

/// Installs a global subscriber writing to stderr, if logging was requested.
///
/// `TYPECOMPAT_LOG` wins over `RUST_LOG`. A subscriber the host installed
/// first is left in place.
pub fn init_tracing() {
    let Some(filter) = requested_filter() else {
        return;
    };

    let installed = match LogFormat::from_env() {
        LogFormat::Tree => Registry::default()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true),
            )
            .try_init(),
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => Registry::default()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
    if let Err(err) = installed {
        tracing::debug!(%err, "keeping the subscriber the host installed");
    }
}
