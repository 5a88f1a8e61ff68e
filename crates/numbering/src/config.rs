//! Numbering configuration (environment-driven).

use std::path::PathBuf;

use anyhow::Context;

/// Environment variable overriding the durable sequence file location.
pub const SEQUENCE_FILE_VAR: &str = "AKMDOCS_SEQUENCE_FILE";

/// Environment variable that disables the durable store when set to `false`/`0`/`no`/`off`.
pub const DURABLE_VAR: &str = "AKMDOCS_DURABLE_SEQUENCES";

/// Where sequence counters live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingConfig {
    /// JSON file holding the durable counters.
    pub sequence_file: PathBuf,
    /// When false, counters only live in the volatile in-process mirror.
    pub durable: bool,
}

impl NumberingConfig {
    /// Durable counters in `path`.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            sequence_file: path.into(),
            durable: true,
        }
    }

    /// Volatile counters only; nothing touches the filesystem.
    pub fn volatile() -> Self {
        Self {
            sequence_file: PathBuf::from("sequences.json"),
            durable: false,
        }
    }

    /// Load from `AKMDOCS_SEQUENCE_FILE` / `AKMDOCS_DURABLE_SEQUENCES`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let durable = match lookup(DURABLE_VAR) {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("{DURABLE_VAR} must be a boolean, got {raw:?}"))?,
            None => true,
        };

        let sequence_file = match lookup(SEQUENCE_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None if durable => default_sequence_file()?,
            None => Self::volatile().sequence_file,
        };

        Ok(Self {
            sequence_file,
            durable,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `<OS data dir>/akmdocs/sequences.json`.
pub fn default_sequence_file() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    dir.push("akmdocs");
    dir.push("sequences.json");
    Ok(dir)
}
