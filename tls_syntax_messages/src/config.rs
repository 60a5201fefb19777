use crate::inspect::MessageKind;
use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;

pub const ENV_VAR_MESSAGE: &str = "TLS_SYNTAX_MESSAGE";
pub const ENV_VAR_STRICT: &str = "TLS_SYNTAX_STRICT";

pub const DEFAULT_MESSAGE: MessageKind = MessageKind::Plaintext;
pub const DEFAULT_STRICT: bool = true;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct InspectConfig {
    pub message: MessageKind,
    /// Whether input left over after the message is an error.
    pub strict: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE,
            strict: DEFAULT_STRICT,
        }
    }
}

impl InspectConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let message = lookup(ENV_VAR_MESSAGE)
            .map_or(Ok(DEFAULT_MESSAGE), |s| MessageKind::from_str(&s))?;
        let strict = lookup(ENV_VAR_STRICT).map_or(Ok(DEFAULT_STRICT), |s| parse_bool(&s))?;
        Ok(Self { message, strict })
    }
}

fn parse_bool(s: &str) -> Result<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("{ENV_VAR_STRICT}: expected a boolean, found {s:?}")),
    }
}
