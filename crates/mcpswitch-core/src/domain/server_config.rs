//! Server configuration value object.
//!
//! A [`ServerConfiguration`] describes how to reach one MCP server: either a
//! local command to spawn or a remote HTTP endpoint. Two encodings exist:
//!
//! - the *tagged* encoding (serde), which carries a `"type"` discriminator
//!   and is what the store persists in `config_data`;
//! - the *artifact* encoding ([`ServerConfiguration::to_value`] /
//!   [`ServerConfiguration::from_value`]), which omits the discriminator and
//!   is told apart by the presence of a `url` or `command` key.
//!
//! Both decoding paths re-run validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DomainError;

/// How to reach an MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "lowercase",
    try_from = "TaggedConfiguration"
)]
pub enum ServerConfiguration {
    /// Local process spawned with `command`.
    Command {
        /// Executable name or path.
        command: String,
        /// Arguments, in order.
        args: Vec<String>,
        /// Environment variables for the child process.
        env: BTreeMap<String, String>,
    },
    /// Remote endpoint reached over HTTP.
    Url {
        /// Absolute `http://` or `https://` URL.
        url: String,
        /// HTTP headers sent with every request.
        headers: BTreeMap<String, String>,
    },
}

/// Wire twin of [`ServerConfiguration`] used to route deserialization
/// through validation.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedConfiguration {
    Command {
        command: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        env: BTreeMap<String, String>,
    },
    Url {
        url: String,
        #[serde(default)]
        headers: BTreeMap<String, String>,
    },
}

impl TryFrom<TaggedConfiguration> for ServerConfiguration {
    type Error = DomainError;

    fn try_from(raw: TaggedConfiguration) -> Result<Self, Self::Error> {
        match raw {
            TaggedConfiguration::Command { command, args, env } => {
                Self::command(command, args, env)
            }
            TaggedConfiguration::Url { url, headers } => Self::url(url, headers),
        }
    }
}

impl ServerConfiguration {
    /// Build and validate a command-based configuration.
    pub fn command(
        command: impl Into<String>,
        args: Vec<String>,
        env: BTreeMap<String, String>,
    ) -> Result<Self, DomainError> {
        let config = Self::Command {
            command: command.into(),
            args,
            env,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build and validate a URL-based configuration.
    pub fn url(
        url: impl Into<String>,
        headers: BTreeMap<String, String>,
    ) -> Result<Self, DomainError> {
        let config = Self::Url {
            url: url.into(),
            headers,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::Command { command, .. } => validate_command(command),
            Self::Url { url, .. } => validate_url(url),
        }
    }

    /// Discriminator stored in the `config_type` column.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Url { .. } => "url",
        }
    }

    /// Artifact encoding (no `type` key).
    pub fn to_value(&self) -> Value {
        match self {
            Self::Command { command, args, env } => serde_json::json!({
                "command": command,
                "args": args,
                "env": env,
            }),
            Self::Url { url, headers } => serde_json::json!({
                "url": url,
                "headers": headers,
            }),
        }
    }

    /// Parse the artifact encoding.
    ///
    /// Shape predicates are tried in a fixed order: an entry with a string
    /// `url` is URL-based, otherwise an entry with a string `command` is
    /// command-based. Missing `args`, `env` and `headers` default to empty.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        let obj = value.as_object().ok_or_else(|| {
            DomainError::InvalidConfiguration("Server configuration must be an object".to_string())
        })?;

        if let Some(url) = obj.get("url").and_then(Value::as_str) {
            let headers = string_map(obj, "headers")?;
            return Self::url(url, headers);
        }

        if let Some(command) = obj.get("command").and_then(Value::as_str) {
            let args = string_list(obj, "args")?;
            let env = string_map(obj, "env")?;
            return Self::command(command, args, env);
        }

        Err(DomainError::InvalidConfiguration(
            "Configuration must have either 'url' or 'command' field".to_string(),
        ))
    }
}

fn validate_command(command: &str) -> Result<(), DomainError> {
    if command.trim().is_empty() {
        return Err(DomainError::InvalidConfiguration(
            "Command cannot be empty".to_string(),
        ));
    }

    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '/' | '-' | '_' | '.');
    if !command.chars().all(allowed) {
        return Err(DomainError::InvalidConfiguration(format!(
            "Command contains invalid characters: {command}"
        )));
    }

    Ok(())
}

fn validate_url(raw: &str) -> Result<(), DomainError> {
    if raw.trim().is_empty() {
        return Err(DomainError::InvalidConfiguration(
            "URL cannot be empty".to_string(),
        ));
    }

    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(DomainError::InvalidConfiguration(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    url::Url::parse(raw)
        .map_err(|e| DomainError::InvalidConfiguration(format!("Invalid URL format: {e}")))?;

    Ok(())
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Result<Vec<String>, DomainError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    DomainError::InvalidConfiguration(format!("'{key}' must contain only strings"))
                })
            })
            .collect(),
        Some(_) => Err(DomainError::InvalidConfiguration(format!(
            "'{key}' must be an array of strings"
        ))),
    }
}

fn string_map(
    obj: &Map<String, Value>,
    key: &str,
) -> Result<BTreeMap<String, String>, DomainError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(k, v)| {
                v.as_str()
                    .map(|s| (k.clone(), s.to_string()))
                    .ok_or_else(|| {
                        DomainError::InvalidConfiguration(format!(
                            "'{key}.{k}' must be a string"
                        ))
                    })
            })
            .collect(),
        Some(_) => Err(DomainError::InvalidConfiguration(format!(
            "'{key}' must be an object of strings"
        ))),
    }
}
