//! The server record entity.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::Serialize;

use super::{DomainError, ServerConfiguration};

/// Maximum length of a server name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// A persisted MCP server profile.
///
/// Identity is the `id` alone: two records with the same id compare equal
/// regardless of name, configuration or state. Records are immutable; the
/// mutators return a new, re-validated record with a later `modified_at`.
#[derive(Debug, Clone, Serialize)]
pub struct McpServer {
    id: String,
    name: String,
    configuration: ServerConfiguration,
    is_enabled: bool,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Field bundle accepted by [`McpServer::new`].
///
/// Used by the store when rehydrating rows and by services building records
/// with an explicit id or timestamps.
#[derive(Debug, Clone)]
pub struct McpServerParts {
    pub id: String,
    pub name: String,
    pub configuration: ServerConfiguration,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub description: Option<String>,
}

impl McpServer {
    /// Validate and assemble a record from its parts.
    ///
    /// The name is trimmed before it is stored.
    pub fn new(parts: McpServerParts) -> Result<Self, DomainError> {
        let name = parts.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidName(
                "Server name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::InvalidName(format!(
                "Server name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }
        if parts.id.trim().is_empty() {
            return Err(DomainError::InvalidId("Server ID cannot be empty".to_string()));
        }
        parts.configuration.validate()?;

        Ok(Self {
            id: parts.id,
            name: name.to_string(),
            configuration: parts.configuration,
            is_enabled: parts.is_enabled,
            created_at: parts.created_at,
            modified_at: parts.modified_at,
            description: parts.description,
        })
    }

    /// Create a brand-new record with a generated id and current timestamps.
    pub fn create(
        name: impl Into<String>,
        configuration: ServerConfiguration,
        is_enabled: bool,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        let now = now_micros();
        Self::new(McpServerParts {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            configuration,
            is_enabled,
            created_at: now,
            modified_at: now,
            description,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn configuration(&self) -> &ServerConfiguration {
        &self.configuration
    }

    pub const fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Copy with the enabled state flipped.
    pub fn toggle(&self) -> Result<Self, DomainError> {
        self.with_enabled(!self.is_enabled)
    }

    /// Copy with the given enabled state.
    pub fn with_enabled(&self, enabled: bool) -> Result<Self, DomainError> {
        self.rebuild(self.configuration.clone(), enabled)
    }

    /// Copy with a replaced configuration.
    pub fn with_configuration(&self, configuration: ServerConfiguration) -> Result<Self, DomainError> {
        self.rebuild(configuration, self.is_enabled)
    }

    fn rebuild(&self, configuration: ServerConfiguration, is_enabled: bool) -> Result<Self, DomainError> {
        Self::new(McpServerParts {
            id: self.id.clone(),
            name: self.name.clone(),
            configuration,
            is_enabled,
            created_at: self.created_at,
            modified_at: next_modified_at(self.modified_at),
            description: self.description.clone(),
        })
    }
}

/// Current time at the microsecond precision the store keeps.
fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A timestamp that is "now" but never earlier than one microsecond past
/// `previous`, so successive mutations always move forward.
fn next_modified_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now_micros();
    let floor = previous + Duration::microseconds(1);
    if now > floor { now } else { floor }
}

impl PartialEq for McpServer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for McpServer {}

impl Hash for McpServer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    fn url_config() -> ServerConfiguration {
        ServerConfiguration::url("https://a.example.com", BTreeMap::new()).unwrap()
    }

    fn parts(id: &str, name: &str) -> McpServerParts {
        let now = Utc::now();
        McpServerParts {
            id: id.to_string(),
            name: name.to_string(),
            configuration: url_config(),
            is_enabled: false,
            created_at: now,
            modified_at: now,
            description: None,
        }
    }

    #[test]
    fn test_create_trims_name_and_assigns_id() {
        let server = McpServer::create("  alpha  ", url_config(), false, None).unwrap();
        assert_eq!(server.name(), "alpha");
        assert!(!server.id().is_empty());
        assert!(!server.is_enabled());
        assert_eq!(server.created_at(), server.modified_at());
    }

    #[test]
    fn test_name_validation() {
        let err = McpServer::new(parts("id-1", "   ")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidName(_)));

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = McpServer::new(parts("id-1", &long)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidName(_)));

        let exact = "x".repeat(MAX_NAME_LEN);
        assert!(McpServer::new(parts("id-1", &exact)).is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = McpServer::new(parts("", "alpha")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn test_invalid_configuration_rejected_on_construction() {
        let mut p = parts("id-1", "alpha");
        p.configuration = ServerConfiguration::Url {
            url: "not-a-url".to_string(),
            headers: BTreeMap::new(),
        };
        let err = McpServer::new(p).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_double_toggle_restores_state_with_increasing_timestamps() {
        let server = McpServer::create("alpha", url_config(), false, None).unwrap();
        let once = server.toggle().unwrap();
        let twice = once.toggle().unwrap();

        assert!(once.is_enabled());
        assert_eq!(twice.is_enabled(), server.is_enabled());
        assert!(once.modified_at() > server.modified_at());
        assert!(twice.modified_at() > once.modified_at());
        assert_eq!(twice.created_at(), server.created_at());
        assert_eq!(twice.id(), server.id());
    }

    #[test]
    fn test_with_configuration_preserves_identity() {
        let server = McpServer::create("alpha", url_config(), true, Some("desc".into())).unwrap();
        let cmd = ServerConfiguration::command("npx", vec![], BTreeMap::new()).unwrap();
        let updated = server.with_configuration(cmd.clone()).unwrap();

        assert_eq!(updated, server);
        assert_eq!(updated.configuration(), &cmd);
        assert!(updated.is_enabled());
        assert_eq!(updated.description(), Some("desc"));
    }

    #[test]
    fn test_equality_is_identity_only() {
        let a = McpServer::new(parts("same", "alpha")).unwrap();
        let mut other = parts("same", "beta");
        other.is_enabled = true;
        let b = McpServer::new(other).unwrap();
        let c = McpServer::new(parts("different", "alpha")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<McpServer> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
