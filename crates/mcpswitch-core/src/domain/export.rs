//! Projection of server records into the artifact JSON shape.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};

use super::{DomainError, McpServer};

/// Pure projector from records to artifact JSON.
pub struct ConfigurationExporter;

impl ConfigurationExporter {
    /// Enabled records keyed by name, each in its artifact encoding.
    pub fn export_enabled<'a, I>(servers: I) -> Map<String, Value>
    where
        I: IntoIterator<Item = &'a McpServer>,
    {
        servers
            .into_iter()
            .filter(|server| server.is_enabled())
            .map(|server| (server.name().to_string(), server.configuration().to_value()))
            .collect()
    }

    /// `{ "servers": .., "metadata": { total, enabled, disabled, exportedAt } }`.
    pub fn export_with_metadata(servers: &[McpServer]) -> Value {
        Self::export_with_metadata_at(servers, Utc::now())
    }

    pub(crate) fn export_with_metadata_at(servers: &[McpServer], exported_at: DateTime<Utc>) -> Value {
        let enabled = servers.iter().filter(|s| s.is_enabled()).count();
        json!({
            "servers": Self::export_enabled(servers),
            "metadata": {
                "total": servers.len(),
                "enabled": enabled,
                "disabled": servers.len() - enabled,
                "exportedAt": exported_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            }
        })
    }

    /// Render JSON text.
    ///
    /// Object keys come out sorted in both modes since `serde_json::Map` is
    /// ordered; `pretty` adds indentation.
    pub fn to_json(value: &Value, pretty: bool) -> Result<String, DomainError> {
        let text = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServerConfiguration;
    use std::collections::BTreeMap;

    fn server(name: &str, enabled: bool) -> McpServer {
        let config =
            ServerConfiguration::url(format!("https://{name}.example.com"), BTreeMap::new()).unwrap();
        McpServer::create(name, config, enabled, None).unwrap()
    }

    #[test]
    fn test_export_enabled_empty() {
        let exported = ConfigurationExporter::export_enabled(&Vec::<McpServer>::new());
        assert!(exported.is_empty());
    }

    #[test]
    fn test_export_enabled_skips_disabled() {
        let servers = vec![server("alpha", true), server("beta", false)];
        let exported = ConfigurationExporter::export_enabled(&servers);

        assert_eq!(exported.len(), 1);
        assert_eq!(
            exported.get("alpha"),
            Some(&json!({"url": "https://alpha.example.com", "headers": {}}))
        );
        assert!(!exported.contains_key("beta"));
    }

    #[test]
    fn test_metadata_counts() {
        let servers = vec![server("alpha", true), server("beta", false), server("gamma", false)];
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let value = ConfigurationExporter::export_with_metadata_at(&servers, at);

        assert_eq!(value["metadata"]["total"], 3);
        assert_eq!(value["metadata"]["enabled"], 1);
        assert_eq!(value["metadata"]["disabled"], 2);
        assert_eq!(value["metadata"]["exportedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(value["servers"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_pretty_output_is_sorted() {
        let value = json!({"zeta": 1, "alpha": {"b": 2, "a": 1}});
        let text = ConfigurationExporter::to_json(&value, true).unwrap();

        let alpha = text.find("\"alpha\"").unwrap();
        let zeta = text.find("\"zeta\"").unwrap();
        assert!(alpha < zeta);
        assert!(text.find("\"a\"").unwrap() < text.find("\"b\"").unwrap());
        assert!(text.contains('\n'));

        let compact = ConfigurationExporter::to_json(&value, false).unwrap();
        assert!(!compact.contains('\n'));
    }
}
