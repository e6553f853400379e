//! Relationship endpoint descriptors.

use serde::{Deserialize, Deserializer};

/// Query flags attached to an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EndpointQuery {
    /// Whether this endpoint is the writable member of a replica set.
    #[serde(default)]
    pub is_master: Option<bool>,
}

/// One connection endpoint of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelationshipDescriptor {
    /// URL scheme (e.g. `mysql`, `pgsql`, `redis`).
    pub scheme: String,
    /// Username, if the service requires one.
    #[serde(default)]
    pub username: Option<String>,
    /// Password, if the service requires one.
    #[serde(default)]
    pub password: Option<String>,
    /// Host name.
    pub host: String,
    /// Port number.
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
    /// Path component (database name, core path, ...).
    #[serde(default)]
    pub path: Option<String>,
    /// Engine tag of the form `engine:version`.
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,
    /// Endpoint flags.
    #[serde(default)]
    pub query: EndpointQuery,
    /// Service name on the platform.
    #[serde(default)]
    pub service: Option<String>,
    /// Endpoint name within the service.
    #[serde(default)]
    pub rel: Option<String>,
    /// Internal IP address.
    #[serde(default)]
    pub ip: Option<String>,
    /// Cluster identifier.
    #[serde(default)]
    pub cluster: Option<String>,
    /// Fully qualified host name.
    #[serde(default)]
    pub hostname: Option<String>,
}

/// Engine and version parsed from a `type` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    /// Engine name as tagged by the platform.
    pub engine: String,
    /// Version, when the tag carries one.
    pub version: Option<String>,
}

impl VersionSpec {
    /// Parse an `engine:version` tag.
    ///
    /// A tag without a colon names the engine only.
    pub fn parse(tag: &str) -> Self {
        match tag.split_once(':') {
            Some((engine, version)) if !version.is_empty() => Self {
                engine: engine.to_string(),
                version: Some(version.to_string()),
            },
            Some((engine, _)) => Self {
                engine: engine.to_string(),
                version: None,
            },
            None => Self {
                engine: tag.to_string(),
                version: None,
            },
        }
    }
}

impl RelationshipDescriptor {
    /// Create a descriptor with the required fields only.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            username: None,
            password: None,
            host: host.into(),
            port,
            path: None,
            type_tag: None,
            query: EndpointQuery::default(),
            service: None,
            rel: None,
            ip: None,
            cluster: None,
            hostname: None,
        }
    }

    /// Set the credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the engine tag.
    pub fn with_type(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = Some(tag.into());
        self
    }

    /// Set the master flag.
    pub fn with_master(mut self, is_master: bool) -> Self {
        self.query.is_master = Some(is_master);
        self
    }

    /// Username, or an empty string.
    pub fn username_or_empty(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    /// Password, or an empty string.
    pub fn password_or_empty(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }

    /// Path, or an empty string.
    pub fn path_or_empty(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }

    /// Whether this endpoint is flagged as the master.
    pub fn is_master(&self) -> bool {
        self.query.is_master.unwrap_or(false)
    }

    /// Engine and version from the `type` tag, if tagged.
    pub fn version_spec(&self) -> Option<VersionSpec> {
        self.type_tag.as_deref().map(VersionSpec::parse)
    }
}

/// Ports arrive as integers, or as numeric strings from older payloads.
fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(u16),
        Text(String),
    }

    match RawPort::deserialize(deserializer)? {
        RawPort::Number(port) => Ok(port),
        RawPort::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid port: {:?}", text))),
    }
}
