//! Redis cache and session endpoints.

use crate::catalog::RelationshipDescriptor;

/// Format a cache endpoint as `host:port`.
pub fn cache_dsn(descriptor: &RelationshipDescriptor) -> String {
    format!("{}:{}", descriptor.host, descriptor.port)
}

/// Session handler settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Host name.
    pub host: String,
    /// Port, as a string.
    pub port: String,
    /// `redis://host:port`.
    pub url: String,
}

impl SessionSettings {
    /// Build the settings from an endpoint.
    pub fn from_descriptor(descriptor: &RelationshipDescriptor) -> Self {
        Self {
            host: descriptor.host.clone(),
            port: descriptor.port.to_string(),
            url: format!("redis://{}:{}", descriptor.host, descriptor.port),
        }
    }

    /// Variable name/value pairs in write order.
    pub fn variables(&self) -> [(&'static str, &str); 3] {
        [
            ("SESSION_REDIS_HOST", self.host.as_str()),
            ("SESSION_REDIS_PORT", self.port.as_str()),
            ("SESSION_REDIS_URL", self.url.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dsn() {
        let d = RelationshipDescriptor::new("redis", "rediscache.internal", 6379);
        assert_eq!(cache_dsn(&d), "rediscache.internal:6379");
    }

    #[test]
    fn test_session_settings() {
        let d = RelationshipDescriptor::new("redis", "redissession.internal", 6379);
        let settings = SessionSettings::from_descriptor(&d);

        assert_eq!(settings.host, "redissession.internal");
        assert_eq!(settings.port, "6379");
        assert_eq!(settings.url, "redis://redissession.internal:6379");
    }
}
