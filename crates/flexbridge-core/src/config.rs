//! Bridge configuration.

use crate::sink::EnvironmentSink;

/// Default prefix of platform-provided variables.
pub const DEFAULT_PREFIX: &str = "PLATFORM_";

/// Default `APP_ENV` when none is set.
pub const DEFAULT_APP_ENV: &str = "prod";

/// Variable that renames the database relationship.
pub const DB_RELATIONSHIP_OVERRIDE: &str = "APP_DB_USERNAME";

/// Variable that renames the MongoDB relationship.
pub const MONGODB_RELATIONSHIP_OVERRIDE: &str = "APP_MONGODB_USERNAME";

/// Relationship names each formatter reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipNames {
    /// Relational database.
    pub database: String,
    /// MongoDB.
    pub mongodb: String,
    /// AMQP broker.
    pub messenger: String,
    /// Elasticsearch.
    pub elasticsearch: String,
    /// Solr.
    pub solr: String,
    /// Redis shared by cache and sessions.
    pub redis: String,
    /// Dedicated cache redis, in precedence order.
    pub redis_cache: Vec<String>,
    /// Dedicated session redis, in precedence order.
    pub redis_session: Vec<String>,
}

impl Default for RelationshipNames {
    fn default() -> Self {
        Self {
            database: "database".to_string(),
            mongodb: "mongodatabase".to_string(),
            messenger: "rabbitmq".to_string(),
            elasticsearch: "elasticsearch".to_string(),
            solr: "solr".to_string(),
            redis: "redis".to_string(),
            redis_cache: vec!["rediscache".to_string(), "redis_cache".to_string()],
            redis_session: vec!["redissession".to_string(), "redis_session".to_string()],
        }
    }
}

impl RelationshipNames {
    /// Cache candidates followed by the shared name.
    pub fn cache_candidates(&self) -> Vec<&str> {
        self.redis_cache
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.redis.as_str()))
            .collect()
    }

    /// Session candidates followed by the shared name.
    pub fn session_candidates(&self) -> Vec<&str> {
        self.redis_session
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.redis.as_str()))
            .collect()
    }
}

/// Configuration of one mapping pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Prefix of platform-provided variables.
    pub prefix: String,
    /// `APP_ENV` value when none is set.
    pub default_app_env: String,
    /// Relationship names.
    pub names: RelationshipNames,
}

impl BridgeConfig {
    /// Create a configuration with default names.
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            default_app_env: DEFAULT_APP_ENV.to_string(),
            names: RelationshipNames::default(),
        }
    }

    /// Default configuration with application overrides read from `sink`.
    pub fn from_sink(sink: &dyn EnvironmentSink) -> Self {
        let mut config = Self::new();
        if let Some(name) = sink.get(DB_RELATIONSHIP_OVERRIDE).filter(|v| !v.is_empty()) {
            config.names.database = name;
        }
        if let Some(name) = sink
            .get(MONGODB_RELATIONSHIP_OVERRIDE)
            .filter(|v| !v.is_empty())
        {
            config.names.mongodb = name;
        }
        config
    }

    /// Set the platform variable prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the default `APP_ENV`.
    pub fn with_default_app_env(mut self, app_env: impl Into<String>) -> Self {
        self.default_app_env = app_env.into();
        self
    }

    /// Set the relationship names.
    pub fn with_names(mut self, names: RelationshipNames) -> Self {
        self.names = names;
        self
    }

    /// Set the database relationship name.
    pub fn with_database_relationship(mut self, name: impl Into<String>) -> Self {
        self.names.database = name.into();
        self
    }

    /// Set the MongoDB relationship name.
    pub fn with_mongodb_relationship(mut self, name: impl Into<String>) -> Self {
        self.names.mongodb = name.into();
        self
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}
