//! Search index endpoints.

use crate::catalog::RelationshipDescriptor;

/// Solr URL prefix when the endpoint path has none.
pub const DEFAULT_SOLR_PREFIX: &str = "solr";

/// Solr core when the endpoint path names none.
pub const DEFAULT_SOLR_CORE: &str = "collection1";

/// Elasticsearch client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElasticsearchSettings {
    /// Host name.
    pub host: String,
    /// Port, as a string.
    pub port: String,
    /// `http://host:port`.
    pub url: String,
}

impl ElasticsearchSettings {
    /// Build the settings from an endpoint.
    pub fn from_descriptor(descriptor: &RelationshipDescriptor) -> Self {
        Self {
            host: descriptor.host.clone(),
            port: descriptor.port.to_string(),
            url: format!("http://{}:{}", descriptor.host, descriptor.port),
        }
    }

    /// Variable name/value pairs in write order.
    pub fn variables(&self) -> [(&'static str, &str); 3] {
        [
            ("ELASTICSEARCH_HOST", self.host.as_str()),
            ("ELASTICSEARCH_PORT", self.port.as_str()),
            ("ELASTICSEARCH_URL", self.url.as_str()),
        ]
    }
}

/// Solr client settings.
///
/// The platform reports a core path such as `solr/collection1`; clients want
/// the base URL and the core name separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolrSettings {
    /// Base URL, e.g. `http://solr.internal:8080/solr`.
    pub dsn: String,
    /// Core name.
    pub core: String,
}

impl SolrSettings {
    /// Build the settings from an endpoint.
    pub fn from_descriptor(descriptor: &RelationshipDescriptor) -> Self {
        let path = descriptor.path_or_empty().trim_matches('/');
        let (prefix, core) = match path.rsplit_once('/') {
            Some((prefix, core)) => (prefix, core),
            None => ("", path),
        };
        let prefix = if prefix.is_empty() {
            DEFAULT_SOLR_PREFIX
        } else {
            prefix
        };
        let core = if core.is_empty() {
            DEFAULT_SOLR_CORE
        } else {
            core
        };

        Self {
            dsn: format!("http://{}:{}/{}", descriptor.host, descriptor.port, prefix),
            core: core.to_string(),
        }
    }

    /// Variable name/value pairs in write order.
    pub fn variables(&self) -> [(&'static str, &str); 2] {
        [("SOLR_DSN", self.dsn.as_str()), ("SOLR_CORE", self.core.as_str())]
    }
}
