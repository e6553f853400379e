//! Relationship catalog decoded from platform metadata.

use std::collections::BTreeMap;

use base64::Engine;

use super::RelationshipDescriptor;
use crate::error::Result;

/// Mapping from relationship name to its endpoints, in platform order.
///
/// An absent name means the relationship is not provisioned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipCatalog {
    relationships: BTreeMap<String, Vec<RelationshipDescriptor>>,
}

impl RelationshipCatalog {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a base64-encoded JSON payload.
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
        let relationships = serde_json::from_slice(&bytes)?;
        Ok(Self { relationships })
    }

    /// Decode a plain JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let relationships = serde_json::from_str(json)?;
        Ok(Self { relationships })
    }

    /// Add a relationship, replacing any existing endpoints under that name.
    pub fn with_relationship(
        mut self,
        name: impl Into<String>,
        endpoints: Vec<RelationshipDescriptor>,
    ) -> Self {
        self.relationships.insert(name.into(), endpoints);
        self
    }

    /// Get all endpoints of a relationship.
    pub fn lookup(&self, name: &str) -> Option<&[RelationshipDescriptor]> {
        self.relationships.get(name).map(Vec::as_slice)
    }

    /// Check whether a relationship is provisioned.
    pub fn contains(&self, name: &str) -> bool {
        self.relationships.contains_key(name)
    }

    /// Get the primary endpoint of a relationship.
    ///
    /// When any endpoint carries an `is_master` flag, the first one flagged
    /// `true` is returned and `None` if none is. Endpoints of services without
    /// replication carry no flag; the first endpoint is then the primary.
    pub fn primary(&self, name: &str) -> Option<&RelationshipDescriptor> {
        let endpoints = self.relationships.get(name)?;

        let flagged = endpoints.iter().any(|e| e.query.is_master.is_some());
        if flagged {
            endpoints.iter().find(|e| e.is_master())
        } else {
            endpoints.first()
        }
    }

    /// Return the first name in `candidates` that is provisioned.
    pub fn first_of<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates.iter().copied().find(|name| self.contains(name))
    }

    /// List provisioned relationship names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.relationships.keys().map(String::as_str).collect()
    }

    /// Number of provisioned relationships.
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// Check whether no relationship is provisioned.
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn encode(json: &str) -> String {
        base64::engine::general_purpose::STANDARD.encode(json)
    }

    fn replica_set() -> RelationshipCatalog {
        RelationshipCatalog::empty().with_relationship(
            "database",
            vec![
                RelationshipDescriptor::new("mysql", "replica.internal", 3306).with_master(false),
                RelationshipDescriptor::new("mysql", "master.internal", 3306).with_master(true),
                RelationshipDescriptor::new("mysql", "other.internal", 3306).with_master(true),
            ],
        )
    }

    #[test]
    fn test_decode_encoded_payload() {
        let payload = encode(
            r#"{"database": [{"scheme": "mysql", "host": "database.internal", "port": 3306}],
                "redis": [{"scheme": "redis", "host": "redis.internal", "port": 6379}]}"#,
        );
        let catalog = RelationshipCatalog::from_encoded(&payload).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["database", "redis"]);
        assert_eq!(catalog.lookup("redis").unwrap()[0].host, "redis.internal");
        assert!(catalog.lookup("solr").is_none());
    }

    #[test]
    fn test_empty_object_is_empty_catalog() {
        let catalog = RelationshipCatalog::from_encoded(&encode("{}")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_base64_is_malformed() {
        let err = RelationshipCatalog::from_encoded("not base64 at all!").unwrap_err();
        assert!(matches!(err, Error::MalformedMetadata(_)));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = RelationshipCatalog::from_encoded(&encode("{\"database\": ")).unwrap_err();
        assert!(matches!(err, Error::MalformedMetadata(_)));

        let err = RelationshipCatalog::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::MalformedMetadata(_)));
    }

    #[test]
    fn test_primary_picks_first_master() {
        let catalog = replica_set();
        assert_eq!(catalog.primary("database").unwrap().host, "master.internal");
    }

    #[test]
    fn test_primary_fails_closed_without_master() {
        let catalog = RelationshipCatalog::empty().with_relationship(
            "database",
            vec![
                RelationshipDescriptor::new("mysql", "a.internal", 3306).with_master(false),
                RelationshipDescriptor::new("mysql", "b.internal", 3306),
            ],
        );
        assert!(catalog.primary("database").is_none());
    }

    #[test]
    fn test_primary_unflagged_uses_first() {
        let catalog = RelationshipCatalog::empty().with_relationship(
            "redis",
            vec![
                RelationshipDescriptor::new("redis", "first.internal", 6379),
                RelationshipDescriptor::new("redis", "second.internal", 6379),
            ],
        );
        assert_eq!(catalog.primary("redis").unwrap().host, "first.internal");
    }

    #[test]
    fn test_primary_absent_or_empty() {
        let catalog = RelationshipCatalog::empty().with_relationship("solr", vec![]);
        assert!(catalog.primary("solr").is_none());
        assert!(catalog.primary("missing").is_none());
        assert!(catalog.contains("solr"));
    }

    #[test]
    fn test_first_of_precedence() {
        let catalog = RelationshipCatalog::empty()
            .with_relationship("redis", vec![])
            .with_relationship("redis_cache", vec![]);

        assert_eq!(
            catalog.first_of(&["rediscache", "redis_cache", "redis"]),
            Some("redis_cache")
        );
        assert_eq!(catalog.first_of(&["redissession", "redis"]), Some("redis"));
        assert_eq!(catalog.first_of(&["memcached"]), None);
    }
}
