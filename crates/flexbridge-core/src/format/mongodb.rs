//! Doctrine MongoDB ODM settings.
//!
//! The ODM bundle takes discrete values rather than a single URL:
//!
//! ```yaml
//! doctrine_mongodb:
//!     connections:
//!         default:
//!             server: '%env(MONGODB_SERVER)%'
//!             options: { username: '%env(MONGODB_USERNAME)%', password: '%env(MONGODB_PASSWORD)%', authSource: '%env(MONGODB_DB)%' }
//!     default_database: '%env(MONGODB_DB)%'
//! ```

use crate::catalog::RelationshipDescriptor;

/// The four MongoDB variables, always produced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    /// Server URL without credentials.
    pub server: String,
    /// Database name.
    pub database: String,
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

impl MongoSettings {
    /// Build the settings from an endpoint.
    pub fn from_descriptor(descriptor: &RelationshipDescriptor) -> Self {
        Self {
            server: format!("mongodb://{}:{}", descriptor.host, descriptor.port),
            database: descriptor.path_or_empty().to_string(),
            username: descriptor.username_or_empty().to_string(),
            password: descriptor.password_or_empty().to_string(),
        }
    }

    /// Variable name/value pairs in write order.
    pub fn variables(&self) -> [(&'static str, &str); 4] {
        [
            ("MONGODB_SERVER", self.server.as_str()),
            ("MONGODB_DB", self.database.as_str()),
            ("MONGODB_USERNAME", self.username.as_str()),
            ("MONGODB_PASSWORD", self.password.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_descriptor() {
        let d = RelationshipDescriptor::new("mongodb", "mongodatabase.internal", 27017)
            .with_credentials("main_username", "main_password")
            .with_path("main")
            .with_master(true);
        let settings = MongoSettings::from_descriptor(&d);

        assert_eq!(settings.server, "mongodb://mongodatabase.internal:27017");
        assert_eq!(settings.database, "main");
        assert_eq!(settings.username, "main_username");
        assert_eq!(settings.password, "main_password");
        assert!(!settings.server.contains("main_password"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let d = RelationshipDescriptor::new("mongodb", "mongo.internal", 27017);
        let settings = MongoSettings::from_descriptor(&d);

        let names: Vec<_> = settings.variables().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["MONGODB_SERVER", "MONGODB_DB", "MONGODB_USERNAME", "MONGODB_PASSWORD"]
        );
        assert_eq!(settings.database, "");
        assert_eq!(settings.username, "");
    }
}
