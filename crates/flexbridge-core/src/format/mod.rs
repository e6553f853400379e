//! Connection-string formatters.
//!
//! Each formatter turns one relationship endpoint into the value (or set of
//! values) a framework consumer expects. Formatters are pure; writing the
//! results into the environment is the mapper's job.

pub mod doctrine;
pub mod mailer;
pub mod messenger;
pub mod mongodb;
pub mod redis;
pub mod search;

pub use doctrine::{database_url, placeholder_url, Engine};
pub use mailer::mailer_url;
pub use messenger::messenger_dsn;
pub use mongodb::MongoSettings;
pub use redis::{cache_dsn, SessionSettings};
pub use search::{ElasticsearchSettings, SolrSettings};

use crate::catalog::RelationshipDescriptor;

/// `user:password` with both parts percent-encoded.
pub(crate) fn userinfo(descriptor: &RelationshipDescriptor) -> String {
    format!(
        "{}:{}",
        urlencoding::encode(descriptor.username_or_empty()),
        urlencoding::encode(descriptor.password_or_empty())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_userinfo_plain() {
        let d = RelationshipDescriptor::new("amqp", "h", 1).with_credentials("guest", "guest");
        assert_eq!(userinfo(&d), "guest:guest");
    }

    #[test]
    fn test_userinfo_missing_parts() {
        let d = RelationshipDescriptor::new("amqp", "h", 1);
        assert_eq!(userinfo(&d), ":");
    }
}
