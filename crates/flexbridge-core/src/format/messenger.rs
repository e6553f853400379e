//! Messenger transport DSN for AMQP brokers.

use crate::catalog::RelationshipDescriptor;

use super::userinfo;

/// Virtual host used when the endpoint names none (`/`, encoded).
pub const DEFAULT_VHOST: &str = "%2f";

/// Queue path appended after the virtual host.
pub const MESSAGES_PATH: &str = "messages";

/// Format an AMQP endpoint as `MESSENGER_TRANSPORT_DSN`.
pub fn messenger_dsn(descriptor: &RelationshipDescriptor) -> String {
    let vhost = match descriptor.path.as_deref() {
        Some(path) if !path.is_empty() => urlencoding::encode(path).into_owned(),
        _ => DEFAULT_VHOST.to_string(),
    };

    format!(
        "{}://{}@{}:{}/{}/{}",
        descriptor.scheme,
        userinfo(descriptor),
        descriptor.host,
        descriptor.port,
        vhost,
        MESSAGES_PATH
    )
}
