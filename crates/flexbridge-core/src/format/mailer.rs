//! Mailer transport URL.

/// Port of the platform SMTP relay.
pub const SMTP_PORT: u16 = 25;

/// Format the mailer URL for the platform SMTP host.
///
/// Without a host, mail delivery is disabled on the environment and the
/// `null` transport is used instead.
pub fn mailer_url(smtp_host: Option<&str>) -> String {
    match smtp_host.filter(|host| !host.is_empty()) {
        Some(host) => format!("smtp://{}:{}/", host, SMTP_PORT),
        None => format!("null://localhost:{}/", SMTP_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_host() {
        assert_eq!(mailer_url(Some("1.2.3.4")), "smtp://1.2.3.4:25/");
    }

    #[test]
    fn test_disabled_mail() {
        assert_eq!(mailer_url(Some("")), "null://localhost:25/");
        assert_eq!(mailer_url(None), "null://localhost:25/");
    }
}
