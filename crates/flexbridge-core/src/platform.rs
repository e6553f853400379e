//! Platform detection.

use std::fmt;

use crate::catalog::RelationshipCatalog;
use crate::error::Result;
use crate::sink::EnvironmentSink;

/// Where in the deployment lifecycle the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not running on the platform.
    Off,
    /// Build hook: application known, no environment and no services yet.
    Build,
    /// Deployed environment with live services.
    Runtime,
}

impl Phase {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Off => "off",
            Phase::Build => "build",
            Phase::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the platform-provided variables.
///
/// Empty variables are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformEnvironment {
    /// Application name; its presence marks the platform.
    pub application_name: Option<String>,
    /// Environment name; present only at runtime.
    pub environment: Option<String>,
    /// Base64-encoded relationship payload.
    pub relationships: Option<String>,
    /// Per-project random value, used as the application secret.
    pub project_entropy: Option<String>,
    /// SMTP relay host; empty when mail is disabled.
    pub smtp_host: Option<String>,
}

impl PlatformEnvironment {
    /// Read the platform variables with the given prefix.
    pub fn read(sink: &dyn EnvironmentSink, prefix: &str) -> Self {
        let var = |suffix: &str| {
            sink.get(&format!("{}{}", prefix, suffix))
                .filter(|value| !value.is_empty())
        };

        Self {
            // Older platform images only export the legacy name.
            application_name: var("APPLICATION_NAME").or_else(|| var("APPLICATION")),
            environment: var("ENVIRONMENT"),
            relationships: var("RELATIONSHIPS"),
            project_entropy: var("PROJECT_ENTROPY"),
            smtp_host: var("SMTP_HOST"),
        }
    }

    /// Determine the lifecycle phase.
    pub fn phase(&self) -> Phase {
        match (&self.application_name, &self.environment) {
            (None, _) => Phase::Off,
            (Some(_), None) => Phase::Build,
            (Some(_), Some(_)) => Phase::Runtime,
        }
    }

    /// Decode the relationship catalog.
    ///
    /// A missing payload yields an empty catalog; a malformed one is an error.
    pub fn catalog(&self) -> Result<RelationshipCatalog> {
        match &self.relationships {
            Some(encoded) => RelationshipCatalog::from_encoded(encoded),
            None => Ok(RelationshipCatalog::empty()),
        }
    }
}
