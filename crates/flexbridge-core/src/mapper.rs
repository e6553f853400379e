//! The mapping pass.
//!
//! Reads the platform variables once, then writes every variable the
//! provisioned relationships call for. The first error aborts the pass;
//! variables written before it stay written.

use tracing::{debug, info, warn};

use crate::catalog::{RelationshipCatalog, RelationshipDescriptor};
use crate::config::BridgeConfig;
use crate::error::Result;
use crate::format::{
    cache_dsn, database_url, mailer_url, messenger_dsn, placeholder_url, ElasticsearchSettings,
    MongoSettings, SessionSettings, SolrSettings,
};
use crate::platform::{Phase, PlatformEnvironment};
use crate::sink::{validate_name, EnvironmentSink};

/// Variables written by one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingReport {
    /// Detected phase.
    pub phase: Phase,
    /// Variables in write order.
    pub variables: Vec<(String, String)>,
}

impl MappingReport {
    fn new(phase: Phase) -> Self {
        Self {
            phase,
            variables: Vec::new(),
        }
    }

    /// Value written for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Names of the written variables.
    pub fn names(&self) -> Vec<&str> {
        self.variables.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of variables written.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check whether nothing was written.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Validates, writes and records variables.
struct Writer<'a> {
    sink: &'a mut dyn EnvironmentSink,
    report: MappingReport,
}

impl<'a> Writer<'a> {
    fn new(sink: &'a mut dyn EnvironmentSink, phase: Phase) -> Self {
        Self {
            sink,
            report: MappingReport::new(phase),
        }
    }

    /// Current non-empty value of a variable.
    fn existing(&self, name: &str) -> Option<String> {
        self.sink.get(name).filter(|value| !value.is_empty())
    }

    fn write(&mut self, name: &str, value: &str) -> Result<()> {
        validate_name(name)?;
        self.sink.set(name, value)?;
        debug!(variable = name, "set environment variable");
        self.report
            .variables
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn write_all(&mut self, variables: &[(&str, &str)]) -> Result<()> {
        for (name, value) in variables {
            self.write(name, value)?;
        }
        Ok(())
    }

    fn finish(self) -> MappingReport {
        self.report
    }
}

/// Map platform variables into framework variables.
pub fn map_environment(
    sink: &mut dyn EnvironmentSink,
    config: &BridgeConfig,
) -> Result<MappingReport> {
    let platform = PlatformEnvironment::read(&*sink, &config.prefix);
    let phase = platform.phase();
    info!(%phase, "mapping platform environment");

    let mut writer = Writer::new(sink, phase);
    match phase {
        Phase::Off => debug!("not running on the platform, nothing to map"),
        Phase::Build => writer.write("DATABASE_URL", &placeholder_url())?,
        Phase::Runtime => map_runtime(&mut writer, &platform, config)?,
    }

    let report = writer.finish();
    info!(%phase, variables = report.len(), "platform environment mapped");
    Ok(report)
}

fn map_runtime(
    writer: &mut Writer<'_>,
    platform: &PlatformEnvironment,
    config: &BridgeConfig,
) -> Result<()> {
    // Re-written even when already set so every store of a fan-out sees them.
    let secret = writer
        .existing("APP_SECRET")
        .or_else(|| platform.project_entropy.clone());
    if let Some(secret) = secret {
        writer.write("APP_SECRET", &secret)?;
    }
    let app_env = writer
        .existing("APP_ENV")
        .unwrap_or_else(|| config.default_app_env.clone());
    writer.write("APP_ENV", &app_env)?;

    let catalog = platform.catalog()?;
    debug!(relationships = ?catalog.names(), "relationship catalog decoded");
    let names = &config.names;

    if let Some(endpoint) = primary_endpoint(&catalog, &names.database) {
        writer.write("DATABASE_URL", &database_url(endpoint)?)?;
    }

    if let Some(endpoint) = primary_endpoint(&catalog, &names.mongodb) {
        writer.write_all(&MongoSettings::from_descriptor(endpoint).variables())?;
    }

    if let Some(endpoint) = primary_endpoint(&catalog, &names.messenger) {
        writer.write("MESSENGER_TRANSPORT_DSN", &messenger_dsn(endpoint))?;
    }

    if let Some(endpoint) = primary_endpoint(&catalog, &names.elasticsearch) {
        writer.write_all(&ElasticsearchSettings::from_descriptor(endpoint).variables())?;
    }

    if let Some(endpoint) = primary_endpoint(&catalog, &names.solr) {
        writer.write_all(&SolrSettings::from_descriptor(endpoint).variables())?;
    }

    // Cache and sessions resolve independently: a dedicated relationship wins
    // for its own purpose only.
    if let Some(name) = catalog.first_of(&names.cache_candidates()) {
        if let Some(endpoint) = primary_endpoint(&catalog, name) {
            writer.write("CACHE_DSN", &cache_dsn(endpoint))?;
        }
    }
    if let Some(name) = catalog.first_of(&names.session_candidates()) {
        if let Some(endpoint) = primary_endpoint(&catalog, name) {
            writer.write_all(&SessionSettings::from_descriptor(endpoint).variables())?;
        }
    }

    // Externally configured mail transports always win.
    let mail_url = mailer_url(platform.smtp_host.as_deref());
    for name in ["MAILER_URL", "MAILER_DSN"] {
        if writer.existing(name).is_none() {
            writer.write(name, &mail_url)?;
        }
    }

    Ok(())
}

fn primary_endpoint<'c>(
    catalog: &'c RelationshipCatalog,
    name: &str,
) -> Option<&'c RelationshipDescriptor> {
    if !catalog.contains(name) {
        debug!(relationship = name, "relationship not provisioned");
        return None;
    }
    let endpoint = catalog.primary(name);
    if endpoint.is_none() {
        warn!(relationship = name, "relationship has no primary endpoint, skipping");
    }
    endpoint
}
