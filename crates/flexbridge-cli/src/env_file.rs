//! Dotenv file store.
//!
//! Worker processes that are not children of the bootstrap (cron jobs,
//! queue consumers started by a supervisor) read their configuration from a
//! dotenv file instead of the inherited environment.

use std::collections::BTreeMap;
use std::path::PathBuf;

use flexbridge_core::{EnvironmentSink, Error};

use crate::formatter::dotenv_quote;

/// Variables mirrored into a dotenv file.
///
/// The file is rewritten on every write, so it always holds every variable
/// set so far. It only reflects this run; previous contents are replaced.
pub struct EnvFileSink {
    path: PathBuf,
    vars: BTreeMap<String, String>,
}

impl EnvFileSink {
    /// Create a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            vars: BTreeMap::new(),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.vars {
            out.push_str(name);
            out.push('=');
            out.push_str(&dotenv_quote(value));
            out.push('\n');
        }
        out
    }
}

impl EnvironmentSink for EnvFileSink {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> flexbridge_core::Result<()> {
        self.vars.insert(name.to_string(), value.to_string());
        std::fs::write(&self.path, self.render()).map_err(|e| Error::Write {
            name: name.to_string(),
            reason: format!("{}: {}", self.path.display(), e),
        })
    }
}
