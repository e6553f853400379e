//! Environment stores.
//!
//! The mapper reads and writes variables through [`EnvironmentSink`] so the
//! formatting logic never touches process state directly. Production code
//! writes to the process environment (possibly fanned out to further stores);
//! tests use [`MemorySink`].

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Marker that makes a name look like a request header to web runtimes.
const HEADER_MARKER: &str = "HTTP_";

/// A readable and writable set of environment variables.
pub trait EnvironmentSink {
    /// Get a variable's value.
    fn get(&self, name: &str) -> Option<String>;

    /// Set a variable's value.
    fn set(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Reject names a web runtime could mistake for a request header.
///
/// Runtimes expose request headers as `HTTP_*` server variables, so a
/// variable with that marker in its name cannot be told apart from
/// client-supplied input.
pub fn validate_name(name: &str) -> Result<()> {
    if name.contains(HEADER_MARKER) {
        return Err(Error::AmbiguousName(name.to_string()));
    }
    Ok(())
}

/// In-memory variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    vars: BTreeMap<String, String>,
}

impl MemorySink {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for setting up input variables.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Check whether a variable is set.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// All variables in name order.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

impl EnvironmentSink for MemorySink {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// The current process environment.
///
/// Child processes spawned afterwards inherit everything written here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSink;

impl ProcessSink {
    /// Create a process sink.
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentSink for ProcessSink {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        // set_var panics on these instead of reporting them.
        let reason = if name.is_empty() {
            Some("empty name")
        } else if name.contains('=') {
            Some("name contains '='")
        } else if name.contains('\0') {
            Some("name contains NUL")
        } else if value.contains('\0') {
            Some("value contains NUL")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(Error::Write {
                name: name.to_string(),
                reason: reason.to_string(),
            });
        }

        std::env::set_var(name, value);
        Ok(())
    }
}

/// Writes to several stores; reads from the first store holding a value.
///
/// A write succeeds only when every store accepted it.
#[derive(Default)]
pub struct FanOutSink {
    stores: Vec<Box<dyn EnvironmentSink>>,
}

impl FanOutSink {
    /// Create a fan-out with no stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a store. Stores are written and read in insertion order.
    pub fn with_store(mut self, store: impl EnvironmentSink + 'static) -> Self {
        self.stores.push(Box::new(store));
        self
    }

    /// Number of stores.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Check whether there are no stores.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl EnvironmentSink for FanOutSink {
    fn get(&self, name: &str) -> Option<String> {
        self.stores.iter().find_map(|store| store.get(name))
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        for store in &mut self.stores {
            store.set(name, value)?;
        }
        Ok(())
    }
}
