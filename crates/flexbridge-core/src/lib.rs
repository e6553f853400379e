//! Flexbridge Core - platform relationship metadata to framework variables.
//!
//! A hosting platform describes the services bound to an application as a
//! base64-encoded JSON map of relationships. Frameworks instead expect
//! discrete variables such as `DATABASE_URL` or `CACHE_DSN`. This crate
//! decodes the relationships and formats every provisioned service as the
//! variables its consumer reads.
//!
//! # Quick Start
//!
//! ```ignore
//! use flexbridge_core::{map_environment, BridgeConfig, ProcessSink};
//!
//! fn main() -> Result<(), flexbridge_core::Error> {
//!     let mut sink = ProcessSink::new();
//!     let config = BridgeConfig::from_sink(&sink);
//!     let report = map_environment(&mut sink, &config)?;
//!     println!("{} variables set ({})", report.len(), report.phase);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod mapper;
pub mod platform;
pub mod sink;

pub use catalog::{EndpointQuery, RelationshipCatalog, RelationshipDescriptor, VersionSpec};
pub use config::{BridgeConfig, RelationshipNames};
pub use error::{Error, Result};
pub use format::Engine;
pub use mapper::{map_environment, MappingReport};
pub use platform::{Phase, PlatformEnvironment};
pub use sink::{validate_name, EnvironmentSink, FanOutSink, MemorySink, ProcessSink};
