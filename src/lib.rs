//! Download FTDC (full time diagnostic data capture) archives of MongoDB Atlas
//! replica sets and shards.
//!
//! A run resolves the replica set, creates a log collection job, polls it
//! until it is done and streams the archive to disk. See [`FtdcLoader`].

pub mod config;
pub mod download;
pub mod error;
pub mod job;
pub mod model;
pub mod poller;
pub mod progress;
pub mod resolver;
pub mod service;
pub mod session;

pub use config::AtlasConfig;
pub use error::{Error, Result};
pub use service::{FtdcDataService, FtdcLoader};
pub use session::{AtlasSession, Credentials};
