pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{convex::ConvexClient, storage::LocalStorage};
pub use config::settings::{IngestSettings, SettingsLayer};
pub use crate::core::{etl::EtlEngine, pages::PageReader, pipeline::WordIngestor};
pub use utils::error::{IngestError, Result};
