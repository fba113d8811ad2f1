pub mod config;
pub mod error;
pub mod fixtures;

pub use config::{CatalogConfig, IntegrityPolicy, OWNER_ALL_LABEL};
pub use error::CatalogError;
pub use fixtures::FixtureSet;
