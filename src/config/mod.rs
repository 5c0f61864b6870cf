pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, NetworkConfig, SourceConfig, TreeConfig};
