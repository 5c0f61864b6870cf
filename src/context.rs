use crate::catalog::{CatalogClient, DataSource};
use crate::config::{Config, ConfigLoader};
use crate::error::Result;
use std::path::PathBuf;

/// Application context that combines configuration, environment variables, and CLI arguments
pub struct AppContext {
    pub config: Config,
    /// Config file in use, if one could be determined
    pub config_path: Option<PathBuf>,
}

impl AppContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => (ConfigLoader::load_from(&path)?, Some(path)),
            None => (ConfigLoader::load()?, ConfigLoader::config_path()),
        };

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Priority: CLI flag / KONOFAN_ASSETS_SOURCE > config > default
    pub fn with_overrides(mut self, source: Option<String>) -> Self {
        if let Some(source) = source {
            self.config.source.data_source = source;
        }
        self
    }

    pub fn data_source(&self) -> Result<DataSource> {
        self.config.source.data_source.parse()
    }

    /// Build the catalog client for the configured data source
    pub fn client(&self) -> Result<CatalogClient> {
        let options = self.config.network.to_client_options()?;
        CatalogClient::new(self.data_source()?, options)
    }
}
