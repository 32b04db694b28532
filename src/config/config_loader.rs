use crate::config::ClientConfig;
use crate::constants::ENV_PREFIX;
use crate::error::ConstructionError;
use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Assembles a [`ClientConfig`] from, in increasing precedence: the
/// defaults, an optional config file, `YEARNOW_*` environment variables and
/// an explicit `api_url` override. Validation runs once on the merged result.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file_path: Option<PathBuf>,
    api_url: Option<String>,
    env_source: Option<Map<String, String>>,
}

impl ConfigLoader {
    /// Loads a [`ClientConfig`] from `file_path`, picking the format from the
    /// file extension. `YEARNOW_*` environment variables override values
    /// from the file.
    pub fn load(file_path: PathBuf) -> Result<ClientConfig, ConstructionError> {
        ConfigLoader::default().with_file(file_path).build()
    }

    pub fn with_file(mut self, file_path: PathBuf) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// Replaces whatever `api_url` the file or environment carry.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    #[cfg(test)]
    fn with_env_source(mut self, env_source: Map<String, String>) -> Self {
        self.env_source = Some(env_source);
        self
    }

    pub fn build(self) -> Result<ClientConfig, ConstructionError> {
        let mut builder = Config::builder();

        if let Some(file_path) = &self.file_path {
            let file_format = Self::file_format(file_path)?;
            let path = file_path.to_str().ok_or_else(|| {
                ConfigError::NotFound(format!("Config path is not valid UTF-8: {file_path:?}"))
            })?;
            debug!("Loading client config from {path}");
            builder = builder.add_source(File::new(path, file_format));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(self.env_source),
        );

        if let Some(api_url) = self.api_url {
            builder = builder.set_override("api_url", api_url)?;
        }

        let client_config: ClientConfig = builder.build()?.try_deserialize()?;
        client_config.validate()?;
        Ok(client_config)
    }

    pub fn default_config_path() -> Option<PathBuf> {
        let pkg_name = env!("CARGO_PKG_NAME");

        ProjectDirs::from("", "", pkg_name)
            .map(|project_dirs| project_dirs.config_dir().join("config.toml"))
    }

    fn file_format(file_path: &Path) -> Result<FileFormat, ConfigError> {
        let Some(ext) = file_path.extension() else {
            return Err(ConfigError::NotFound(format!(
                "Could not find file extension on path {file_path:?}"
            )));
        };

        match ext.to_str() {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            Some("ron") => Ok(FileFormat::Ron),
            _ => Err(ConfigError::NotFound(format!(
                "File format not supported. File needs to end with .yaml, .json, .toml or .ron. {file_path:?}"
            ))),
        }
    }
}
