use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::schema::Settings;
use crate::error::{Error, Result};

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `PLS__`) override it.
impl Settings {
    /// Load settings from the optional config file and environment.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "reading config");
            builder = builder.add_source(
                ::config::File::from(path.as_path())
                    .format(::config::FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(::config::Environment::with_prefix("PLS").separator("__"));

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }
}

/// Load settings, falling back to defaults when the config cannot be read.
///
/// Commands still work from explicit arguments alone, so a broken config file
/// only costs the defaults it would have provided.
pub fn load_settings() -> Settings {
    match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            warn!("failed to load config, using defaults: {e}");
            Settings::default()
        }
    }
}

/// Write the blank config template to `path`, creating parent folders.
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, Settings::template()?).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), "config template written");
    Ok(())
}

/// Resolve the config path from `PLS_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLS_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/pls/config.toml`
/// or `~/.config/pls/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("pls").join("config.toml"))
}
