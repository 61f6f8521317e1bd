#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::collections::HashMap;
use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiURL,
    ConfigFile,
    Currency,
    SessionFile,
}

/// Per-user cache directory for trimslot state and logs.
pub fn cache_dir() -> path::PathBuf {
    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("trimslot");
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        #[cfg(not(target_os = "macos"))]
        let config_path = cache_dir().join("config.toml");
        #[cfg(target_os = "macos")]
        let config_path = dirs::home_dir()
            .unwrap_or_else(env::temp_dir)
            .join(".config/trimslot/config.toml");

        match key {
            ConfigKey::ApiURL => return "http://localhost:8000".to_string(),
            ConfigKey::Currency => return "R$".to_string(),
            ConfigKey::SessionFile => {
                return cache_dir().join("session.yaml").to_string_lossy().to_string();
            }
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
        }
    }

    /// Reads a TOML config file into key/value pairs. Unknown keys are ignored.
    async fn read_file(config_path: &path::Path) -> Result<HashMap<ConfigKey, String>> {
        let mut values = HashMap::new();
        let toml_str = fs::read_to_string(config_path).await?;
        let doc = toml_str.parse::<toml_edit::Document>()?;

        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }

            if let Some(val) = doc.get(&key.to_string()) {
                match val.as_str() {
                    Some(val_str) if val_str.is_empty() => continue,
                    Some(val_str) => {
                        values.insert(key, val_str.to_string());
                    }
                    None => {
                        bail!(format!(
                            "config.toml has an invalid value for key '{key}', expected a string"
                        ));
                    }
                }
            }
        }

        return Ok(values);
    }

    /// Resolves every key from defaults, then the config file, then flags and
    /// environment variables. Nothing is applied if the file fails to parse.
    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        let mut values = ConfigKey::iter()
            .map(|key| return (key, Config::default(key)))
            .collect::<HashMap<ConfigKey, String>>();

        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                values.insert(ConfigKey::ConfigFile, arg_config_file.to_string());
            }
        }

        let config_path = path::PathBuf::from(
            values
                .get(&ConfigKey::ConfigFile)
                .cloned()
                .unwrap_or_else(|| return Config::default(ConfigKey::ConfigFile)),
        );
        if config_path.exists() {
            values.extend(Config::read_file(&config_path).await?);
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    values.insert(key, val.to_string());
                }
            }
        }

        for (key, val) in values.iter() {
            Config::set(*key, val);
        }

        tracing::debug!(
            api_url = Config::get(ConfigKey::ApiURL),
            config_file = Config::get(ConfigKey::ConfigFile),
            currency = Config::get(ConfigKey::Currency),
            session_file = Config::get(ConfigKey::SessionFile),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let description = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    .and_then(|arg| return arg.get_help())
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                let description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let val = Config::default(key);
                return Some(format!("# {description}\n{key} = {val:?}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
