use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HolonetError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolonetConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSettings {
    /// Optional path to a JSON log file; stderr logging is always on.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl HolonetConfig {
    /// Loads `holonet.yml`. An explicit path must exist; without one, a
    /// missing file in the working directory falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(HolonetError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let default_path = Path::new("holonet.yml");
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_config_present() {
        let config = HolonetConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn partial_yaml_keeps_field_defaults() {
        let config: HolonetConfig = serde_yaml::from_str("server:\n  port: 8080\n").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let result = HolonetConfig::load(Some(Path::new("/nonexistent/holonet.yml")));

        assert!(matches!(result, Err(HolonetError::Config(_))));
    }

    #[test]
    fn loads_log_file_setting() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("holonet.yml");
        std::fs::write(&path, "log:\n  file: /tmp/holonet.log\n").unwrap();

        let config = HolonetConfig::load(Some(&path)).unwrap();

        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/holonet.log")));
    }
}
