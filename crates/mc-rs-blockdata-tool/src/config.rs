use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ToolError;

#[derive(Debug, Default, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportSection {
    #[serde(default = "default_export_path")]
    pub path: String,
    #[serde(default)]
    pub pretty: bool,
}

fn default_export_path() -> String {
    "blockdata.json".into()
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            path: default_export_path(),
            pretty: false,
        }
    }
}

impl ToolConfig {
    /// Load `path`, or the defaults if it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ToolError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ToolError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
