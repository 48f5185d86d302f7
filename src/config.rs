use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::*;

/// Default geometry applied when a producer asks for a widget without
/// giving explicit dimensions.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct WidgetDefaults {
    pub bar_width: u32,
    pub bar_height: u32,
    pub graph_width: u32,
    pub graph_height: u32,
    pub gauge_width: u32,
    pub gauge_height: u32,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct ImageDefaults {
    pub width: u32,
    pub height: u32,
    pub no_cache: bool,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct DisplayConfig {
    pub widgets: WidgetDefaults,
    pub images: ImageDefaults,
}

impl Default for WidgetDefaults {
    fn default() -> WidgetDefaults {
        WidgetDefaults {
            bar_width: 100,
            bar_height: 8,
            graph_width: 200,
            graph_height: 50,
            gauge_width: 40,
            gauge_height: 40,
        }
    }
}

impl Default for ImageDefaults {
    fn default() -> ImageDefaults {
        ImageDefaults {
            width: 16,
            height: 16,
            no_cache: false,
        }
    }
}

impl DisplayConfig {
    pub fn new() -> Self {
        DisplayConfig {
            ..Default::default()
        }
    }

    /// Loads a display configuration from a TOML file
    ///
    /// # Arguments
    /// * `file_path` - Path of the configuration file
    ///
    /// # Returns
    /// The parsed configuration or an error when the file cannot be read
    /// or does not parse as TOML
    pub fn from_file(file_path: &PathBuf) -> Result<Self> {
        let content = parse(file_path)?;
        Self::from_toml(&content, &file_path.to_string_lossy())
    }

    /// Parses a display configuration from TOML content
    pub fn from_toml(content: &str, file: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::SerdeTomlError {
            file: file.to_string(),
            cause: e.to_string(),
        })
    }
}

pub fn parse(file_path: &PathBuf) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)
        .map_err(|e| Error::ConfigReadError {
            file: file_path.to_string_lossy().to_string(),
            cause: e.to_string(),
        })?
        .read_to_string(&mut config_content)?;
    Ok(config_content)
}
