use std::path::{Path, PathBuf};

use config::{Config, Environment};
use dirs::config_dir;
use log::warn;
use serde::Deserialize;

use crate::format::Glyphs;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub length: usize,
    pub human_readable: bool,
    pub probe: ProbeSettings,
    pub glyphs: GlyphSettings,
}

#[derive(Debug, Deserialize)]
pub struct ProbeSettings {
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GlyphSettings {
    pub filled: String,
    pub empty: String,
}

impl GlyphSettings {
    /// Only the first character of each setting is used so bars keep their
    /// width.
    pub fn glyphs(&self) -> Glyphs {
        let default = Glyphs::default();
        let pick = |value: &str, fallback: char, name: &str| {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                (Some(c), Some(_)) => {
                    warn!("glyphs.{name} {value:?} is longer than one character, using {c:?}");
                    c
                }
                (None, _) => {
                    warn!("glyphs.{name} is empty, using {fallback:?}");
                    fallback
                }
            }
        };
        Glyphs {
            filled: pick(&self.filled, default.filled, "filled"),
            empty: pick(&self.empty, default.empty, "empty"),
        }
    }
}

/// `<config dir>/duim/config.yaml`, if the platform has a config dir.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("duim").join("config.yaml"))
}

pub fn get_config() -> Result<Settings, config::ConfigError> {
    load(config_file().as_deref())
}

/// `DUIM_LENGTH`, `DUIM_HUMAN_READABLE`, `DUIM_PROBE__COMMAND` and so on:
/// one underscore after the prefix, two between nested keys.
pub fn environment() -> Environment {
    Environment::with_prefix("DUIM")
        .prefix_separator("_")
        .separator("__")
}

/// Defaults, then the optional YAML file, then `DUIM_*` variables.
pub fn load(file: Option<&Path>) -> Result<Settings, config::ConfigError> {
    load_with_env(file, environment())
}

fn load_with_env(file: Option<&Path>, env: Environment) -> Result<Settings, config::ConfigError> {
    let mut settings = Config::builder()
        .set_default("length", 20)?
        .set_default("human_readable", false)?
        .set_default("probe.command", "du")?
        .set_default("probe.args", vec!["-d", "1", "-B1"])?
        .set_default("glyphs.filled", "=")?
        .set_default("glyphs.empty", " ")?;

    if let Some(file) = file {
        settings = settings.add_source(config::File::from(file).required(false));
    }

    let settings = settings
        .add_source(env)
        .build()?
        .try_deserialize::<Settings>()?;
    if settings.length == 0 {
        return Err(config::ConfigError::Message(
            "length must be at least 1".to_string(),
        ));
    }
    Ok(settings)
}
