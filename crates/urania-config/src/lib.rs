use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use urania::ChartSettings;

/// Where `urania.toml` is looked for when no path is given, relative to the
/// working directory (workspace root, or a crate directory under it).
pub const CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UraniaSettings {
    /// Swiss Ephemeris data directory; `None` lets the adapter pick its default
    pub ephemeris_path: Option<PathBuf>,
    pub chart: ChartSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    chart: ChartSettings,
}

/// Try the common relative paths for `configs/urania.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", CONFIG_PATHS);
}

/// Load settings from `path`, or from the default locations. A missing
/// default file yields default settings; a missing explicit file is an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<UraniaSettings> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {e}", p.display()))?,
        None => match read_config_toml_text() {
            Ok(text) => text,
            Err(_) => return Ok(UraniaSettings::default()),
        },
    };
    parse_settings(&text)
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let settings = UraniaSettings {
        ephemeris_path: root.ephemeris_path,
        chart: root.chart,
    };
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn validate_settings(settings: &UraniaSettings) -> anyhow::Result<()> {
    if let Some(path) = &settings.ephemeris_path {
        if !path.exists() {
            anyhow::bail!("ephemeris_path does not exist: {}", path.display());
        }
    }
    let chiron = &settings.chart.chiron_fallback;
    if !chiron.longitude.is_finite() {
        anyhow::bail!(
            "chart.chiron_fallback.longitude must be a finite number of degrees, got {}",
            chiron.longitude
        );
    }
    Ok(())
}
