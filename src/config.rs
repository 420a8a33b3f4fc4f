use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.nutriscan/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Open Food Facts endpoint settings.
    pub api: ApiConfig,
    /// Spreadsheet export settings.
    pub export: ExportConfig,
    /// Vision model settings for the object counter.
    pub vision: VisionConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "https://world.openfoodfacts.net".to_string(),
            timeout_secs: 10,
            user_agent: format!("nutriscan/{} (nutrition lookup tool)", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Workbook path used when `--report xlsx` is given without `--xlsx`.
    pub xlsx_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            xlsx_path: PathBuf::from("nutrition_report.xlsx"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    pub model: String,
    /// Environment variable holding the API key. The key itself never lives
    /// in the config file.
    pub api_key_env: String,
}

impl Default for VisionConfig {
    fn default() -> Self {
        VisionConfig {
            model: "gemini-1.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `./.nutriscan/config.toml`
/// 3. `~/.config/nutriscan/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = Path::new(".nutriscan").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("nutriscan").join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
