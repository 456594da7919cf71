pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub use model::{AppConfig, LoggingConfig};

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("statedeck")
        .join("config.toml")
}

/// Load the config from `path`. A missing file means defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let mut config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config.seed.dedup_ids();
    config
        .validate()
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("statedeck-missing").join("nope.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.seed.products.len(), 6);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("statedeck-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.ui.price_step = 25.0;
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.ui.price_step, 25.0);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = std::env::temp_dir().join(format!("statedeck-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[ui\nstart_view = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    fn load_str(name: &str, contents: &str) -> Result<AppConfig> {
        let dir = std::env::temp_dir().join(format!("statedeck-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).unwrap();
        let result = load_config(&path);
        let _ = std::fs::remove_dir_all(&dir);
        result
    }

    #[test]
    fn test_rejects_non_positive_price_max() {
        for value in ["0.0", "-5.0", "nan"] {
            let err = load_str("max", &format!("[ui]\nprice_max = {value}\n")).unwrap_err();
            assert!(err.to_string().contains("Invalid config file"), "{value}: {err:#}");
            assert!(format!("{err:#}").contains("price_max"), "{value}: {err:#}");
        }
    }

    #[test]
    fn test_rejects_non_positive_price_step() {
        for value in ["0.0", "nan"] {
            let err = load_str("step", &format!("[ui]\nprice_step = {value}\n")).unwrap_err();
            assert!(format!("{err:#}").contains("price_step"), "{value}: {err:#}");
        }
    }

    #[test]
    fn test_rejects_bad_product_price() {
        for value in ["-1.0", "nan"] {
            let contents = format!(
                "[[seed.products]]\nid = 7\nname = \"Cable\"\n\
                 category = \"Accessories\"\nprice = {value}\n"
            );
            let err = load_str("price", &contents).unwrap_err();
            assert!(format!("{err:#}").contains("Cable"), "{value}: {err:#}");
        }
    }

    #[test]
    fn test_accepts_valid_overrides() {
        let config = load_str("ok", "[ui]\nprice_max = 500.0\nprice_step = 5.0\n").unwrap();
        assert_eq!(config.ui.price_max, 500.0);
        assert_eq!(config.ui.price_step, 5.0);
    }
}
