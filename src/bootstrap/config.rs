//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and hands it to `AppConfig::from_toml`.
//! Defaults (labels, catalog resource, timeout) are applied later, during wiring.
//! 仅负责读取与解析，默认值在组装阶段处理。

use anyhow::Context;
use cc_core::config::AppConfig;
use std::path::PathBuf;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [catalog]
            base_url = "https://pokeapi.co/api/v2"
            resource = "pokemon"
            timeout_ms = 3000

            [labels]
            loading = "Chargement..."

            [[creators]]
            name = "Ada"
            role = "Developer"
            age = 24
            favorite_entity_id = 25

            [[creators]]
            name = "Tom"
            role = "Designer"
            age = 31
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.catalog.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog.resource, "pokemon");
        assert_eq!(config.catalog.timeout_ms, 3000);
        assert_eq!(config.labels.loading, "Chargement...");
        assert_eq!(config.creators.len(), 2);
        assert_eq!(
            config.creators[0].favorite_entity_id.map(|id| id.get()),
            Some(25)
        );
        assert_eq!(config.creators[1].favorite_entity_id, None);
    }

    /// Missing sections are facts, not errors
    /// 缺失的部分不是错误
    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let temp_file = write_config("# nothing configured\n");

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.catalog.base_url, "");
        assert_eq!(config.catalog.timeout_ms, 0);
        assert_eq!(config.labels.error, "");
        assert!(config.creators.is_empty());
    }

    #[test]
    fn test_load_config_drops_invalid_favorite_id() {
        let temp_file = write_config(
            r#"
            [[creators]]
            name = "Zed"
            favorite_entity_id = 0
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.creators[0].name, "Zed");
        assert_eq!(config.creators[0].favorite_entity_id, None);
    }

    #[test]
    fn test_load_config_fails_on_missing_file() {
        let result = load_config(PathBuf::from("/nonexistent/creator-cards.toml"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_fails_on_invalid_toml() {
        let temp_file = write_config("[catalog\nbase_url = ");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
