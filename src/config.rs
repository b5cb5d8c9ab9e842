use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 既定のスキャンルートと出力先
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub scan_root: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("spell-catalog").join("config.json"))
    }

    /// 引数を優先し、なければ設定値を使う
    pub fn resolve_root(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.scan_root.clone()).ok_or_else(|| {
            CatalogError::Config(
                "スキャンルートが未指定です。引数か `spell-catalog config --set-root` で指定してください".into(),
            )
        })
    }

    pub fn resolve_output(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.output.clone()).ok_or_else(|| {
            CatalogError::Config(
                "出力先が未指定です。`--output` か `spell-catalog config --set-output` で指定してください".into(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            scan_root: Some(PathBuf::from("/data/松韵")),
            output: Some(PathBuf::from("/data/spells_data.json")),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"scan_root": "/data"}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scan_root, Some(PathBuf::from("/data")));
        assert_eq!(loaded.output, None);
    }

    #[test]
    fn test_resolve_prefers_argument() {
        let config = Config {
            scan_root: Some(PathBuf::from("/from/config")),
            output: None,
        };
        assert_eq!(
            config.resolve_root(Some(PathBuf::from("/from/arg"))).unwrap(),
            PathBuf::from("/from/arg")
        );
        assert_eq!(config.resolve_root(None).unwrap(), PathBuf::from("/from/config"));
        assert!(matches!(config.resolve_output(None), Err(CatalogError::Config(_))));
    }
}
