use crate::error::{FreshTechError, Result};
use freshtech_common::DEFAULT_BACKEND_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// バックエンドURLを上書きする環境変数
pub const BACKEND_URL_ENV: &str = "FRESHTECH_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FreshTechError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("freshtech").join("config.json"))
    }

    /// 使用するバックエンドURL
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_backend_url(&self, cli_override: Option<&str>) -> Result<String> {
        let env_value = std::env::var(BACKEND_URL_ENV).ok();
        let url = cli_override
            .map(str::to_string)
            .or(env_value.filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| self.backend_url.clone());
        validate_backend_url(&url)?;
        Ok(url.trim_end_matches('/').to_string())
    }

    pub fn set_backend_url(&mut self, url: String) -> Result<()> {
        validate_backend_url(&url)?;
        self.backend_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(FreshTechError::Config("タイムアウトは1秒以上を指定してください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }
}

fn validate_backend_url(url: &str) -> Result<()> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(FreshTechError::Config(format!(
            "バックエンドURLは http:// または https:// で始めてください: {}",
            url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config::default();
        let url = config
            .resolve_backend_url(Some("https://api.example.com/"))
            .unwrap();
        assert_eq!(url, "https://api.example.com");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = Config::default();
        assert!(config.set_backend_url("ftp://example.com".into()).is_err());
        assert!(config.resolve_backend_url(Some("localhost:5000")).is_err());
        assert_eq!(config.backend_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        assert!(config.set_timeout(0).is_err());
        config.set_timeout(15).unwrap();
        assert_eq!(config.timeout_seconds, 15);
    }
}
