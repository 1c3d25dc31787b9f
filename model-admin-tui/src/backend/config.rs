//! 配置服务
//!
//! 配置文件为 TOML：
//!
//! ```toml
//! theme = "dark"
//!
//! [backend]
//! base_url = "http://localhost:3000/api/admin"
//! api_token = "..."
//!
//! [view]
//! table_column_limit = 8
//! page_limit = 10
//! page_limit_options = [10, 20, 50, 100]
//! long_text_markers = ["description", "content", "notes"]
//! numeric_input = "coerce-to-zero"
//! ```
//!
//! 所有字段均可省略。

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use model_admin_core::ViewSettings;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "MODEL_ADMIN_CONFIG";
/// 覆盖后端地址的环境变量
pub const BASE_URL_ENV: &str = "MODEL_ADMIN_URL";
/// 覆盖访问令牌的环境变量
pub const API_TOKEN_ENV: &str = "MODEL_ADMIN_TOKEN";

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/admin";

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub backend: BackendConfig,
    pub view: ViewSettings,
}

/// 后端连接配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_token: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地文件配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认配置文件路径
    ///
    /// `$MODEL_ADMIN_CONFIG`，否则 `<config_dir>/model-admin/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join("model-admin").join("config.toml"))
            .ok_or_else(|| anyhow!("Unable to determine the configuration directory"))
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!(
                "No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        config
            .view
            .validate()
            .with_context(|| format!("Invalid [view] settings in {}", self.path.display()))?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}

/// 用环境变量覆盖后端设置
///
/// `lookup` 通常为 `std::env::var(..).ok()`；空字符串视为未设置。
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(BASE_URL_ENV) {
        config.backend.base_url = url;
    }
    if let Some(token) = non_empty(API_TOKEN_ENV) {
        config.backend.api_token = Some(token);
    }
}
