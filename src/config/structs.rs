use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Environment variable prefix, e.g. `MGMT__MANAGEMENT__REMOTE=1`
pub const ENV_PREFIX: &str = "MGMT";

/// Default configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - management: 是否向管理服务器导出对象
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub management: ManagementConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 `config.toml` 和环境变量加载配置
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// 从指定文件和环境变量加载配置，失败时回退到默认值
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：MGMT，分隔符：__
    /// 示例：MGMT__LOGGING__LEVEL=debug
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load_from(path) {
            Ok(config) => {
                if path.exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path.display());
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// Like [`StaticConfig::load_from`] but reports failures.
    pub fn try_load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_load_with_env(path, None)
    }

    /// Load from `path`, overriding with `env` instead of the process
    /// environment when given. Keys keep the `MGMT__` form.
    pub fn try_load_with_env<P: AsRef<Path>>(
        path: P,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::from(path.as_ref()).required(false))
            // 2. 从环境变量覆盖，前缀 MGMT，分隔符 __
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

/// 管理导出配置
///
/// `remote` 只看是否存在，不看取值：任何值都表示启用。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ManagementConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

impl ManagementConfig {
    pub fn enabled() -> Self {
        Self {
            remote: Some(String::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.remote.is_some()
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
