//! 配置基础设施

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "SKIN_CATALOG_CONFIG";

/// 服务配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 模拟网络延迟
    pub latency: LatencyConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// 端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 各查询操作的模拟延迟（毫秒），为 0 时不等待
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub list_products_ms: u64,
    pub product_by_id_ms: u64,
    pub popular_ms: u64,
    pub new_ms: u64,
    pub categories_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            timeout_seconds: 10,
        }
    }
}

impl HttpConfig {
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_products_ms: 800,
            product_by_id_ms: 500,
            popular_ms: 600,
            new_ms: 600,
            categories_ms: 300,
        }
    }
}

impl LatencyConfig {
    /// 不模拟延迟
    pub fn zero() -> Self {
        Self {
            list_products_ms: 0,
            product_by_id_ms: 0,
            popular_ms: 0,
            new_ms: 0,
            categories_ms: 0,
        }
    }

    pub fn list_products(&self) -> Duration {
        Duration::from_millis(self.list_products_ms)
    }

    pub fn product_by_id(&self) -> Duration {
        Duration::from_millis(self.product_by_id_ms)
    }

    pub fn popular(&self) -> Duration {
        Duration::from_millis(self.popular_ms)
    }

    pub fn new_products(&self) -> Duration {
        Duration::from_millis(self.new_ms)
    }

    pub fn categories(&self) -> Duration {
        Duration::from_millis(self.categories_ms)
    }

    /// 所有操作的延迟，按配置键命名
    pub fn entries(&self) -> [(&'static str, Duration); 5] {
        [
            ("list_products_ms", self.list_products()),
            ("product_by_id_ms", self.product_by_id()),
            ("popular_ms", self.popular()),
            ("new_ms", self.new_products()),
            ("categories_ms", self.categories()),
        ]
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// 解析 TOML 文本，缺失的段使用默认值
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        // 模拟延迟必须短于请求超时，否则调用永远无法完成
        let timeout = self.http.timeout();
        for (name, delay) in self.latency.entries() {
            if delay >= timeout {
                return Err(ConfigError::Validation(format!(
                    "延迟 {} = {:?} 不能大于等于请求超时 {:?}",
                    name, delay, timeout
                )));
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从环境变量指定的文件、默认路径或默认值加载配置
pub fn load_config() -> Result<Config, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Config::load_from_file(path);
    }

    let config_paths = ["config.toml", "./config/config.toml"];
    for path in &config_paths {
        if Path::new(path).exists() {
            return Config::load_from_file(path);
        }
    }

    Ok(Config::default())
}
