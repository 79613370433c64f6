//! 函数配置
//!
//! 所有处理器都通过显式的配置对象拿到连接字符串，不在处理过程中读取环境变量。
//! 配置来源按优先级：环境变量 > 配置文件 > 默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 商品库 / 保活任务使用的环境变量
pub const PRODUCTS_DATABASE_URL_VAR: &str = "NEON_DATABASE_URL";
/// 用户库使用的环境变量
pub const USERS_DATABASE_URL_VAR: &str = "SUPABASE_DATABASE_URL";
/// 定时保活间隔（秒）
pub const KEEP_ALIVE_INTERVAL_VAR: &str = "KEEP_ALIVE_INTERVAL_SECS";

/// 默认日志过滤器
pub const DEFAULT_LOG_FILTER: &str = "pg_functions=info,tower_http=info";

/// 根配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionsConfig {
    /// 商品列表函数
    pub products: ProductsSettings,
    /// 用户列表函数
    pub users: UsersSettings,
    /// 数据库保活任务
    pub keep_alive: KeepAliveSettings,
    /// 本地 HTTP 服务
    pub server: ServerSettings,
    /// 日志
    pub logging: LoggingSettings,
}

/// 商品列表函数配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsSettings {
    pub database_url: Option<String>,
    /// 是否在响应中附带耗时字段
    pub timing: bool,
}

/// 用户列表函数配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersSettings {
    pub database_url: Option<String>,
    /// 逐阶段输出诊断日志（连接串会脱敏）
    pub diagnostics: bool,
}

/// 保活任务配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepAliveSettings {
    pub database_url: Option<String>,
    /// 定时执行间隔，未设置时不启动定时任务
    pub interval_secs: Option<u64>,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// 绑定地址
    pub bind_address: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// EnvFilter 语法的过滤器
    pub level: String,
    /// 输出 JSON 格式日志
    pub json: bool,
}

impl Default for ProductsSettings {
    fn default() -> Self {
        Self {
            database_url: None,
            timing: true,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8888".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl LoggingSettings {
    /// 过滤器优先级：显式指定 > RUST_LOG > 当前配置
    pub fn apply_override(&mut self, explicit: Option<String>) {
        self.apply_override_with(explicit, std::env::var("RUST_LOG").ok());
    }

    fn apply_override_with(&mut self, explicit: Option<String>, from_env: Option<String>) {
        if let Some(level) = explicit.or(from_env).filter(|l| !l.is_empty()) {
            self.level = level;
        }
    }
}

impl FunctionsConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: FunctionsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 默认配置叠加进程环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// 用给定的查找函数覆盖连接串等字段，便于测试替换环境
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(url) = non_empty(PRODUCTS_DATABASE_URL_VAR) {
            self.products.database_url = Some(url.clone());
            self.keep_alive.database_url = Some(url);
        }
        if let Some(url) = non_empty(USERS_DATABASE_URL_VAR) {
            self.users.database_url = Some(url);
        }
        if let Some(raw) = non_empty(KEEP_ALIVE_INTERVAL_VAR) {
            let secs = raw.parse::<u64>().map_err(|e| {
                ConfigError::Validation(format!("{}={}: {}", KEEP_ALIVE_INTERVAL_VAR, raw, e))
            })?;
            self.keep_alive.interval_secs = Some(secs);
        }

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.keep_alive.interval_secs == Some(0) {
            return Err(ConfigError::Validation("保活间隔必须大于0".to_string()));
        }
        if self.logging.level.is_empty() {
            return Err(ConfigError::Validation("日志过滤器不能为空".to_string()));
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
