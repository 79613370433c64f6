//! 日志基础设施

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;

pub struct Logger;

impl Logger {
    /// 初始化全局日志
    ///
    /// 重复初始化（例如多个测试）时静默忽略。
    pub fn init(settings: &LoggingSettings) {
        let filter = EnvFilter::new(&settings.level);

        let registry = tracing_subscriber::registry().with(filter);
        let result = if settings.json {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer().with_target(false).compact()).try_init()
        };

        if result.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    }
}
