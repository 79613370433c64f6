//! 单次执行数据库保活，退出码表示成功与否，供外部定时器调用

use std::process::ExitCode;

use pg_functions::app::keep_alive::KeepAlive;
use pg_functions::config::FunctionsConfig;
use pg_functions::infrastructure::{Logger, PgDatabase};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match FunctionsConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut logging = config.logging.clone();
    logging.apply_override(None);
    Logger::init(&logging);

    match KeepAlive::new(config.keep_alive, PgDatabase).run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
