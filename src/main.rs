//! 本地运行全部函数：商品列表、用户列表、问候与数据库保活

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use pg_functions::app::keep_alive::spawn_schedule;
use pg_functions::config::FunctionsConfig;
use pg_functions::infrastructure::{Logger, PgDatabase};
use pg_functions::server::{self, Backends, Functions};

/// 在本地托管数据库函数
#[derive(Parser, Debug)]
#[command(name = "pg-functions", version, about)]
struct Args {
    /// TOML 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志过滤器（例如 "pg_functions=debug,tower_http=info"）
    #[arg(short, long)]
    log_level: Option<String>,

    /// 监听地址，覆盖配置文件
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FunctionsConfig::load_from_file(path)?,
        None => FunctionsConfig::default(),
    };
    config.apply_env(|key| std::env::var(key).ok())?;

    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    config.logging.apply_override(args.log_level);
    config.validate()?;

    Logger::init(&config.logging);

    for (name, configured) in [
        ("products", config.products.database_url.is_some()),
        ("users", config.users.database_url.is_some()),
        ("keep-alive", config.keep_alive.database_url.is_some()),
    ] {
        if configured {
            info!(function = name, "database configured");
        } else {
            warn!(function = name, "database not configured, invocations will fail");
        }
    }

    let functions = Functions::new(
        &config,
        Backends {
            products: PgDatabase,
            users: PgDatabase,
            pinger: PgDatabase,
        },
    );

    let schedule = functions
        .keep_alive
        .interval()
        .map(|every| spawn_schedule(functions.keep_alive.clone(), every));

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let addr = listener.local_addr()?;

    info!("Functions host running on http://{}", addr);
    info!("   GET  {}", server::PRODUCTS_PATH);
    info!("   GET  {}", server::USERS_PATH);
    info!("   GET  {}?name=Ada", server::HELLO_PATH);
    info!("   POST {}", server::KEEP_ALIVE_PATH);
    info!("   GET  {}", server::HEALTH_PATH);

    axum::serve(listener, functions.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = schedule {
        handle.abort();
    }
    info!("Functions host stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
