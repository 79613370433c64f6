//! 数据库保活任务
//!
//! 定期对数据库执行一条最轻量的查询，防止空闲实例被挂起。只返回成功或失败。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::config::{KeepAliveSettings, PRODUCTS_DATABASE_URL_VAR};
use crate::core::{ErrorKind, StoreError};
use crate::infrastructure::database::{self, PgDatabase};

/// 执行一次 `SELECT 1` 并返回结果
pub trait Pinger: Send + Sync {
    fn ping(&self, database_url: &str) -> impl Future<Output = Result<i32, StoreError>> + Send;
}

impl Pinger for PgDatabase {
    async fn ping(&self, database_url: &str) -> Result<i32, StoreError> {
        database::ping(database_url).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KeepAliveError {
    #[error("{0} not set")]
    MissingConfig(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Keep-alive query returned {0}, expected 1")]
    UnexpectedResult(i32),
}

impl KeepAliveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingConfig(_) => ErrorKind::MissingConfig,
            Self::Store(e) => e.kind(),
            Self::UnexpectedResult(_) => ErrorKind::Query,
        }
    }
}

pub struct KeepAlive<P> {
    settings: KeepAliveSettings,
    pinger: P,
}

impl<P: Pinger> KeepAlive<P> {
    pub fn new(settings: KeepAliveSettings, pinger: P) -> Self {
        Self { settings, pinger }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.settings.interval_secs.map(Duration::from_secs)
    }

    /// 执行一次保活，所有结果都记日志
    pub async fn run(&self) -> Result<(), KeepAliveError> {
        info!("Running keep-alive job to ping database...");

        let result = self.ping_once().await;
        match &result {
            Ok(()) => info!("Keep-alive ping successful. Query result: 1"),
            Err(e) => error!(kind = %e.kind(), "Keep-alive failed: {}", e),
        }
        result
    }

    async fn ping_once(&self) -> Result<(), KeepAliveError> {
        let database_url = self
            .settings
            .database_url
            .as_deref()
            .ok_or(KeepAliveError::MissingConfig(PRODUCTS_DATABASE_URL_VAR))?;

        match self.pinger.ping(database_url).await? {
            1 => Ok(()),
            other => Err(KeepAliveError::UnexpectedResult(other)),
        }
    }
}

/// 按固定间隔在后台执行保活，首个周期立即执行
pub fn spawn_schedule<P>(job: Arc<KeepAlive<P>>, every: Duration) -> JoinHandle<()>
where
    P: Pinger + 'static,
{
    info!(interval_secs = every.as_secs(), "keep-alive schedule started");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            // 失败已在 run 中记录，等下一个周期
            let _ = job.run().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedPinger {
        value: i32,
        calls: AtomicUsize,
    }

    impl FixedPinger {
        fn new(value: i32) -> Self {
            Self {
                value,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Pinger for FixedPinger {
        async fn ping(&self, _database_url: &str) -> Result<i32, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.value)
        }
    }

    fn settings() -> KeepAliveSettings {
        KeepAliveSettings {
            database_url: Some("postgres://localhost/shop".to_string()),
            interval_secs: None,
        }
    }

    #[tokio::test]
    async fn test_success_only_on_one() {
        assert!(KeepAlive::new(settings(), FixedPinger::new(1)).run().await.is_ok());

        for value in [0, 2, -1] {
            let err = KeepAlive::new(settings(), FixedPinger::new(value))
                .run()
                .await
                .unwrap_err();
            assert!(matches!(err, KeepAliveError::UnexpectedResult(v) if v == value));
        }
    }

    #[tokio::test]
    async fn test_missing_database_url() {
        let pinger = FixedPinger::new(1);
        let job = KeepAlive::new(KeepAliveSettings::default(), pinger);
        let err = job.run().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingConfig);
        assert_eq!(err.to_string(), "NEON_DATABASE_URL not set");
        assert_eq!(job.pinger.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_pings_repeatedly() {
        let job = Arc::new(KeepAlive::new(settings(), FixedPinger::new(1)));
        let handle = spawn_schedule(job.clone(), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(150)).await;
        handle.abort();

        // t=0, 60, 120
        assert_eq!(job.pinger.calls.load(Ordering::SeqCst), 3);
    }
}
