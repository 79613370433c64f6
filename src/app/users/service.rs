//! 用户业务服务

use std::future::Future;
use std::time::Duration;

use tracing::{error, info};

use super::model::{User, UsersResponse};
use crate::config::{UsersSettings, USERS_DATABASE_URL_VAR};
use crate::core::{FunctionResponse, HandlerError, StoreError};
use crate::infrastructure::database::{self, redact, PgDatabase, Timed};

const LIST_USERS_SQL: &str = "SELECT id::bigint AS id, username, email FROM users ORDER BY id";

/// 用户数据访问接口
pub trait UserStore: Send + Sync {
    /// 按 id 升序返回全部用户，并分别记录连接与查询耗时
    fn list_users(
        &self,
        database_url: &str,
    ) -> impl Future<Output = Result<Timed<Vec<User>>, StoreError>> + Send;
}

impl UserStore for PgDatabase {
    async fn list_users(&self, database_url: &str) -> Result<Timed<Vec<User>>, StoreError> {
        database::fetch_all_timed(database_url, LIST_USERS_SQL).await
    }
}

/// 毫秒，保留两位小数，带单位
pub fn format_millis(duration: Duration) -> String {
    format!("{:.2}ms", duration.as_micros() as f64 / 1000.0)
}

#[derive(Clone)]
pub struct UserService<S> {
    settings: UsersSettings,
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(settings: UsersSettings, store: S) -> Self {
        Self { settings, store }
    }

    pub async fn invoke(&self) -> FunctionResponse {
        self.try_invoke().await.unwrap_or_else(FunctionResponse::from)
    }

    async fn try_invoke(&self) -> Result<FunctionResponse, HandlerError> {
        let diagnostics = self.settings.diagnostics;

        let Some(database_url) = self.settings.database_url.as_deref() else {
            if diagnostics {
                error!("{} is not configured", USERS_DATABASE_URL_VAR);
            }
            return Err(HandlerError::MissingConfig(USERS_DATABASE_URL_VAR));
        };

        if diagnostics {
            info!(database = %redact(database_url), "connecting to users database");
        }

        let result = match self.store.list_users(database_url).await {
            Ok(result) => result,
            Err(e) => {
                if diagnostics {
                    error!(stage = %e.kind(), "{}", e.timed_message());
                }
                return Err(HandlerError::TimedStore(e));
            }
        };

        let response = UsersResponse {
            connection_time: format_millis(result.connect_time),
            query_time: format_millis(result.query_time),
            data: result.rows,
        };

        if diagnostics {
            info!(
                rows = response.data.len(),
                connection_time = %response.connection_time,
                query_time = %response.query_time,
                "users query finished"
            );
        }

        Ok(FunctionResponse::json(&response)?)
    }
}
