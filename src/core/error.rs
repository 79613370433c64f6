//! 核心错误处理模块
//!
//! 所有失败最终都变成 500 + 纯文本描述；`ErrorKind` 给测试和日志一个稳定的分类。

use std::fmt;
use std::time::Duration;

use axum::response::{IntoResponse, Response};

use super::response::FunctionResponse;

/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 缺少连接串等配置
    MissingConfig,
    /// 建立数据库连接失败
    Connection,
    /// 查询执行失败
    Query,
    /// 行解码失败
    Decode,
    /// 读取结果集过程中失败
    Iteration,
    /// 响应序列化失败
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfig => write!(f, "missing_config"),
            Self::Connection => write!(f, "connection"),
            Self::Query => write!(f, "query"),
            Self::Decode => write!(f, "decode"),
            Self::Iteration => write!(f, "iteration"),
            Self::Serialization => write!(f, "serialization"),
        }
    }
}

/// 数据访问层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unable to connect to database: {source}")]
    Connect {
        #[source]
        source: sqlx::Error,
        elapsed: Duration,
    },

    #[error("Query failed: {source}")]
    Query {
        #[source]
        source: sqlx::Error,
        elapsed: Duration,
    },

    #[error("Failed to scan row: {0}")]
    Decode(#[source] sqlx::Error),

    #[error("Error during rows iteration: {0}")]
    Iteration(#[source] sqlx::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Connect { .. } => ErrorKind::Connection,
            Self::Query { .. } => ErrorKind::Query,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Iteration(_) => ErrorKind::Iteration,
        }
    }

    /// 带阶段耗时的描述，连接和查询失败时附上 `(took ...)`
    pub fn timed_message(&self) -> String {
        match self {
            Self::Connect { source, elapsed } => {
                format!("Unable to connect to database (took {:?}): {}", elapsed, source)
            }
            Self::Query { source, elapsed } => {
                format!("Query failed (took {:?}): {}", elapsed, source)
            }
            other => other.to_string(),
        }
    }
}

/// 处理器错误
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0} not set")]
    MissingConfig(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// 错误描述中附带阶段耗时
    #[error("{}", .0.timed_message())]
    TimedStore(StoreError),

    #[error("Failed to marshal response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HandlerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingConfig(_) => ErrorKind::MissingConfig,
            Self::Store(e) | Self::TimedStore(e) => e.kind(),
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

impl From<HandlerError> for FunctionResponse {
    fn from(err: HandlerError) -> Self {
        tracing::error!(kind = %err.kind(), "{}", err);
        FunctionResponse::server_error(err.to_string())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        FunctionResponse::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_names_variable() {
        let err = HandlerError::MissingConfig("NEON_DATABASE_URL");
        assert_eq!(err.to_string(), "NEON_DATABASE_URL not set");
        assert_eq!(err.kind(), ErrorKind::MissingConfig);
    }

    #[test]
    fn test_timed_message_includes_elapsed() {
        let err = StoreError::Connect {
            source: sqlx::Error::Protocol("refused".to_string()),
            elapsed: Duration::from_millis(12),
        };
        assert!(err.to_string().starts_with("Unable to connect to database: "));

        let timed = HandlerError::TimedStore(err).to_string();
        assert!(timed.starts_with("Unable to connect to database (took 12ms): "));
        assert!(timed.contains("refused"));
    }

    #[test]
    fn test_decode_message_has_no_elapsed() {
        let err = StoreError::Decode(sqlx::Error::ColumnNotFound("price".to_string()));
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.timed_message(), err.to_string());
        assert!(err.to_string().starts_with("Failed to scan row: "));
    }

    #[test]
    fn test_error_becomes_server_error() {
        let response = FunctionResponse::from(HandlerError::MissingConfig("SUPABASE_DATABASE_URL"));
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "SUPABASE_DATABASE_URL not set");
    }
}
