//! 保活触发处理器

use std::sync::Arc;

use axum::extract::State;

use super::service::{KeepAlive, Pinger};
use crate::core::FunctionResponse;

/// 手动触发一次保活：成功 204，失败 500 + 错误描述
pub async fn trigger<P>(State(job): State<Arc<KeepAlive<P>>>) -> FunctionResponse
where
    P: Pinger + 'static,
{
    match job.run().await {
        Ok(()) => FunctionResponse::no_content(),
        Err(e) => FunctionResponse::server_error(e.to_string()),
    }
}
